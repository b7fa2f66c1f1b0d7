//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Player ---

/// Starting player lives.
pub const PLAYER_START_LIFE: i32 = 3;

/// Base projectiles per player shot wave.
pub const PLAYER_BASE_PROJECTILES: u32 = 1;

/// Base delay between player shot waves (seconds).
pub const PLAYER_BASE_FIRE_INTERVAL: f64 = 0.1;

/// Shortest allowed player fire interval after speed bonuses (seconds).
pub const PLAYER_MIN_FIRE_INTERVAL: f64 = 0.04;

/// Fire-interval multiplier applied by a repeated pattern bonus.
pub const PLAYER_SPEED_BONUS_FACTOR: f64 = 0.85;

/// Horizontal spacing between front-pattern shots.
pub const PLAYER_FRONT_SPACING: f64 = 0.35;

/// Invincibility window after taking a hit (seconds).
pub const INVINCIBLE_DURATION_SECS: f64 = 2.0;

/// Sprite blink half-period while invincible (seconds).
pub const BLINK_INTERVAL_SECS: f64 = 0.2;

// --- Bonus drops ---

/// Bonus roll upper bound (rolls are 0..=100).
pub const BONUS_ROLL_BOUND: u32 = 101;

/// Rolls below this value drop a bonus (10%).
pub const BONUS_DROP_CHANCE: u32 = 10;

/// Life bonus is suppressed when player life exceeds this.
pub const LIFE_BONUS_CAP: i32 = 5;

/// Extra-projectile bonus is suppressed when projectiles-per-wave exceeds this.
pub const PROJECTILE_BONUS_CAP: u32 = 5;

// --- Enemies ---

/// Distance at which an enemy counts as arrived at its target point.
pub const ENEMY_ARRIVE_EPSILON: f64 = 0.1;

// --- Collision radii (play-field units) ---

pub const ENEMY_HIT_RADIUS: f64 = 0.5;
pub const BOSS_HIT_RADIUS: f64 = 1.2;
pub const PLAYER_HIT_RADIUS: f64 = 0.35;
pub const PROJECTILE_HIT_RADIUS: f64 = 0.15;
pub const BONUS_PICKUP_RADIUS: f64 = 0.45;

// --- Beam hazard ---

/// Half-width of the beam strip below its owner.
pub const BEAM_HALF_WIDTH: f64 = 0.4;

// --- Effects ---

/// Explosion lifetime before it returns to the pool (seconds).
pub const EXPLOSION_LIFETIME_SECS: f64 = 0.6;

// --- Lane pattern ---

/// Full width of the lane pattern's horizontal band.
pub const LANE_BAND_WIDTH: f64 = 12.0;
