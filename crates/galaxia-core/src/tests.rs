#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::config::{ConfigError, GameConfig, PoolConfig};
    use crate::constants::*;
    use crate::curve::Curve;
    use crate::enums::*;
    use crate::player::{PlayerRecord, PlayerShip};
    use crate::types::{Rect, SimTime, Vec2};

    // ---- Curves ----

    #[test]
    fn test_curve_interpolates_between_keys() {
        let curve = Curve::from_keys(&[(0.0, 0.0), (2.0, 10.0)]);
        assert_eq!(curve.evaluate(1.0), 5.0);
        assert_eq!(curve.evaluate(0.5), 2.5);
    }

    #[test]
    fn test_curve_clamps_outside_range() {
        let curve = Curve::from_keys(&[(1.0, 3.0), (5.0, 7.0)]);
        assert_eq!(curve.evaluate(0.0), 3.0);
        assert_eq!(curve.evaluate(-10.0), 3.0);
        assert_eq!(curve.evaluate(99.0), 7.0);
    }

    #[test]
    fn test_curve_sorts_unordered_keys() {
        let curve = Curve::from_keys(&[(2.0, 10.0), (0.0, 0.0)]);
        assert_eq!(curve.evaluate(1.0), 5.0);
    }

    #[test]
    fn test_empty_curve_is_zero() {
        let curve = Curve::default();
        assert_eq!(curve.evaluate(3.0), 0.0);
    }

    #[test]
    fn test_constant_curve() {
        let curve = Curve::constant(4.5);
        assert_eq!(curve.evaluate(-1.0), 4.5);
        assert_eq!(curve.evaluate(100.0), 4.5);
    }

    // ---- Rects ----

    #[test]
    fn test_rect_corner_order_does_not_matter() {
        // Authored corners may come in any order.
        let rect = Rect::new(Vec2::new(-8.0, 10.0), Vec2::new(8.0, 9.0));
        assert_eq!(rect.min(), Vec2::new(-8.0, 9.0));
        assert_eq!(rect.max(), Vec2::new(8.0, 10.0));
    }

    #[test]
    fn test_rect_random_point_stays_inside() {
        let rect = Rect::new(Vec2::new(-8.0, 10.0), Vec2::new(8.0, 9.0));
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let p = rect.random_point(&mut rng);
            assert!(rect.contains(p), "sampled point {p:?} left the rect");
        }
    }

    #[test]
    fn test_rect_clamp_point() {
        let rect = Rect::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        assert_eq!(rect.clamp_point(Vec2::new(5.0, 0.5)), Vec2::new(1.0, 0.5));
    }

    // ---- Pool configuration ----

    #[test]
    fn test_pool_config_mismatch_is_fatal() {
        let config = PoolConfig {
            kinds: vec![EntityKind::Fighter, EntityKind::Ball],
            counts: vec![4],
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PoolListMismatch { kinds: 2, counts: 1 })
        );
    }

    #[test]
    fn test_default_game_config_is_valid() {
        let config = GameConfig::default_game();
        config.pool.validate().expect("default pool config must validate");
        for (kind, _) in config.pool.entries() {
            if kind.is_enemy() {
                assert!(config.enemy_stats(kind).is_some(), "{kind:?} missing stats");
                assert!(
                    config.shoot_config(kind).is_some(),
                    "{kind:?} missing shoot config"
                );
            }
            if kind.is_projectile() || kind == EntityKind::Bonus {
                assert!(
                    config.motion_profile(kind).is_some(),
                    "{kind:?} missing motion profile"
                );
            }
        }
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Player record ----

    #[test]
    fn test_player_record_mark_death_sticks_once() {
        let mut record = PlayerRecord::default();
        record.mark_death(12.5);
        record.mark_death(99.0);
        assert_eq!(record.survival_secs, 12.5);
    }

    #[test]
    fn test_player_ship_weapon_reset() {
        let mut ship = PlayerShip::default();
        ship.projectiles_per_wave = 4;
        ship.speed_up();
        assert!(ship.fire_interval_secs < PLAYER_BASE_FIRE_INTERVAL);
        ship.reset_weapon();
        assert_eq!(ship.projectiles_per_wave, PLAYER_BASE_PROJECTILES);
        assert_eq!(ship.fire_interval_secs, PLAYER_BASE_FIRE_INTERVAL);
    }

    #[test]
    fn test_player_speed_up_floor() {
        let mut ship = PlayerShip::default();
        for _ in 0..100 {
            ship.speed_up();
        }
        assert!(ship.fire_interval_secs >= PLAYER_MIN_FIRE_INTERVAL);
    }

    // ---- Serde ----

    #[test]
    fn test_entity_kind_serde() {
        let variants = vec![
            EntityKind::Fighter,
            EntityKind::Bomber,
            EntityKind::Boss,
            EntityKind::Ball,
            EntityKind::CurveBall,
            EntityKind::Explosion,
            EntityKind::Bonus,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EntityKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_config_serde_round_trip() {
        let config = GameConfig::default_game();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.pool.kinds, config.pool.kinds);
        assert_eq!(back.pool.counts, config.pool.counts);
        assert_eq!(
            back.motion_profile(EntityKind::CurveBall),
            config.motion_profile(EntityKind::CurveBall)
        );
    }
}
