mod tests {
    use beak_animator::config::{PULSE_MAX_US, PULSE_MIN_US};
    use beak_animator::profile::{self, PROFILES};
    use beak_animator::{
        Animation, AnimationError, AnimationRegistry, BeakConfig, ConfigError, Duration,
        EasingCurve, IdlePolicy, Keyframe, ProfileError, tracks,
    };

    const TWO: [Keyframe; 2] = [Keyframe::new(0, 0), Keyframe::new(100, 100)];
    const ONE: [Keyframe; 1] = [Keyframe::new(0, 0)];
    const BACKWARDS: [Keyframe; 3] = [
        Keyframe::new(0, 0),
        Keyframe::new(200, 50),
        Keyframe::new(150, 0),
    ];

    fn config(closed: u16, open: u16, exponent: f32) -> BeakConfig {
        BeakConfig {
            curve: EasingCurve::new(closed, open, exponent),
            sync_delay: Duration::from_millis(100),
            idle_policy: IdlePolicy::Detach,
        }
    }

    #[test]
    fn test_rejects_single_keyframe() {
        let animations = [Animation::new(1, "short", &ONE)];
        assert_eq!(
            AnimationRegistry::new(&animations).unwrap_err(),
            AnimationError::TooFewKeyframes { id: 1 }
        );
    }

    #[test]
    fn test_rejects_empty_animation() {
        let animations = [Animation::new(4, "empty", &[])];
        assert_eq!(
            AnimationRegistry::new(&animations).unwrap_err(),
            AnimationError::TooFewKeyframes { id: 4 }
        );
    }

    #[test]
    fn test_rejects_decreasing_timestamps() {
        let animations = [
            Animation::new(1, "ok", &TWO),
            Animation::new(2, "backwards", &BACKWARDS),
        ];
        assert_eq!(
            AnimationRegistry::new(&animations).unwrap_err(),
            AnimationError::UnorderedKeyframes { id: 2, index: 2 }
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let animations = [Animation::new(7, "a", &TWO), Animation::new(7, "b", &TWO)];
        assert_eq!(
            AnimationRegistry::new(&animations).unwrap_err(),
            AnimationError::DuplicateId { id: 7 }
        );
    }

    #[test]
    fn test_lookup() {
        let animations = [Animation::new(3, "a", &TWO), Animation::new(9, "b", &TWO)];
        let registry = AnimationRegistry::new(&animations).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(9).map(|a| a.name), Some("b"));
        assert_eq!(registry.get(4), None);
        assert_eq!(registry.by_index(0).map(|a| a.id), Some(3));
        assert_eq!(registry.by_index(2), None);
    }

    #[test]
    fn test_builtin_tracks_are_valid() {
        for set in [&tracks::TUNED, &tracks::CLASSIC] {
            let registry = AnimationRegistry::new(set).unwrap();
            assert_eq!(registry.len(), tracks::TRACK_COUNT);
            for (index, animation) in registry.iter().enumerate() {
                assert_eq!(usize::from(animation.id), index + 1);
                assert_eq!(animation.keyframes[0].time_ms, 0);
                assert_eq!(animation.keyframes.last().map(|k| k.position), Some(0));
            }
        }
    }

    #[test]
    fn test_track_duration() {
        assert_eq!(tracks::TUNED[0].duration_ms(), 1950);
        assert_eq!(tracks::TUNED[11].duration_ms(), 5050);
        assert_eq!(tracks::CLASSIC[11].duration_ms(), 5030);
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(config(1250, 1050, 3.0).validate(), Ok(()));
        assert_eq!(
            config(PULSE_MIN_US, PULSE_MAX_US, 1.0).validate(),
            Ok(())
        );
        assert_eq!(
            config(1250, 1050, 0.0).validate(),
            Err(ConfigError::InvalidExponent)
        );
        assert_eq!(
            config(1250, 1050, -1.0).validate(),
            Err(ConfigError::InvalidExponent)
        );
        assert_eq!(
            config(1250, 1050, f32::NAN).validate(),
            Err(ConfigError::InvalidExponent)
        );
        assert_eq!(
            config(1250, 3000, 3.0).validate(),
            Err(ConfigError::LimitOutOfRange { limit: 3000 })
        );
        assert_eq!(
            config(100, 1050, 3.0).validate(),
            Err(ConfigError::LimitOutOfRange { limit: 100 })
        );
    }

    #[test]
    fn test_builtin_profiles_build() {
        for profile in PROFILES {
            let animator = profile.build().unwrap();
            assert_eq!(animator.registry().len(), tracks::TRACK_COUNT);
        }
    }

    #[test]
    fn test_profile_by_name() {
        let esp32 = profile::by_name("esp32").unwrap();
        assert_eq!(esp32.config.idle_policy, IdlePolicy::HoldEnergized);

        let rp2040 = profile::by_name("rp2040").unwrap();
        assert_eq!(rp2040.config.idle_policy, IdlePolicy::Detach);

        assert!(profile::by_name("arduino").is_none());
    }

    #[test]
    fn test_invalid_profile_is_rejected() {
        let mut broken = profile::RP2040;
        broken.config.curve.exponent = 0.0;
        assert_eq!(
            broken.build().unwrap_err(),
            ProfileError::Config(ConfigError::InvalidExponent)
        );
    }
}
