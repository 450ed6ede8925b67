mod tests {
    use beak_animator::{
        Animation, AnimationRegistry, BeakAnimator, BeakConfig, BeakController, Cue, CueChannel,
        Duration, EasingCurve, IdlePolicy, Keyframe, ServoDriver, Timestamp,
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Write(u16),
        Attach,
        Detach,
    }

    #[derive(Default)]
    struct MockServo {
        events: Vec<Event>,
    }

    impl ServoDriver for MockServo {
        fn write_pulse(&mut self, pulse_us: u16) {
            self.events.push(Event::Write(pulse_us));
        }

        fn attach(&mut self) {
            self.events.push(Event::Attach);
        }

        fn detach(&mut self) {
            self.events.push(Event::Detach);
        }
    }

    const RAMP_FRAMES: [Keyframe; 2] = [Keyframe::new(0, 0), Keyframe::new(1000, 100)];
    const HOLD_FRAMES: [Keyframe; 2] = [Keyframe::new(0, 50), Keyframe::new(1000, 50)];
    const ANIMATIONS: [Animation<'static>; 2] = [
        Animation::new(1, "ramp", &RAMP_FRAMES),
        Animation::new(2, "hold", &HOLD_FRAMES),
    ];

    fn animator(idle_policy: IdlePolicy) -> BeakAnimator<'static> {
        let registry = AnimationRegistry::new(&ANIMATIONS).unwrap();
        let config = BeakConfig {
            curve: EasingCurve::new(1000, 2000, 1.0),
            sync_delay: Duration::from_millis(100),
            idle_policy,
        };
        BeakAnimator::new(registry, config)
    }

    fn at(millis: u32) -> Timestamp {
        Timestamp::from_millis(millis)
    }

    #[test]
    fn test_detach_when_idle() {
        let cues: CueChannel<4> = CueChannel::new();
        let mut controller =
            BeakController::new(animator(IdlePolicy::Detach), MockServo::default(), cues.receiver());

        cues.post(Cue::new(2, at(100)));
        assert!(!controller.tick(at(0)).wrote);
        assert!(!controller.is_attached());

        assert!(controller.tick(at(100)).wrote);
        assert!(controller.is_attached());
        assert!(!controller.tick(at(120)).wrote);
        assert!(!controller.tick(at(1_100)).wrote);

        assert!(!controller.tick(at(1_120)).wrote);
        assert!(!controller.is_attached());
        assert_eq!(
            controller.driver().events,
            [Event::Write(1500), Event::Attach, Event::Detach]
        );
    }

    #[test]
    fn test_reattach_on_next_animation() {
        let cues: CueChannel<4> = CueChannel::new();
        let mut controller =
            BeakController::new(animator(IdlePolicy::Detach), MockServo::default(), cues.receiver());

        cues.post(Cue::new(2, at(0)));
        controller.tick(at(0));
        controller.tick(at(1_000));
        controller.tick(at(1_020));

        cues.post(Cue::new(2, at(2_000)));
        controller.tick(at(2_000));
        assert_eq!(
            controller.driver().events,
            [
                Event::Write(1500),
                Event::Attach,
                Event::Detach,
                Event::Write(1500),
                Event::Attach,
            ]
        );
    }

    #[test]
    fn test_hold_energized_never_detaches() {
        let cues: CueChannel<4> = CueChannel::new();
        let mut controller = BeakController::new(
            animator(IdlePolicy::HoldEnergized),
            MockServo::default(),
            cues.receiver(),
        );

        cues.post(Cue::new(2, at(0)));
        for millis in (0..=2_000).step_by(20) {
            controller.tick(at(millis));
        }
        assert!(controller.is_attached());
        assert_eq!(
            controller.driver().events,
            [Event::Write(1500), Event::Attach]
        );
    }

    #[test]
    fn test_last_cue_wins() {
        let cues: CueChannel<4> = CueChannel::new();
        let mut controller =
            BeakController::new(animator(IdlePolicy::Detach), MockServo::default(), cues.receiver());

        cues.post(Cue::new(1, at(0)));
        cues.post(Cue::new(2, at(0)));
        controller.tick(at(0));
        assert_eq!(controller.driver().events[0], Event::Write(1500));
    }

    #[test]
    fn test_unknown_cue_is_ignored() {
        let cues: CueChannel<4> = CueChannel::new();
        let mut controller =
            BeakController::new(animator(IdlePolicy::Detach), MockServo::default(), cues.receiver());

        cues.post(Cue::new(42, at(0)));
        assert!(!controller.tick(at(0)).wrote);
        assert!(!controller.animator().is_busy());
    }

    #[test]
    fn test_direct_queue_through_animator() {
        let cues: CueChannel<4> = CueChannel::new();
        let mut controller =
            BeakController::new(animator(IdlePolicy::Detach), MockServo::default(), cues.receiver());

        controller
            .animator_mut()
            .queue_after_sync(1, at(0))
            .unwrap();
        assert!(!controller.tick(at(50)).wrote);
        assert!(controller.tick(at(100)).wrote);
        assert_eq!(controller.driver().events[0], Event::Write(1000));
    }

    #[test]
    fn test_full_channel_displaces_oldest_cue() {
        let cues: CueChannel<2> = CueChannel::new();
        let sender = cues.sender();
        assert_eq!(sender.post(Cue::new(1, at(0))), None);
        assert_eq!(sender.post(Cue::new(2, at(0))), None);
        assert_eq!(sender.post(Cue::new(3, at(0))), Some(Cue::new(1, at(0))));
        assert_eq!(cues.len(), 2);

        assert_eq!(cues.receiver().take_latest(), Some(Cue::new(3, at(0))));
        assert!(cues.is_empty());
        assert_eq!(cues.receiver().take_latest(), None);
    }

    #[test]
    fn test_tick_pacing() {
        let cues: CueChannel<4> = CueChannel::new();
        let mut controller = BeakController::with_tick_duration(
            animator(IdlePolicy::Detach),
            MockServo::default(),
            cues.receiver(),
            Duration::from_millis(20),
        );

        let result = controller.tick(at(0));
        assert_eq!(result.next_deadline, at(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        let result = controller.tick(at(25));
        assert_eq!(result.next_deadline, at(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(15));
    }

    #[test]
    fn test_tick_drift_correction() {
        let cues: CueChannel<4> = CueChannel::new();
        let mut controller = BeakController::with_tick_duration(
            animator(IdlePolicy::Detach),
            MockServo::default(),
            cues.receiver(),
            Duration::from_millis(20),
        );

        controller.tick(at(0));
        let result = controller.tick(at(500));
        assert_eq!(result.next_deadline, at(520));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }

    #[test]
    fn test_first_tick_late_in_counter_range() {
        let cues: CueChannel<4> = CueChannel::new();
        let mut controller = BeakController::with_tick_duration(
            animator(IdlePolicy::Detach),
            MockServo::default(),
            cues.receiver(),
            Duration::from_millis(20),
        );

        let result = controller.tick(at(3_000_000_000));
        assert_eq!(result.next_deadline, at(3_000_000_020));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }

    #[test]
    fn test_first_tick_just_before_wrap() {
        let cues: CueChannel<4> = CueChannel::new();
        let mut controller = BeakController::with_tick_duration(
            animator(IdlePolicy::Detach),
            MockServo::default(),
            cues.receiver(),
            Duration::from_millis(20),
        );

        let result = controller.tick(at(u32::MAX - 5));
        assert_eq!(result.next_deadline, at(14));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        let result = controller.tick(at(15));
        assert_eq!(result.next_deadline, at(34));
        assert_eq!(result.sleep_duration, Duration::from_millis(19));
    }
}
