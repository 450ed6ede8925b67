mod tests {
    use beak_animator::{Cue, Duration, Instant, Timestamp};

    #[test]
    fn test_millis_since() {
        let start = Timestamp::from_millis(1_000);
        assert_eq!(Timestamp::from_millis(1_250).millis_since(start), 250);
        assert_eq!(start.millis_since(start), 0);
    }

    #[test]
    fn test_millis_since_across_rollover() {
        let start = Timestamp::from_millis(u32::MAX - 99);
        let now = Timestamp::from_millis(400);
        assert_eq!(now.millis_since(start), 500);
    }

    #[test]
    fn test_has_reached() {
        let deadline = Timestamp::from_millis(1_000);
        assert!(!Timestamp::from_millis(999).has_reached(deadline));
        assert!(Timestamp::from_millis(1_000).has_reached(deadline));
        assert!(Timestamp::from_millis(1_001).has_reached(deadline));
    }

    #[test]
    fn test_has_reached_across_rollover() {
        let deadline = Timestamp::from_millis(50);
        assert!(!Timestamp::from_millis(u32::MAX - 10).has_reached(deadline));
        assert!(Timestamp::from_millis(50).has_reached(deadline));

        let deadline = Timestamp::from_millis(u32::MAX - 10);
        assert!(Timestamp::from_millis(5).has_reached(deadline));
    }

    #[test]
    fn test_wrapping_add() {
        let now = Timestamp::from_millis(u32::MAX);
        let later = now.wrapping_add(Duration::from_millis(100));
        assert_eq!(later.as_millis(), 99);
    }

    #[test]
    fn test_from_instant_truncates() {
        let instant = Instant::from_millis(5_000_000_000);
        assert_eq!(Timestamp::from(instant).as_millis(), 705_032_704);
    }

    #[test]
    fn test_cue_after_sync() {
        let cue = Cue::after_sync(3, Timestamp::from_millis(1_000), Duration::from_millis(120));
        assert_eq!(cue.track, 3);
        assert_eq!(cue.start, Timestamp::from_millis(1_120));
    }
}
