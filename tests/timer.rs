mod tests {
    use embassy_time::{Duration, Instant};
    use rib_cage_composer::{Periodic, Timer};

    const WRAP: u64 = 1 << 32;

    #[test]
    fn test_timer_complete() {
        let mut timer = Timer::new(Duration::from_millis(5000));
        timer.reset(Instant::from_millis(1000));
        assert!(!timer.complete(Instant::from_millis(1000)));
        assert!(!timer.complete(Instant::from_millis(6000)));
        assert!(timer.complete(Instant::from_millis(6001)));

        timer.reset(Instant::from_millis(6001));
        assert!(!timer.complete(Instant::from_millis(7000)));
        assert_eq!(timer.total(), Duration::from_millis(5000));
    }

    #[test]
    fn test_timer_across_wraparound() {
        let mut timer = Timer::new(Duration::from_millis(100));
        timer.reset(Instant::from_millis(WRAP - 50));
        assert!(!timer.complete(Instant::from_millis(WRAP + 40)));
        assert!(timer.complete(Instant::from_millis(WRAP + 51)));
    }

    #[test]
    fn test_periodic_arms_on_first_call() {
        let mut guard = Periodic::new(Duration::from_millis(10));
        assert!(!guard.ready(Instant::from_millis(500)));
        assert!(!guard.ready(Instant::from_millis(509)));
        assert!(guard.ready(Instant::from_millis(510)));
        assert!(!guard.ready(Instant::from_millis(510)));
        assert!(guard.ready(Instant::from_millis(525)));
        assert!(!guard.ready(Instant::from_millis(534)));
    }

    #[test]
    fn test_periodic_across_wraparound() {
        let mut guard = Periodic::new(Duration::from_secs(10));
        guard.reset(Instant::from_millis(WRAP - 4_000));
        assert!(!guard.ready(Instant::from_millis(WRAP + 5_999)));
        assert!(guard.ready(Instant::from_millis(WRAP + 6_000)));
        assert_eq!(guard.period(), Duration::from_secs(10));
    }
}
