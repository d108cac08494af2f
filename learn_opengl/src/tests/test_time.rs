use std::time::{Duration, Instant};

use crate::core::time::Time;

#[test]
fn test_step() {
    let start = Instant::now();
    let mut time = Time::new(start);
    assert_eq!(time.frame_count(), 0);
    assert_eq!(time.delta_seconds(), 0.0);

    time.step(start + Duration::from_millis(16));
    assert_eq!(time.frame_count(), 1);
    assert!((time.delta_seconds() - 0.016).abs() < 1e-5);

    time.step(start + Duration::from_millis(48));
    assert_eq!(time.frame_count(), 2);
    assert!((time.delta_seconds() - 0.032).abs() < 1e-5);
    assert_eq!(time.elapsed(), Duration::from_millis(48));
}

#[test]
fn test_step_backwards_is_zero() {
    let start = Instant::now();
    let mut time = Time::new(start + Duration::from_millis(10));

    time.step(start);
    assert_eq!(time.delta_seconds(), 0.0);
    assert_eq!(time.elapsed(), Duration::ZERO);
}
