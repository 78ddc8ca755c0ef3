//! Timing of searches.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Timed<V> {
    pub value: V,
    pub elapsed: Duration,
}
impl<V> Timed<V> {
    /// Runs the fallible search `f`, timing it on success.
    pub fn result<E>(f: impl FnOnce() -> Result<V, E>) -> Result<Timed<V>, E> {
        let start_time = Instant::now();
        f().map(|value| Timed {
            value,
            elapsed: start_time.elapsed(),
        })
    }

    /// Elapsed time in milliseconds, for logging.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_micros() as f64 / 1_000.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_ok() {
        let timed = Timed::result(|| Ok::<_, ()>(42)).unwrap();
        assert_eq!(42, timed.value);
        assert!(timed.millis() >= 0.0);
    }

    #[test]
    fn timed_err() {
        assert_eq!(Err("failed"), Timed::<u8>::result(|| Err("failed")));
    }
}
