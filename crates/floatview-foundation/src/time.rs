//! Monotonic event timestamps.

use std::sync::OnceLock;
use web_time::Instant;

static START: OnceLock<Instant> = OnceLock::new();

/// Milliseconds elapsed since the first call in this process.
///
/// Hosts without their own event clock stamp [`MotionEvent`](crate::MotionEvent)s with this.
pub fn uptime_millis() -> u64 {
    let start = START.get_or_init(Instant::now);
    start.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_is_monotonic() {
        let first = uptime_millis();
        let second = uptime_millis();
        assert!(second >= first);
    }
}
