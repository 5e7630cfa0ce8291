use crate::lehmer::MODULUS;
use std::time::{SystemTime, UNIX_EPOCH};

// Maps any integer seed onto [1, m-1]. Zero would pin the recurrence at 0.
pub fn normalize(seed: impl Into<i128>) -> u32 {
    let seed: i128 = seed.into();
    let period = (MODULUS - 1) as i128;
    ((seed - 1).rem_euclid(period) + 1) as u32
}

// Signed milliseconds since the Unix epoch, saturating at the i64 bounds.
pub fn millis_since_epoch(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_millis())
            .map(|ms| -ms)
            .unwrap_or(i64::MIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_normalize_in_range_is_identity() {
        assert_eq!(normalize(1), 1);
        assert_eq!(normalize(123456), 123456);
        assert_eq!(normalize(MODULUS as i64 - 1), MODULUS - 1);
    }

    #[test]
    fn test_normalize_wraps() {
        assert_eq!(normalize(0), MODULUS - 1);
        assert_eq!(normalize(-1), MODULUS - 2);
        assert_eq!(normalize(MODULUS as i64), 1);
        assert_eq!(normalize(MODULUS as i64 + 1), 2);
    }

    #[test]
    fn test_normalize_extremes() {
        for seed in [i64::MIN as i128, i64::MAX as i128, u64::MAX as i128] {
            let s = normalize(seed);
            assert!(s >= 1 && s < MODULUS, "seed {} -> {}", seed, s);
        }
    }

    #[test]
    fn test_millis_since_epoch() {
        assert_eq!(millis_since_epoch(UNIX_EPOCH), 0);
        assert_eq!(
            millis_since_epoch(UNIX_EPOCH + Duration::from_millis(1_700_000_000_123)),
            1_700_000_000_123
        );
        assert_eq!(
            millis_since_epoch(UNIX_EPOCH - Duration::from_millis(2500)),
            -2500
        );
    }
}
