//! Checkpoint: the persisted `lastTimestamp` that enforces the re-run interval.

/// State store key holding the checkpoint.
pub const LAST_TIMESTAMP_KEY: &str = "lastTimestamp";

/// Unix time (seconds) of the last successful decision.
///
/// `0` means "never run". The value only ever moves forward because it is
/// written with the current block time after every gate has passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint {
    last_timestamp: u64,
}

impl Checkpoint {
    pub fn new(last_timestamp: u64) -> Self {
        Self { last_timestamp }
    }

    pub fn last_timestamp(&self) -> u64 {
        self.last_timestamp
    }

    /// Read the stored string leniently.
    ///
    /// Leading decimal digits are taken and the rest is ignored, so
    /// `"1700000000.0"` reads as `1700000000`. A value without leading digits
    /// (or a negative one) reads as "never run", which lets the next
    /// successful run overwrite it with a clean timestamp. Digits past
    /// `u64::MAX` saturate.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let raw = raw.trim_start();
        let (negative, rest) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };
        if negative {
            return Self::default();
        }
        let last_timestamp = rest
            .bytes()
            .take_while(u8::is_ascii_digit)
            .fold(0u64, |acc, d| {
                acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
            });
        Self::new(last_timestamp)
    }

    /// Value written back to the state store.
    pub fn encode(&self) -> String {
        self.last_timestamp.to_string()
    }

    /// `true` once `now >= last_timestamp + interval_secs`.
    pub fn is_due(&self, now: u64, interval_secs: u64) -> bool {
        now >= self.last_timestamp.saturating_add(interval_secs)
    }
}
