//! Completion time codec
//!
//! Runs are recorded at a fixed 30 frames per second. Players know their
//! times as `mm:ss.fff` text, the dataset stores them as frame counts, so
//! searching needs both directions:
//!
//! - [`encode`]: `mm:ss.fff` → frames, flooring partial frames
//! - [`decode`]: frames → `mm:ss.fff`, rounding milliseconds up
//!
//! Rounding up in [`decode`] keeps `encode(decode(f)) == f` for every frame
//! count. The other direction is lossy: `decode(encode(t))` can land up to
//! one frame (33.33 ms) before `t`.

use crate::error::{Error, Result};

/// Simulation frame rate.
pub const FRAMES_PER_SECOND: u64 = 30;

const MILLIS_PER_SECOND: u64 = 1000;
const SECONDS_PER_MINUTE: u64 = 60;

/// A parsed `mm:ss.fff` time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    /// Minutes, any width
    pub minutes: u64,
    /// Seconds, `0..60`
    pub seconds: u64,
    /// Milliseconds, `0..1000`
    pub millis: u64,
}

impl TimeParts {
    /// Total milliseconds, `None` on overflow.
    pub fn total_millis(&self) -> Option<u64> {
        self.minutes
            .checked_mul(SECONDS_PER_MINUTE)?
            .checked_add(self.seconds)?
            .checked_mul(MILLIS_PER_SECOND)?
            .checked_add(self.millis)
    }
}

/// Parse `mm:ss.fff` where minutes are two or more digits.
pub fn parse(text: &str) -> Result<TimeParts> {
    let invalid = || Error::InvalidFormat {
        input: text.to_string(),
    };

    let (minutes, rest) = text.split_once(':').ok_or_else(invalid)?;
    if minutes.len() < 2 || !all_digits(minutes) {
        return Err(invalid());
    }

    let (seconds, millis) = rest.split_once('.').ok_or_else(invalid)?;
    if seconds.len() != 2 || !all_digits(seconds) || millis.len() != 3 || !all_digits(millis) {
        return Err(invalid());
    }

    let parts = TimeParts {
        minutes: minutes.parse().map_err(|_| invalid())?,
        seconds: seconds.parse().map_err(|_| invalid())?,
        millis: millis.parse().map_err(|_| invalid())?,
    };
    if parts.seconds >= SECONDS_PER_MINUTE {
        return Err(invalid());
    }
    Ok(parts)
}

/// Check that `text` is a well-formed time without converting it.
pub fn validate(text: &str) -> Result<()> {
    encode(text).map(|_| ())
}

/// Convert `mm:ss.fff` text to a whole number of frames.
///
/// # Examples
///
/// ```
/// use runviewer_core::time::encode;
///
/// assert_eq!(encode("02:30.000").unwrap(), 4500);
/// assert!(encode("2:30.000").is_err());
/// ```
pub fn encode(text: &str) -> Result<u64> {
    let parts = parse(text)?;
    let total = parts.total_millis().ok_or_else(|| Error::InvalidFormat {
        input: text.to_string(),
    })?;
    Ok(millis_to_frames(total))
}

/// Convert a frame count to zero-padded `MM:SS.mmm`.
///
/// # Examples
///
/// ```
/// use runviewer_core::time::decode;
///
/// assert_eq!(decode(4500), "02:30.000");
/// assert_eq!(decode(1), "00:00.034");
/// ```
pub fn decode(frames: u64) -> String {
    let total = frames_to_millis(frames);
    let millis = total % MILLIS_PER_SECOND as u128;
    let total_seconds = total / MILLIS_PER_SECOND as u128;
    let seconds = total_seconds % SECONDS_PER_MINUTE as u128;
    let minutes = total_seconds / SECONDS_PER_MINUTE as u128;
    format!("{:02}:{:02}.{:03}", minutes, seconds, millis)
}

/// `floor(ms * 30 / 1000)`.
pub fn millis_to_frames(millis: u64) -> u64 {
    ((millis as u128 * FRAMES_PER_SECOND as u128) / MILLIS_PER_SECOND as u128) as u64
}

/// `ceil(frames * 1000 / 30)`.
fn frames_to_millis(frames: u64) -> u128 {
    let fps = FRAMES_PER_SECOND as u128;
    (frames as u128 * MILLIS_PER_SECOND as u128 + fps - 1) / fps
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
