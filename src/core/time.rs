//! Time representation for the animation engine.
//! All timeline arithmetic is done in seconds as `f64`, so interpolated
//! state is an exact function of the queried time.

/// Absolute or relative time in seconds since scene start.
/// This is the core time representation throughout the engine.
pub type Time = f64;

/// Time zero constant
pub const ZERO: Time = 0.0;

/// Convert milliseconds to seconds
#[inline]
pub fn from_millis(millis: f64) -> Time {
    millis / 1_000.0
}

/// Convert seconds to milliseconds
#[inline]
pub fn to_millis(time: Time) -> f64 {
    time * 1_000.0
}

/// Length of one frame at the given frame rate, in seconds.
///
/// Returns `0.0` for a non-positive frame rate, meaning "no minimum
/// frame interval".
#[inline]
pub fn frame_interval(fps: f64) -> Time {
    if fps > 0.0 {
        1.0 / fps
    } else {
        ZERO
    }
}
