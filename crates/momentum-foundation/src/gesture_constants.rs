//! Shared gesture constants for drag, flick and snap-back handling.
//!
//! All distances are in logical pixels, times in milliseconds and transition
//! durations in seconds. [`crate::ScrollConfig::default`] is built from these.

/// Duration, in seconds, of every snap-back transition that returns an
/// out-of-bounds offset into range.
pub const SNAP_BACK_DURATION: f32 = 0.3;

/// Release displacement since the last move sample, per axis, at or below
/// which the gesture is treated as a plain drag rather than a flick.
pub const FLICK_DISTANCE_THRESHOLD: f32 = 5.0;

/// Fraction of the viewport extent a flick may carry the content past a
/// bound before the chained snap-back pulls it home.
pub const OVERSCROLL_FRACTION: f32 = 0.2;

/// Positive overshoot while dragging is divided by this.
pub const RESISTANCE_DIVISOR: f32 = 3.0;

/// Negative overshoot while dragging gives back `overage / OVERAGE_DIVISOR`.
pub const OVERAGE_DIVISOR: f32 = 1.5;

/// Scale in `duration = (delta / (speed / 2) * scale) / 1000`.
pub const MOMENTUM_DURATION_SCALE: f32 = 3.0;
