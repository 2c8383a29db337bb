//! Tunables for the gesture state machine.

use std::fmt;

use crate::gesture_constants::{
    FLICK_DISTANCE_THRESHOLD, MOMENTUM_DURATION_SCALE, OVERAGE_DIVISOR, OVERSCROLL_FRACTION,
    RESISTANCE_DIVISOR, SNAP_BACK_DURATION,
};

/// Configuration for a [`crate::Scrollable`].
///
/// The defaults reproduce the classic rubber-band feel; override individual
/// values with the `with_*` builders and check the result with
/// [`ScrollConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Seconds used by every snap-back transition.
    pub snap_back_duration: f32,
    /// Per-axis release displacement (px) at or below which no momentum is applied.
    pub flick_threshold: f32,
    /// Maximum flick overshoot as a fraction of the viewport extent.
    pub overscroll_fraction: f32,
    /// Divisor applied to positive overshoot while dragging.
    pub resistance_divisor: f32,
    /// Divisor applied to the overage past `min` while dragging.
    pub overage_divisor: f32,
    /// Scale factor of the momentum duration formula.
    pub momentum_duration_scale: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            snap_back_duration: SNAP_BACK_DURATION,
            flick_threshold: FLICK_DISTANCE_THRESHOLD,
            overscroll_fraction: OVERSCROLL_FRACTION,
            resistance_divisor: RESISTANCE_DIVISOR,
            overage_divisor: OVERAGE_DIVISOR,
            momentum_duration_scale: MOMENTUM_DURATION_SCALE,
        }
    }
}

impl ScrollConfig {
    pub fn with_snap_back_duration(mut self, seconds: f32) -> Self {
        self.snap_back_duration = seconds;
        self
    }

    pub fn with_flick_threshold(mut self, pixels: f32) -> Self {
        self.flick_threshold = pixels;
        self
    }

    pub fn with_overscroll_fraction(mut self, fraction: f32) -> Self {
        self.overscroll_fraction = fraction;
        self
    }

    pub fn with_resistance(mut self, resistance_divisor: f32, overage_divisor: f32) -> Self {
        self.resistance_divisor = resistance_divisor;
        self.overage_divisor = overage_divisor;
        self
    }

    pub fn with_momentum_duration_scale(mut self, scale: f32) -> Self {
        self.momentum_duration_scale = scale;
        self
    }

    pub fn validate(&self) -> Result<(), ScrollConfigError> {
        let fields = [
            ("snap_back_duration", self.snap_back_duration),
            ("flick_threshold", self.flick_threshold),
            ("overscroll_fraction", self.overscroll_fraction),
            ("resistance_divisor", self.resistance_divisor),
            ("overage_divisor", self.overage_divisor),
            ("momentum_duration_scale", self.momentum_duration_scale),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ScrollConfigError::NonFinite { field, value });
            }
        }

        if self.snap_back_duration <= 0.0 {
            return Err(ScrollConfigError::NonPositive {
                field: "snap_back_duration",
                value: self.snap_back_duration,
            });
        }
        if self.flick_threshold < 0.0 {
            return Err(ScrollConfigError::Negative {
                field: "flick_threshold",
                value: self.flick_threshold,
            });
        }
        if !(0.0..=1.0).contains(&self.overscroll_fraction) {
            return Err(ScrollConfigError::OverscrollOutOfRange(
                self.overscroll_fraction,
            ));
        }
        // Divisors at or below 1 would amplify the overshoot instead of damping it.
        for (field, value) in [
            ("resistance_divisor", self.resistance_divisor),
            ("overage_divisor", self.overage_divisor),
        ] {
            if value <= 1.0 {
                return Err(ScrollConfigError::WeakResistance { field, value });
            }
        }
        if self.momentum_duration_scale <= 0.0 {
            return Err(ScrollConfigError::NonPositive {
                field: "momentum_duration_scale",
                value: self.momentum_duration_scale,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScrollConfigError {
    NonFinite { field: &'static str, value: f32 },
    NonPositive { field: &'static str, value: f32 },
    Negative { field: &'static str, value: f32 },
    OverscrollOutOfRange(f32),
    WeakResistance { field: &'static str, value: f32 },
}

impl fmt::Display for ScrollConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollConfigError::NonFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
            ScrollConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be greater than zero, got {value}")
            }
            ScrollConfigError::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            ScrollConfigError::OverscrollOutOfRange(value) => {
                write!(f, "overscroll_fraction must lie in [0, 1], got {value}")
            }
            ScrollConfigError::WeakResistance { field, value } => {
                write!(f, "{field} must be greater than 1 to damp overshoot, got {value}")
            }
        }
    }
}

impl std::error::Error for ScrollConfigError {}
