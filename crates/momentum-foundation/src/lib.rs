//! Foundation for Momentum: the inertial-scroll gesture state machine and the
//! pointer plumbing that feeds it.

mod bounds;
mod config;
mod driver;
pub mod gesture_constants;
pub mod nodes;
mod scrollable;
mod surface;

pub use bounds::ScrollBounds;
pub use config::{ScrollConfig, ScrollConfigError};
pub use driver::ScrollDriver;
pub use nodes::input::{
    EventScope, PointerEvent, PointerEventKind, PointerId, PointerSample, PointerType,
    TrackingGuard, TrackingRegistry,
};
pub use scrollable::{
    AnimationCommand, Effect, GestureOutcome, GesturePhase, Scrollable, Transition,
};
pub use surface::{ScrollSurface, SurfaceMetrics};

pub mod prelude {
    pub use crate::bounds::ScrollBounds;
    pub use crate::config::ScrollConfig;
    pub use crate::driver::ScrollDriver;
    pub use crate::nodes::input::prelude::*;
    pub use crate::nodes::input::{EventScope, TrackingRegistry};
    pub use crate::scrollable::{Effect, GestureOutcome, GesturePhase, Scrollable, Transition};
    pub use crate::surface::{ScrollSurface, SurfaceMetrics};
}
