pub mod tracking;
pub mod types;

pub use tracking::{EventScope, TrackingGuard, TrackingRegistry};
pub use types::{PointerEvent, PointerEventKind, PointerId, PointerSample, PointerType};

pub mod prelude {
    pub use super::types::{
        PointerEvent, PointerEventKind, PointerId, PointerSample, PointerType,
    };
}
