use momentum_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Source device of a pointer event. Mouse and touch drive the same gesture
/// handling; the type is kept for logging and host-side filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerType {
    #[default]
    Touch,
    Mouse,
}

/// One raw input sample: which pointer, where (viewport-relative) and when.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pointer: PointerId,
    pub position: Point,
    pub time_millis: f64,
}

impl PointerSample {
    pub fn new(pointer: PointerId, position: Point, time_millis: f64) -> Self {
        Self {
            pointer,
            position,
            time_millis,
        }
    }
}

/// Pointer event with default-action suppression tracking.
///
/// A handler that takes over a move (e.g. the drag follower) consumes it so
/// the host skips its native scrolling for that event.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub pointer_type: PointerType,
    pub position: Point,
    /// Event time in milliseconds on the host's clock.
    pub timestamp_millis: f64,
    /// Shared via Rc<Cell> so consumption is visible across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, timestamp_millis: f64) -> Self {
        Self {
            id: 0,
            kind,
            pointer_type: PointerType::default(),
            position,
            timestamp_millis,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(position: Point, timestamp_millis: f64) -> Self {
        Self::new(PointerEventKind::Down, position, timestamp_millis)
    }

    pub fn moved(position: Point, timestamp_millis: f64) -> Self {
        Self::new(PointerEventKind::Move, position, timestamp_millis)
    }

    pub fn up(position: Point, timestamp_millis: f64) -> Self {
        Self::new(PointerEventKind::Up, position, timestamp_millis)
    }

    pub fn cancel(timestamp_millis: f64) -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO, timestamp_millis)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    pub fn sample(&self) -> PointerSample {
        PointerSample::new(self.id, self.position, self.timestamp_millis)
    }

    /// Mark this event as consumed, suppressing the host's default action.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
