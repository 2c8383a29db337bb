//! Measurement queries against the scrolled surface.

use momentum_ui_graphics::{Point, Size};

/// The scrolled surface as seen by the gesture driver.
pub trait ScrollSurface {
    /// Full extent of the scrollable content.
    fn content_size(&self) -> Size;

    /// Extent of the visible window onto the content.
    fn viewport_size(&self) -> Size;

    /// Offset the content is actually rendered at, which lags the logical
    /// offset while a transition is in flight.
    fn rendered_offset(&self) -> Point;
}

/// Snapshot of a [`ScrollSurface`] taken when a gesture starts.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SurfaceMetrics {
    pub content: Size,
    pub viewport: Size,
    pub rendered_offset: Point,
}

impl SurfaceMetrics {
    pub fn new(content: Size, viewport: Size, rendered_offset: Point) -> Self {
        Self {
            content,
            viewport,
            rendered_offset,
        }
    }

    pub fn read<S: ScrollSurface + ?Sized>(surface: &S) -> Self {
        Self {
            content: surface.content_size(),
            viewport: surface.viewport_size(),
            rendered_offset: surface.rendered_offset(),
        }
    }
}
