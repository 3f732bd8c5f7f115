use floatview_ui_graphics::{Point, Rect, Size};

/// Size of the widget and the limit on how far a drag may move it.
///
/// Offsets are vertical translations from the anchor, growing downward:
/// `0` is anchored, `-content_height` is fully dismissed above the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetGeometry {
    size: Size,
    max_upward_offset: f32,
}

impl WidgetGeometry {
    pub fn new(size: Size, max_upward_offset: f32) -> Self {
        Self {
            size,
            max_upward_offset,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn content_height(&self) -> f32 {
        self.size.height
    }

    /// The largest offset a drag may produce.
    pub fn max_upward_offset(&self) -> f32 {
        self.max_upward_offset
    }

    /// Translation at which the widget sits entirely above the container.
    pub fn dismissed_offset(&self) -> f32 {
        -self.size.height
    }

    /// Widget-local bounds, used to accept new pointers.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// Caps a drag candidate at `max_upward_offset`. There is no lower bound.
    pub fn clamp_drag(&self, candidate: f32) -> f32 {
        candidate.min(self.max_upward_offset)
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

/// Top-end placement of `content` inside `container`.
pub fn anchor_origin(container: Size, content: Size) -> Point {
    Point::new((container.width - content.width).max(0.0), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_is_capped_only_in_one_direction() {
        let geometry = WidgetGeometry::new(Size::new(120.0, 100.0), 50.0);
        assert_eq!(geometry.clamp_drag(80.0), 50.0);
        assert_eq!(geometry.clamp_drag(20.0), 20.0);
        assert_eq!(geometry.clamp_drag(-900.0), -900.0);
    }

    #[test]
    fn dismissed_offset_is_negative_height() {
        let geometry = WidgetGeometry::new(Size::new(120.0, 100.0), 50.0);
        assert_eq!(geometry.dismissed_offset(), -100.0);
        assert!(geometry.bounds().contains(120.0, 100.0));
    }

    #[test]
    fn anchors_to_top_end() {
        let origin = anchor_origin(Size::new(400.0, 800.0), Size::new(120.0, 100.0));
        assert_eq!(origin, Point::new(280.0, 0.0));

        let oversized = anchor_origin(Size::new(100.0, 800.0), Size::new(120.0, 100.0));
        assert_eq!(oversized, Point::ZERO);
    }
}
