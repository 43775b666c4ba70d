//! Corner marker placement math. Pure functions, no engine state.

use crate::geometry::{Point, Rect};

/// Number of corner markers around the cursor
pub const CORNER_COUNT: usize = 4;

/// Absolute positions of the four corner markers framing `rect`, in
/// top-left, top-right, bottom-right, bottom-left order.
///
/// The rectangle is expanded outward by `border_width`; the trailing edges
/// additionally subtract `marker_size` so each marker's top-left-anchored box
/// lands flush with the expanded corner regardless of marker size.
pub fn frame_corners(rect: Rect, border_width: f32, marker_size: f32) -> [Point; CORNER_COUNT] {
    let left = rect.left() - border_width;
    let top = rect.top() - border_width;
    let right = rect.right() + border_width - marker_size;
    let bottom = rect.bottom() + border_width - marker_size;
    [
        Point::new(left, top),
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ]
}

/// Rest offsets of the corner markers relative to the cursor while no target
/// is active: a small square centered slightly up-left of the pointer.
pub fn idle_offsets(marker_size: f32) -> [Point; CORNER_COUNT] {
    let near = marker_size * 0.5;
    let far = marker_size * 1.5;
    [
        Point::new(-far, -far),
        Point::new(near, -far),
        Point::new(near, near),
        Point::new(-far, near),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_corners_brackets_rect() {
        let rect = Rect::from_edges(100.0, 100.0, 200.0, 140.0);
        let corners = frame_corners(rect, 3.0, 12.0);

        assert_eq!(corners[0], Point::new(97.0, 97.0));
        assert_eq!(corners[1], Point::new(191.0, 97.0));
        assert_eq!(corners[2], Point::new(191.0, 131.0));
        assert_eq!(corners[3], Point::new(97.0, 131.0));
    }

    #[test]
    fn test_frame_corners_with_zero_border() {
        let rect = Rect::new(0.0, 0.0, 50.0, 50.0);
        let corners = frame_corners(rect, 0.0, 10.0);

        assert_eq!(corners[0], Point::new(0.0, 0.0));
        assert_eq!(corners[1], Point::new(40.0, 0.0));
        assert_eq!(corners[2], Point::new(40.0, 40.0));
        assert_eq!(corners[3], Point::new(0.0, 40.0));
    }

    #[test]
    fn test_idle_offsets_form_square() {
        let offsets = idle_offsets(12.0);

        assert_eq!(offsets[0], Point::new(-18.0, -18.0));
        assert_eq!(offsets[1], Point::new(6.0, -18.0));
        assert_eq!(offsets[2], Point::new(6.0, 6.0));
        assert_eq!(offsets[3], Point::new(-18.0, 6.0));

        // Square: both spans equal marker_size * 2
        assert_eq!(offsets[1].x - offsets[0].x, 24.0);
        assert_eq!(offsets[2].y - offsets[1].y, 24.0);
    }
}
