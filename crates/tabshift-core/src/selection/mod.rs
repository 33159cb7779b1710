//! Destination window selection.
//!
//! When relocating a tab we prefer merging it into a window the user is
//! already treating as "the" window on the target display over spawning a
//! new one next to it. Maximized beats focused beats everything else; the
//! rest of the ordering is stable, so discovery order decides ties.

use tracing::debug;

use crate::geometry::Rect;
use crate::host::types::{WindowId, WindowInfo, WindowKind};

/// Pick the best existing window on the target display to merge into.
///
/// Candidates are windows of normal kind, excluding `exclude` (the source
/// window), matching `private`, with known geometry, whose center point lies
/// inside `work_area`. The center test (half-open, see
/// [`Rect::contains`]) tolerates slight overlap and edge snapping rather
/// than requiring full containment.
///
/// Returns `None` when no candidate exists; the caller creates a window.
pub fn select_destination<'a>(
    windows: &'a [WindowInfo],
    work_area: Rect,
    private: bool,
    exclude: WindowId,
) -> Option<&'a WindowInfo> {
    let mut candidates: Vec<&WindowInfo> = windows
        .iter()
        .filter(|w| {
            w.kind == WindowKind::Normal
                && w.id != exclude
                && w.private == private
                && w.bounds.is_some_and(|b| work_area.contains(b.center()))
        })
        .collect();

    if candidates.is_empty() {
        debug!(event = "core.selection.no_candidates", private = private);
        return None;
    }

    // Stable sort: maximized first, then focused. Ties keep discovery order.
    candidates.sort_by_key(|w| {
        (
            w.state != crate::host::types::WindowState::Maximized,
            !w.focused,
        )
    });

    let chosen = candidates[0];
    debug!(
        event = "core.selection.destination_chosen",
        window_id = chosen.id,
        state = ?chosen.state,
        focused = chosen.focused,
        candidates = candidates.len()
    );

    Some(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::host::types::WindowState;

    fn window(id: WindowId, center: Point) -> WindowInfo {
        WindowInfo {
            id,
            kind: WindowKind::Normal,
            private: false,
            bounds: Some(Rect::new(center.x - 400, center.y - 300, 800, 600)),
            state: WindowState::Normal,
            focused: false,
        }
    }

    fn work_area() -> Rect {
        Rect::new(1920, 0, 1920, 1040)
    }

    #[test]
    fn test_returns_none_when_no_windows() {
        assert!(select_destination(&[], work_area(), false, 1).is_none());
    }

    #[test]
    fn test_never_returns_the_excluded_window() {
        let windows = vec![window(1, Point::new(2800, 500))];
        assert!(select_destination(&windows, work_area(), false, 1).is_none());
    }

    #[test]
    fn test_never_returns_wrong_privacy_mode() {
        let mut private_window = window(2, Point::new(2800, 500));
        private_window.private = true;
        let windows = vec![private_window];

        assert!(select_destination(&windows, work_area(), false, 1).is_none());

        // And the other way around.
        let windows = vec![window(3, Point::new(2800, 500))];
        assert!(select_destination(&windows, work_area(), true, 1).is_none());
    }

    #[test]
    fn test_never_returns_center_outside_work_area() {
        // Centered on display 0 while the work area is display 1.
        let windows = vec![window(2, Point::new(500, 500))];
        assert!(select_destination(&windows, work_area(), false, 1).is_none());
    }

    #[test]
    fn test_skips_non_normal_windows() {
        let mut popup = window(2, Point::new(2800, 500));
        popup.kind = WindowKind::Popup;
        let windows = vec![popup];
        assert!(select_destination(&windows, work_area(), false, 1).is_none());
    }

    #[test]
    fn test_skips_windows_without_geometry() {
        let mut no_bounds = window(2, Point::new(2800, 500));
        no_bounds.bounds = None;
        let windows = vec![no_bounds];
        assert!(select_destination(&windows, work_area(), false, 1).is_none());
    }

    #[test]
    fn test_overlapping_window_accepted_by_center() {
        // Window straddles the seam but its center sits on display 1.
        let straddling = WindowInfo {
            id: 2,
            kind: WindowKind::Normal,
            private: false,
            bounds: Some(Rect::new(1600, 100, 800, 600)),
            state: WindowState::Normal,
            focused: false,
        };
        let windows = vec![straddling];
        let chosen = select_destination(&windows, work_area(), false, 1).unwrap();
        assert_eq!(chosen.id, 2);
    }

    #[test]
    fn test_maximized_beats_focused() {
        let mut focused = window(2, Point::new(2400, 500));
        focused.focused = true;
        let mut maximized = window(3, Point::new(2800, 500));
        maximized.state = WindowState::Maximized;

        let windows = vec![focused, maximized];
        let chosen = select_destination(&windows, work_area(), false, 1).unwrap();
        assert_eq!(chosen.id, 3);
    }

    #[test]
    fn test_focused_breaks_tie_when_neither_maximized() {
        let plain = window(2, Point::new(2400, 500));
        let mut focused = window(3, Point::new(2800, 500));
        focused.focused = true;

        let windows = vec![plain, focused];
        let chosen = select_destination(&windows, work_area(), false, 1).unwrap();
        assert_eq!(chosen.id, 3);
    }

    #[test]
    fn test_discovery_order_preserved_for_equal_candidates() {
        let first = window(2, Point::new(2400, 500));
        let second = window(3, Point::new(2800, 500));

        let windows = vec![first, second];
        let chosen = select_destination(&windows, work_area(), false, 1).unwrap();
        assert_eq!(chosen.id, 2);
    }

    #[test]
    fn test_private_candidates_match_private_request() {
        let mut private_window = window(2, Point::new(2800, 500));
        private_window.private = true;
        private_window.state = WindowState::Maximized;

        let windows = vec![private_window];
        let chosen = select_destination(&windows, work_area(), true, 1).unwrap();
        assert_eq!(chosen.id, 2);
    }
}
