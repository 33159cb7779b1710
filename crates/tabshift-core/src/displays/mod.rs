//! Display topology: left-to-right ordering and window-to-display mapping.
//!
//! Displays are re-fetched from the host on every relocation. There is no
//! cache: monitors get plugged, unplugged, and rearranged between calls.

use tracing::debug;

use crate::geometry::{Point, Rect};
use crate::host::errors::HostError;
use crate::host::traits::HostEnvironment;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a physical display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    /// Host-assigned display identifier.
    pub id: String,
    /// Full display bounds.
    pub bounds: Rect,
    /// Bounds minus OS chrome (taskbars, docks). Windows are fitted to this.
    pub work_area: Rect,
}

/// Fetch displays from the host and order them left-to-right.
///
/// The ascending left-edge ordering is what defines "next display": the
/// cyclic successor in this list. Callers must treat fewer than two displays
/// as a no-op, not an error.
pub async fn resolve_topology<H: HostEnvironment>(host: &H) -> Result<Vec<Display>, HostError> {
    let mut displays = host.displays().await?;
    displays.sort_by_key(|d| d.bounds.left);

    debug!(
        event = "core.displays.topology_resolved",
        count = displays.len()
    );

    Ok(displays)
}

/// The cyclic successor of `index` in a list of `count` displays.
pub fn next_display(index: usize, count: usize) -> usize {
    (index + 1) % count
}

/// Index of the first display (in left-to-right order) whose *bounds*
/// contain `point`.
///
/// Falls back to index 0 when no display claims the point, so a valid index
/// comes back even on misreported geometry. Callers must not pass an empty
/// list.
pub fn containing_display(displays: &[Display], point: Point) -> usize {
    displays
        .iter()
        .position(|d| d.bounds.contains(point))
        .unwrap_or(0)
}

impl Display {
    pub fn new(id: impl Into<String>, bounds: Rect, work_area: Rect) -> Self {
        Self {
            id: id.into(),
            bounds,
            work_area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_displays() -> Vec<Display> {
        vec![
            Display::new("0", Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1040)),
            Display::new(
                "1",
                Rect::new(1920, 0, 1920, 1080),
                Rect::new(1920, 0, 1920, 1040),
            ),
        ]
    }

    #[test]
    fn test_containing_display_finds_each_display() {
        let displays = two_displays();
        assert_eq!(containing_display(&displays, Point::new(500, 500)), 0);
        assert_eq!(containing_display(&displays, Point::new(2800, 500)), 1);
    }

    #[test]
    fn test_containing_display_falls_back_to_zero() {
        let displays = two_displays();

        // Off-screen in every direction.
        assert_eq!(containing_display(&displays, Point::new(-5000, 0)), 0);
        assert_eq!(containing_display(&displays, Point::new(9999, 9999)), 0);
        assert_eq!(containing_display(&displays, Point::new(500, -200)), 0);
    }

    #[test]
    fn test_containing_display_seam_belongs_to_right_display() {
        let displays = two_displays();
        assert_eq!(containing_display(&displays, Point::new(1920, 500)), 1);
    }

    #[test]
    fn test_next_display_cycles() {
        assert_eq!(next_display(0, 2), 1);
        assert_eq!(next_display(1, 2), 0);
        assert_eq!(next_display(2, 3), 0);
    }

    #[test]
    fn test_two_moves_return_to_origin() {
        let start = 0;
        let after_one = next_display(start, 2);
        let after_two = next_display(after_one, 2);
        assert_eq!(after_two, start);
    }

    #[tokio::test]
    async fn test_resolve_topology_sorts_left_to_right() {
        use crate::host::sim::SimHost;

        let host = SimHost::new();
        // Seed in right-to-left order; topology must come back sorted.
        host.add_display(Display::new(
            "right",
            Rect::new(1920, 0, 1920, 1080),
            Rect::new(1920, 0, 1920, 1040),
        ));
        host.add_display(Display::new(
            "left",
            Rect::new(0, 0, 1920, 1080),
            Rect::new(0, 0, 1920, 1040),
        ));

        let displays = resolve_topology(&host).await.unwrap();
        assert_eq!(displays[0].id, "left");
        assert_eq!(displays[1].id, "right");
    }

    #[tokio::test]
    async fn test_resolve_topology_sort_handles_negative_coordinates() {
        use crate::host::sim::SimHost;

        let host = SimHost::new();
        host.add_display(Display::new(
            "primary",
            Rect::new(0, 0, 2560, 1440),
            Rect::new(0, 0, 2560, 1400),
        ));
        host.add_display(Display::new(
            "side",
            Rect::new(-1920, 0, 1920, 1080),
            Rect::new(-1920, 0, 1920, 1040),
        ));

        let displays = resolve_topology(&host).await.unwrap();
        assert_eq!(displays[0].id, "side");
        assert_eq!(displays[1].id, "primary");
    }
}
