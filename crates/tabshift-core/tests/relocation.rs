//! End-to-end relocation tests against the simulated host.
//!
//! These exercise the full pipeline through the public API: topology
//! resolution, destination selection, window/tab mutation, and the detached
//! fullscreen restoration schedule, all under tokio's paused clock.

use std::time::Duration;

use tabshift_core::host::sim::{PageBehavior, SimEvent, SimHost};
use tabshift_core::{
    Display, HostEnvironment, MoveOutcome, Rect, TabInfo, TabshiftConfig, WindowInfo, WindowKind,
    WindowState, move_to_next_display,
};

fn display(id: &str, left: i32) -> Display {
    Display::new(
        id,
        Rect::new(left, 0, 1920, 1080),
        Rect::new(left, 0, 1920, 1040),
    )
}

fn window(id: u32, center_x: i32, state: WindowState) -> WindowInfo {
    WindowInfo {
        id,
        kind: WindowKind::Normal,
        private: false,
        bounds: Some(Rect::new(center_x - 400, 200, 800, 600)),
        state,
        focused: false,
    }
}

/// The canonical layout: two 1920x1080 displays side by side, the source
/// window on display 0 with one active tab.
fn dual_display_host() -> SimHost {
    let host = SimHost::new();
    host.add_display(display("0", 0));
    host.add_display(display("1", 1920));

    let mut source = window(1, 500, WindowState::Normal);
    source.focused = true;
    host.add_window(source);
    host.add_tab(TabInfo {
        id: 10,
        window: 1,
        active: true,
    });
    host.set_current_window(Some(1));
    host
}

#[tokio::test(start_paused = true)]
async fn test_merges_into_existing_maximized_window_instead_of_creating() {
    let host = dual_display_host();

    // One existing normal window with matching privacy mode, centered at
    // x=2800 (display 1), maximized.
    host.add_window(window(2, 2800, WindowState::Maximized));
    host.add_tab(TabInfo {
        id: 20,
        window: 2,
        active: true,
    });

    let outcome = move_to_next_display(&host, false, &TabshiftConfig::default())
        .await
        .unwrap();

    // Must merge, not create, and resize the destination to display 1's
    // work area.
    assert_eq!(outcome, MoveOutcome::Merged { window: 2 });
    assert_eq!(host.window_count(), 2);
    assert_eq!(
        host.window(2).unwrap().bounds,
        Some(Rect::new(1920, 0, 1920, 1040))
    );
}

#[tokio::test(start_paused = true)]
async fn test_round_trip_returns_tab_to_original_window() {
    let host = dual_display_host();

    // First move: nothing on display 1, so a window is created there.
    let first = move_to_next_display(&host, false, &TabshiftConfig::default())
        .await
        .unwrap();
    let MoveOutcome::Created { window: created } = first else {
        panic!("expected Created, got {first:?}");
    };
    tokio::time::sleep(Duration::from_millis(200)).await;
    host.set_current_window(Some(created));

    // Second move: the original window still sits on display 0 and is the
    // only candidate there.
    let second = move_to_next_display(&host, false, &TabshiftConfig::default())
        .await
        .unwrap();
    assert_eq!(second, MoveOutcome::Merged { window: 1 });
    assert!(host.tabs_in(1).iter().any(|t| t.id == 10 && t.active));
}

#[tokio::test(start_paused = true)]
async fn test_fullscreen_survives_relocation_of_video_tab() {
    let host = dual_display_host();
    host.set_page(10, PageBehavior {
        fullscreen_active: true,
        host: "www.youtube.com".to_string(),
        has_player_container: true,
        has_video: true,
        ..PageBehavior::default()
    });

    let outcome = move_to_next_display(&host, false, &TabshiftConfig::default())
        .await
        .unwrap();
    assert!(matches!(outcome, MoveOutcome::Created { .. }));

    // Simulate the fullscreen drop after the snapshot was captured, then
    // let the restoration schedule run out.
    host.exit_fullscreen(10).await.unwrap();
    tokio::time::sleep(Duration::from_millis(2000)).await;

    let granted = host.events().iter().any(|e| {
        matches!(
            e,
            SimEvent::FullscreenRequested {
                tab: 10,
                granted: true,
                ..
            }
        )
    });
    assert!(granted, "restoration re-requested fullscreen on the moved tab");

    let probe = host.probe_tab(10).await.unwrap();
    assert!(probe.fullscreen_active);
}

#[tokio::test(start_paused = true)]
async fn test_private_move_never_merges_into_normal_window() {
    let host = SimHost::new();
    host.add_display(display("0", 0));
    host.add_display(display("1", 1920));

    let mut source = window(1, 500, WindowState::Normal);
    source.private = true;
    source.focused = true;
    host.add_window(source);
    host.add_tab(TabInfo {
        id: 10,
        window: 1,
        active: true,
    });
    host.set_current_window(Some(1));

    // A normal-mode window occupies display 1; it must not receive a
    // private tab.
    host.add_window(window(2, 2800, WindowState::Maximized));
    host.add_tab(TabInfo {
        id: 20,
        window: 2,
        active: true,
    });

    let outcome = move_to_next_display(&host, true, &TabshiftConfig::default())
        .await
        .unwrap();
    let MoveOutcome::Created { window: created } = outcome else {
        panic!("expected Created, got {outcome:?}");
    };
    assert!(host.window(created).unwrap().private);
    assert!(host.tabs_in(2).iter().all(|t| t.id != 10));
}
