use lineboard_rs::api::{InteractiveMode, LineSelector};
use lineboard_rs::core::{DataPoint, SeriesId};
use lineboard_rs::surface::{ChartSurface, MemorySurface};

fn surface_with_lines(labels: &[&str]) -> MemorySurface {
    let mut surface = MemorySurface::new("main-chart");
    for (i, label) in labels.iter().enumerate() {
        surface.add_line(vec![DataPoint::new(0.0, i as f64)], label);
    }
    surface
}

fn id_at(selector: &LineSelector<MemorySurface>, index: usize) -> SeriesId {
    selector.surface().series()[index].borrow().id()
}

#[test]
fn enabling_select_marks_series_pickable_and_subscribes() {
    let surface = surface_with_lines(&["a", "b"]);
    let mut selector = LineSelector::new(surface);

    selector.enable_interactive_select();

    assert_eq!(selector.interactive_mode(), InteractiveMode::Select);
    assert!(selector.is_interactive());
    assert_eq!(selector.surface().active_pick_subscriptions(), 1);
    for handle in selector.surface().series() {
        assert!(handle.borrow().is_pickable());
    }
}

#[test]
fn pick_radius_from_config_reaches_the_series() {
    use lineboard_rs::api::SelectorConfig;

    let surface = surface_with_lines(&["a"]);
    let config = SelectorConfig::default().with_pick_radius(12.0);
    let mut selector = LineSelector::with_config(surface, config).expect("valid config");

    selector.enable_interactive_select();

    let tolerance = selector.surface().series()[0].borrow().pick_tolerance();
    assert_eq!(tolerance, Some(12.0));
}

#[test]
fn the_two_interactive_modes_are_mutually_exclusive() {
    let surface = surface_with_lines(&["a", "b"]);
    let mut selector = LineSelector::new(surface);

    selector.enable_interactive_select();
    selector.enable_interactive_delete();

    assert_eq!(selector.interactive_mode(), InteractiveMode::Delete);
    assert_eq!(selector.surface().active_pick_subscriptions(), 1);
}

#[test]
fn picking_in_select_mode_fills_the_clipboard_without_duplicates() {
    let surface = surface_with_lines(&["a", "b"]);
    let mut selector = LineSelector::new(surface);
    selector.enable_interactive_select();

    let picked = id_at(&selector, 1);
    selector.handle_pick(picked);
    selector.handle_pick(picked);

    assert_eq!(selector.clipboard_len(), 1);
    assert_eq!(selector.series_len(), 2);
}

#[test]
fn picking_in_delete_mode_snapshots_removes_and_redraws() {
    let surface = surface_with_lines(&["a", "b", "c"]);
    let mut selector = LineSelector::new(surface);
    selector.enable_interactive_delete();

    let picked = id_at(&selector, 1);
    selector.handle_pick(picked);

    assert_eq!(selector.series_len(), 2);
    assert_eq!(selector.snapshot_depth(), 1);
    assert_eq!(selector.surface().redraw_requests(), 1);

    assert!(selector.undo_last_delete());
    assert_eq!(selector.series_len(), 3);
}

#[test]
fn stale_pick_in_delete_mode_is_tolerated() {
    let surface = surface_with_lines(&["a", "b"]);
    let mut selector = LineSelector::new(surface);
    selector.enable_interactive_delete();

    let stale = id_at(&selector, 0);
    selector.surface_mut().remove_series(stale);

    selector.handle_pick(stale);
    assert_eq!(selector.series_len(), 1);
}

#[test]
fn picks_are_ignored_while_interactive_mode_is_off() {
    let surface = surface_with_lines(&["a", "b"]);
    let mut selector = LineSelector::new(surface);

    let id = id_at(&selector, 0);
    selector.handle_pick(id);

    assert_eq!(selector.clipboard_len(), 0);
    assert_eq!(selector.series_len(), 2);
    assert_eq!(selector.surface().redraw_requests(), 0);
}

#[test]
fn disable_interactive_cancels_the_subscription_and_is_idempotent() {
    let surface = surface_with_lines(&["a"]);
    let mut selector = LineSelector::new(surface);

    selector.enable_interactive_select();
    selector.disable_interactive();
    assert_eq!(selector.interactive_mode(), InteractiveMode::Off);
    assert_eq!(selector.surface().active_pick_subscriptions(), 0);

    selector.disable_interactive();
    assert_eq!(selector.surface().active_pick_subscriptions(), 0);
}

#[test]
fn rearming_does_not_leak_subscriptions() {
    let surface = surface_with_lines(&["a"]);
    let mut selector = LineSelector::new(surface);

    selector.enable_interactive_select();
    selector.enable_interactive_delete();
    selector.enable_interactive_select();
    selector.disable_interactive();

    assert_eq!(selector.surface().active_pick_subscriptions(), 0);
}
