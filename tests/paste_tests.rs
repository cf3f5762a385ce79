use lineboard_rs::api::LineSelector;
use lineboard_rs::core::{AttrValue, Color, DashPattern, DataPoint, LineAttr};
use lineboard_rs::surface::{ChartSurface, MemorySurface};

fn surface_with_lines(labels: &[&str]) -> MemorySurface {
    let mut surface = MemorySurface::new("source-chart");
    for (i, label) in labels.iter().enumerate() {
        let y = i as f64;
        surface.add_line(vec![DataPoint::new(0.0, y), DataPoint::new(1.0, y * 2.0)], label);
    }
    surface
}

#[test]
fn paste_copies_data_and_every_styled_attribute() {
    let surface = surface_with_lines(&["a", "b", "c"]);
    let mut source = LineSelector::new(surface);
    source.select_by_indices(&[2, 0]).expect("valid indices");
    source
        .set_attr(LineAttr::Width, AttrValue::Float(4.0))
        .expect("valid width");
    source
        .set_attr(LineAttr::Dash, AttrValue::Dash(DashPattern::Dashed))
        .expect("valid dash");
    source
        .set_attr(LineAttr::Color, AttrValue::Color(Color::rgb(0.0, 0.5, 0.0)))
        .expect("valid color");

    let pasted = source.paste_selection(MemorySurface::new("target-chart"));

    assert_eq!(pasted.clipboard_len(), source.clipboard_len());
    assert_eq!(pasted.surface().series().len(), 2);

    for attr in [LineAttr::Width, LineAttr::Dash, LineAttr::Color, LineAttr::Label] {
        assert_eq!(pasted.get_attr(attr), source.get_attr(attr));
    }

    // Same samples, clipboard order preserved ("c" first, then "a").
    let target_series = pasted.surface().series();
    assert_eq!(target_series[0].borrow().label(), "c");
    assert_eq!(target_series[1].borrow().label(), "a");
    assert_eq!(
        target_series[0].borrow().data(),
        source.surface().series()[2].borrow().data()
    );
}

#[test]
fn pasted_series_are_new_entities() {
    let surface = surface_with_lines(&["a", "b"]);
    let mut source = LineSelector::new(surface);
    source.select_all();

    let pasted = source.paste_selection(MemorySurface::new("target-chart"));

    let source_ids: Vec<u64> = source
        .surface()
        .series()
        .iter()
        .map(|handle| handle.borrow().id().raw())
        .collect();
    for handle in pasted.surface().series() {
        assert!(!source_ids.contains(&handle.borrow().id().raw()));
    }
}

#[test]
fn paste_leaves_the_source_selector_untouched() {
    let surface = surface_with_lines(&["a", "b"]);
    let mut source = LineSelector::new(surface);
    source.select_all();

    let _ = source.paste_selection(MemorySurface::new("target-chart"));

    assert_eq!(source.clipboard_len(), 2);
    assert_eq!(source.series_len(), 2);
    assert_eq!(source.surface().redraw_requests(), 0);
}

#[test]
fn paste_requests_one_redraw_on_the_target() {
    let surface = surface_with_lines(&["a"]);
    let mut source = LineSelector::new(surface);
    source.select_all();

    let pasted = source.paste_selection(MemorySurface::new("target-chart"));
    assert_eq!(pasted.surface().redraw_requests(), 1);
}

#[test]
fn paste_carries_the_source_configuration() {
    use lineboard_rs::api::SelectorConfig;

    let surface = surface_with_lines(&["a"]);
    let config = SelectorConfig::default()
        .with_snapshot_capacity(3)
        .with_pick_radius(9.0);
    let mut source = LineSelector::with_config(surface, config).expect("valid config");
    source.select_all();

    let pasted = source.paste_selection(MemorySurface::new("target-chart"));
    assert_eq!(pasted.config(), config);
}

#[test]
fn clipboard_keeps_a_deleted_series_pasteable() {
    let surface = surface_with_lines(&["a", "b"]);
    let mut source = LineSelector::new(surface);
    source.select_by_indices(&[1]).expect("valid index");

    // Remove "b" from the surface; the clipboard handle keeps it alive.
    source.delete_by_indices(&[1]).expect("valid batch");
    assert_eq!(source.series_len(), 1);
    assert_eq!(source.clipboard_len(), 1);

    let pasted = source.paste_selection(MemorySurface::new("target-chart"));
    assert_eq!(pasted.surface().series().len(), 1);
    assert_eq!(pasted.surface().series()[0].borrow().label(), "b");
}

#[test]
fn empty_clipboard_pastes_nothing_but_still_hands_over_a_selector() {
    let surface = surface_with_lines(&["a"]);
    let source = LineSelector::new(surface);

    let pasted = source.paste_selection(MemorySurface::new("target-chart"));
    assert_eq!(pasted.clipboard_len(), 0);
    assert_eq!(pasted.surface().series().len(), 0);
    assert_eq!(pasted.surface().id(), "target-chart");
}
