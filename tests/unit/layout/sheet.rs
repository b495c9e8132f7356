use super::*;

fn req(value: f64, label: &str) -> SheetRequest {
    SheetRequest::new(Ratio::new(value).unwrap(), label)
}

fn dims(w: f64, h: f64) -> RasterDimensions {
    RasterDimensions::new(w, h).unwrap()
}

#[test]
fn empty_requests_fail() {
    let err = layout_sheet(
        dims(100.0, 100.0),
        &[],
        FocalPoint::CENTER,
        &SheetConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CropError::EmptyRequestSet));
}

#[test]
fn equal_ratios_produce_identical_panels_spaced_by_padding() {
    let cfg = SheetConfig::default();
    let layout = layout_sheet(
        dims(1200.0, 900.0),
        &[req(1.0, "a"), req(1.0, "b")],
        FocalPoint::CENTER,
        &cfg,
    )
    .unwrap();
    let [a, b] = layout.panels.as_slice() else {
        panic!("expected two panels");
    };
    assert_eq!(a.scaled_width, b.scaled_width);
    assert_eq!(a.scaled_height, b.scaled_height);
    assert!((b.offset_x - a.offset_x - (a.scaled_width + cfg.padding)).abs() < 1e-9);
}

#[test]
fn small_crops_are_never_enlarged() {
    let cfg = SheetConfig::default();
    let layout = layout_sheet(
        dims(400.0, 300.0),
        &[req(1.0, "sq")],
        FocalPoint::CENTER,
        &cfg,
    )
    .unwrap();
    let p = &layout.panels[0];
    assert_eq!(p.scaled_width, 300.0);
    assert_eq!(p.scaled_height, 300.0);
    assert_eq!(p.offset_x, 40.0);
    assert_eq!(layout.total_width, 300.0 + 80.0);
    assert_eq!(layout.total_height, 80.0 + 300.0 + 40.0);
}

#[test]
fn tall_crops_scale_to_display_cap() {
    let cfg = SheetConfig::default();
    let layout = layout_sheet(
        dims(4000.0, 3000.0),
        &[req(1.0, "square"), req(16.0 / 9.0, "wide"), req(2.0 / 3.0, "tall")],
        FocalPoint::CENTER,
        &cfg,
    )
    .unwrap();

    for p in &layout.panels {
        assert!(p.scaled_height <= 800.0 + 1e-9);
        assert!((p.scaled_width / p.scaled_height - p.crop.aspect()).abs() < 1e-9);
    }
    let square = &layout.panels[0];
    assert_eq!(square.crop.height, 3000.0);
    assert!((square.scaled_height - 800.0).abs() < 1e-9);

    let sum: f64 = layout.panels.iter().map(|p| p.scaled_width).sum();
    assert!((layout.total_width - (sum + 40.0 * 4.0)).abs() < 1e-9);
    assert!((layout.total_height - (80.0 + 800.0 + 40.0)).abs() < 1e-9);
}

#[test]
fn offsets_follow_request_order() {
    let cfg = SheetConfig::default();
    let layout = layout_sheet(
        dims(600.0, 400.0),
        &[req(1.0, "first"), req(0.5, "second"), req(1.5, "third")],
        FocalPoint::CENTER,
        &cfg,
    )
    .unwrap();
    let labels: Vec<_> = layout.panels.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["first", "second", "third"]);

    let mut expected = cfg.padding;
    for p in &layout.panels {
        assert!((p.offset_x - expected).abs() < 1e-9);
        expected += p.scaled_width + cfg.padding;
    }
    assert!((layout.total_width - expected).abs() < 1e-9);
}

#[test]
fn custom_config_changes_geometry() {
    let cfg = SheetConfig {
        padding: 10.0,
        top_padding: 20.0,
        bottom_padding: 5.0,
        max_display_height: 100.0,
        ..SheetConfig::default()
    };
    let layout =
        layout_sheet(dims(1000.0, 500.0), &[req(2.0, "full")], FocalPoint::CENTER, &cfg).unwrap();
    let p = &layout.panels[0];
    assert_eq!(p.scaled_height, 100.0);
    assert_eq!(p.scaled_width, 200.0);
    assert_eq!(layout.total_width, 220.0);
    assert_eq!(layout.total_height, 125.0);
}

#[test]
fn panel_helpers() {
    let p = PanelPlacement {
        offset_x: 40.0,
        scaled_width: 100.0,
        scaled_height: 50.0,
        crop: CropRect {
            x: 0.0,
            y: 0.0,
            width: 1999.6,
            height: 999.8,
        },
        label: "x".to_string(),
    };
    assert_eq!(p.center_x(), 90.0);
    assert_eq!(p.dest_rect(80.0), Rect::new(40.0, 80.0, 140.0, 130.0));
    assert_eq!(p.dimension_text(), "2000 × 1000px");
}
