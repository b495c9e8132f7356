use super::*;

fn fp(x: f64, y: f64) -> FocalPoint {
    FocalPoint::new(x, y).unwrap()
}

#[test]
fn wide_image_keeps_full_height_and_slides_x() {
    let c = compute_crop(1000.0, 500.0, 1.0, fp(0.0, 50.0)).unwrap();
    assert_eq!(
        c,
        CropRect {
            x: 0.0,
            y: 0.0,
            width: 500.0,
            height: 500.0
        }
    );

    let c = compute_crop(1000.0, 500.0, 1.0, fp(100.0, 50.0)).unwrap();
    assert_eq!(c.x, 500.0);
    assert_eq!(c.y, 0.0);

    // The vertical focal coordinate is irrelevant when only x is cropped.
    let a = compute_crop(1000.0, 500.0, 1.0, fp(30.0, 0.0)).unwrap();
    let b = compute_crop(1000.0, 500.0, 1.0, fp(30.0, 100.0)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.x, 150.0);
}

#[test]
fn tall_image_keeps_full_width_and_slides_y_linearly() {
    for y in [0.0, 10.0, 25.0, 50.0, 99.0, 100.0] {
        for x in [0.0, 50.0, 100.0] {
            let c = compute_crop(500.0, 1000.0, 1.0, fp(x, y)).unwrap();
            assert_eq!(c.width, 500.0);
            assert_eq!(c.height, 500.0);
            assert_eq!(c.x, 0.0);
            assert!((c.y - y * 5.0).abs() < 1e-9);
        }
    }
}

#[test]
fn equal_aspect_takes_full_width_branch_and_whole_image() {
    let c = compute_crop(800.0, 600.0, 4.0 / 3.0, fp(100.0, 100.0)).unwrap();
    assert_eq!(c.x, 0.0);
    assert_eq!(c.width, 800.0);
    assert!((c.height - 600.0).abs() < 1e-9);
    assert!(c.y.abs() < 1e-9);
}

#[test]
fn crop_stays_in_bounds_and_matches_ratio() {
    let dims = [(1920.0, 1080.0), (3024.0, 4032.0), (1.0, 1.0), (7.0, 3.0)];
    let ratios = [1.0, 2.0 / 3.0, 16.0 / 9.0, 0.25, 5.0];
    for &(w, h) in &dims {
        for &r in &ratios {
            for focal in [fp(0.0, 0.0), fp(50.0, 50.0), fp(100.0, 100.0)] {
                let c = compute_crop(w, h, r, focal).unwrap();
                assert!(c.x >= 0.0 && c.y >= 0.0);
                assert!(c.x + c.width <= w + 1e-9);
                assert!(c.y + c.height <= h + 1e-9);
                assert!((c.aspect() - r).abs() < 1e-9);
                assert!(
                    (c.width - w).abs() < 1e-9 || (c.height - h).abs() < 1e-9,
                    "one axis must be used at full extent"
                );
            }
        }
    }
}

#[test]
fn compute_is_bit_identical_across_calls() {
    let a = compute_crop(4032.0, 3024.0, 2.0 / 3.0, fp(37.5, 61.2)).unwrap();
    let b = compute_crop(4032.0, 3024.0, 2.0 / 3.0, fp(37.5, 61.2)).unwrap();
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
    assert_eq!(a.width.to_bits(), b.width.to_bits());
    assert_eq!(a.height.to_bits(), b.height.to_bits());
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(compute_crop(0.0, 10.0, 1.0, FocalPoint::CENTER).is_err());
    assert!(compute_crop(10.0, 10.0, 0.0, FocalPoint::CENTER).is_err());
    assert!(compute_crop(10.0, 10.0, f64::NAN, FocalPoint::CENTER).is_err());
    let off = FocalPoint { x: 120.0, y: 0.0 };
    assert!(matches!(
        compute_crop(10.0, 10.0, 1.0, off),
        Err(CropError::Validation(_))
    ));
}

#[test]
fn crop_for_uses_ratio_value() {
    let dims = RasterDimensions::new(1000.0, 500.0).unwrap();
    let ratio = Ratio::new(1.0).unwrap();
    let c = crop_for(dims, &ratio, FocalPoint::CENTER).unwrap();
    assert_eq!(c.x, 250.0);
}
