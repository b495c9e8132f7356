use super::*;

#[test]
fn from_parts_checks_length() {
    assert!(Raster::from_parts(2, 2, vec![0; 16], false).is_ok());
    assert!(matches!(
        Raster::from_parts(2, 2, vec![0; 15], false),
        Err(CropError::Validation(_))
    ));
}

#[test]
fn pixel_reads_row_major() {
    let data = (0u8..16).collect::<Vec<_>>();
    let r = Raster::from_parts(2, 2, data, false).unwrap();
    assert_eq!(r.pixel(1, 0), Some([4, 5, 6, 7]));
    assert_eq!(r.pixel(0, 1), Some([8, 9, 10, 11]));
    assert_eq!(r.pixel(2, 0), None);
}

#[test]
fn premultiply_then_straight_is_close() {
    let r = Raster::from_parts(1, 1, vec![100, 50, 200, 128], false).unwrap();
    let p = r.into_premultiplied();
    assert!(p.premultiplied);
    assert_eq!(
        p.data,
        vec![
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
    let s = p.into_straight();
    assert!(!s.premultiplied);
    for (got, want) in s.data.iter().zip([100u8, 50, 200, 128]) {
        assert!(got.abs_diff(want) <= 1, "{got} vs {want}");
    }
}

#[test]
fn transparent_pixels_premultiply_to_zero() {
    let r = Raster::from_parts(1, 1, vec![255, 255, 255, 0], false).unwrap();
    assert_eq!(r.into_premultiplied().data, vec![0, 0, 0, 0]);
}
