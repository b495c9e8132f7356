use super::*;
use crate::{
    PixelRegion, SheetConfig,
    raster::{decode::DecodedImage, source::Raster},
};

fn gradient(w: u32, h: u32) -> Arc<dyn RasterSource> {
    let img =
        image::RgbaImage::from_fn(w, h, |x, y| image::Rgba([x as u8, y as u8, 200, 255]));
    Arc::new(DecodedImage::from_rgba(img).unwrap())
}

fn png_size(png: &[u8]) -> (u32, u32) {
    let img = image::load_from_memory_with_format(png, image::ImageFormat::Png).unwrap();
    (img.width(), img.height())
}

#[tokio::test]
async fn crop_export_is_named_and_sized() {
    let ratio = Ratio::new(1.0).unwrap();
    let art = export_crop(
        gradient(400, 300),
        &ratio,
        "1:1 (Square)",
        FocalPoint::CENTER,
        "photo.jpg",
    )
    .await
    .unwrap();

    assert_eq!(art.filename, "photo_1-1-Square.png");
    assert_eq!(png_size(&art.png), (300, 300));
}

#[tokio::test]
async fn crop_export_follows_the_focal_point() {
    let ratio = Ratio::new(1.0).unwrap();
    let art = export_crop(
        gradient(200, 100),
        &ratio,
        "1:1",
        FocalPoint::new(100.0, 50.0).unwrap(),
        "wide.png",
    )
    .await
    .unwrap();

    let img = image::load_from_memory(&art.png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (100, 100));
    // Fully right: the first column is source column 100.
    assert_eq!(img.get_pixel(0, 0).0, [100, 0, 200, 255]);
}

#[tokio::test]
async fn sheet_export_combines_labels_and_panels() {
    let renderer = Arc::new(SheetRenderer::new(SheetConfig::default()).unwrap());
    let requests = vec![
        SheetRequest::new(Ratio::new(1.0).unwrap(), "1:1 (Square)"),
        SheetRequest::new(Ratio::new(0.5).unwrap(), "1:2"),
    ];
    let art = export_sheet(
        gradient(400, 300),
        requests,
        FocalPoint::CENTER,
        "photo.jpg",
        renderer,
    )
    .await
    .unwrap();

    assert_eq!(art.filename, "photo_1-1-Square-1-2.png");
    // 40 + 300 + 40 + 150 + 40 wide; 80 + 300 + 40 tall.
    assert_eq!(png_size(&art.png), (570, 420));
}

#[tokio::test]
async fn empty_sheet_request_fails() {
    let renderer = Arc::new(SheetRenderer::new(SheetConfig::default()).unwrap());
    let err = export_sheet(
        gradient(10, 10),
        Vec::new(),
        FocalPoint::CENTER,
        "x.png",
        renderer,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CropError::EmptyRequestSet));
}

struct Broken;

impl RasterSource for Broken {
    fn pixel_size(&self) -> (u32, u32) {
        (64, 64)
    }

    fn sample_region(&self, _region: PixelRegion) -> CropResult<Raster> {
        Err(CropError::source_unavailable("gone"))
    }
}

#[tokio::test]
async fn unreadable_source_surfaces_its_error() {
    let err = export_crop(
        Arc::new(Broken),
        &Ratio::new(2.0).unwrap(),
        "2:1",
        FocalPoint::CENTER,
        "x.png",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, CropError::SourceUnavailable(_)));
}
