use std::sync::Arc;

use crate::{
    crop::calculator::crop_for,
    export::{
        naming::{export_filename, sheet_filename},
        sink::ExportArtifact,
    },
    foundation::{
        core::{FocalPoint, RasterDimensions},
        error::{CropError, CropResult},
    },
    layout::sheet::{SheetRequest, layout_sheet},
    raster::{encode::encode_png, source::RasterSource},
    ratio::math::Ratio,
    render::{sheet::SheetRenderer, single::render_crop},
};

/// Crop `source` to `ratio` around `focal` and encode it as a PNG named after `original_name`
/// and `label`.
///
/// Sampling and encoding run on the blocking pool. Dropping the future before it resolves
/// produces no artifact.
#[tracing::instrument(skip(source, ratio), fields(ratio = ratio.value()))]
pub async fn export_crop(
    source: Arc<dyn RasterSource>,
    ratio: &Ratio,
    label: &str,
    focal: FocalPoint,
    original_name: &str,
) -> CropResult<ExportArtifact> {
    let filename = export_filename(original_name, label);
    let dims = source.dimensions()?;
    let crop = crop_for(dims, ratio, focal)?;

    let png = run_blocking(move || {
        let raster = render_crop(source.as_ref(), &crop)?;
        encode_png(&raster)
    })
    .await?;

    tracing::debug!(%filename, bytes = png.len(), "crop exported");
    Ok(ExportArtifact { filename, png })
}

/// Lay out, render and encode a contact sheet of every request, in order.
#[tracing::instrument(skip(source, requests, renderer), fields(panels = requests.len()))]
pub async fn export_sheet(
    source: Arc<dyn RasterSource>,
    requests: Vec<SheetRequest>,
    focal: FocalPoint,
    original_name: &str,
    renderer: Arc<SheetRenderer>,
) -> CropResult<ExportArtifact> {
    let labels: Vec<&str> = requests.iter().map(|r| r.label.as_str()).collect();
    let filename = sheet_filename(original_name, &labels);
    let dims: RasterDimensions = source.dimensions()?;
    let layout = layout_sheet(dims, &requests, focal, renderer.config())?;

    let png = run_blocking(move || {
        let raster = renderer.render(source.as_ref(), &layout)?;
        encode_png(&raster)
    })
    .await?;

    tracing::debug!(%filename, bytes = png.len(), "sheet exported");
    Ok(ExportArtifact { filename, png })
}

async fn run_blocking<T, F>(job: F) -> CropResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> CropResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| CropError::encode_failure(format!("export task did not complete: {e}")))?
}

#[cfg(test)]
#[path = "../../tests/unit/export/pipeline.rs"]
mod tests;
