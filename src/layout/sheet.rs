use crate::{
    crop::calculator::crop_for,
    foundation::{
        config::SheetConfig,
        core::{CropRect, FocalPoint, RasterDimensions, Rect},
        error::{CropError, CropResult},
    },
    ratio::math::Ratio,
};

/// One labeled ratio to place on a contact sheet.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SheetRequest {
    pub ratio: Ratio,
    pub label: String,
}

impl SheetRequest {
    pub fn new(ratio: Ratio, label: impl Into<String>) -> Self {
        Self {
            ratio,
            label: label.into(),
        }
    }
}

/// Where one crop lands on the sheet.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PanelPlacement {
    /// Left edge of the panel on the canvas.
    pub offset_x: f64,
    pub scaled_width: f64,
    pub scaled_height: f64,
    /// Native crop in source pixel space.
    pub crop: CropRect,
    pub label: String,
}

impl PanelPlacement {
    /// Panel rectangle on the canvas, given the label band height.
    pub fn dest_rect(&self, top: f64) -> Rect {
        Rect::new(
            self.offset_x,
            top,
            self.offset_x + self.scaled_width,
            top + self.scaled_height,
        )
    }

    /// Horizontal center of the panel, where its text lines are anchored.
    pub fn center_x(&self) -> f64 {
        self.offset_x + self.scaled_width / 2.0
    }

    /// `"{w} × {h}px"` using the rounded native crop size.
    pub fn dimension_text(&self) -> String {
        format!(
            "{} × {}px",
            self.crop.width.round() as u64,
            self.crop.height.round() as u64
        )
    }
}

/// Backend-independent geometry plan for a contact sheet.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SheetLayout {
    pub total_width: f64,
    pub total_height: f64,
    /// Panels in request order, left to right.
    pub panels: Vec<PanelPlacement>,
}

/// Crop every request, scale the crops to a shared display height and lay them out left to
/// right.
///
/// Crops taller than `max_display_height` shrink to it; shorter ones keep their native size.
/// Each panel is preceded by one `padding` gap and one trailing gap follows the last panel.
#[tracing::instrument(skip(requests, config), fields(panels = requests.len()))]
pub fn layout_sheet(
    source: RasterDimensions,
    requests: &[SheetRequest],
    focal: FocalPoint,
    config: &SheetConfig,
) -> CropResult<SheetLayout> {
    if requests.is_empty() {
        return Err(CropError::EmptyRequestSet);
    }

    let mut panels = Vec::<PanelPlacement>::with_capacity(requests.len());
    let mut x = config.padding;
    let mut max_scaled_height = 0.0f64;
    for req in requests {
        let crop = crop_for(source, &req.ratio, focal)?;
        let scale = (config.max_display_height / crop.height).min(1.0);
        let scaled_width = crop.width * scale;
        let scaled_height = crop.height * scale;

        panels.push(PanelPlacement {
            offset_x: x,
            scaled_width,
            scaled_height,
            crop,
            label: req.label.clone(),
        });
        max_scaled_height = max_scaled_height.max(scaled_height);
        x += scaled_width + config.padding;
    }

    let total_width = panels.iter().map(|p| p.scaled_width).sum::<f64>()
        + config.padding * (panels.len() as f64 + 1.0);
    let total_height = config.top_padding + max_scaled_height + config.bottom_padding;
    tracing::debug!(total_width, total_height, "sheet laid out");

    Ok(SheetLayout {
        total_width,
        total_height,
        panels,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sheet.rs"]
mod tests;
