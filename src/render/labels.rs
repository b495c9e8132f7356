use std::fmt::Write as _;

use crate::{
    foundation::{
        config::SheetConfig,
        error::{CropError, CropResult},
    },
    layout::sheet::SheetLayout,
    raster::source::Raster,
};

/// Rasterizes the label band of a contact sheet: one bold label line and one dimension line,
/// centered over each panel.
///
/// Text goes through `usvg`/`resvg` against the system font database, optionally extended by
/// `SheetConfig::font_path`. With no usable font the text is simply absent.
pub struct LabelRasterizer {
    options: usvg::Options<'static>,
}

impl std::fmt::Debug for LabelRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelRasterizer")
            .field("font_faces", &self.options.fontdb.faces().count())
            .finish()
    }
}

impl LabelRasterizer {
    /// Load system fonts plus the configured font file, if any.
    pub fn new(config: &SheetConfig) -> CropResult<Self> {
        let mut options = usvg::Options::default();
        let db = options.fontdb_mut();
        db.load_system_fonts();
        if let Some(path) = &config.font_path {
            db.load_font_file(path).map_err(|e| {
                CropError::validation(format!("load font file '{}': {e}", path.display()))
            })?;
        }
        if db.faces().next().is_none() {
            tracing::warn!("no fonts available, contact sheet labels will be blank");
        }
        Ok(Self { options })
    }

    /// SVG document for the label band, `width` x `height` user units.
    pub fn band_svg(
        &self,
        layout: &SheetLayout,
        config: &SheetConfig,
        width: u32,
        height: u32,
    ) -> String {
        let family = escape_xml(&config.font_family);
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        for panel in &layout.panels {
            let cx = panel.center_x();
            let _ = write!(
                svg,
                r#"<text x="{cx}" y="{y}" text-anchor="middle" font-family="{family}" font-weight="bold" font-size="{size}" fill="{fill}">{text}</text>"#,
                y = config.label_baseline,
                size = config.label_font_size,
                fill = config.label_color.to_hex(),
                text = escape_xml(&panel.label),
            );
            let _ = write!(
                svg,
                r#"<text x="{cx}" y="{y}" text-anchor="middle" font-family="{family}" font-size="{size}" fill="{fill}">{text}</text>"#,
                y = config.dimension_baseline,
                size = config.dimension_font_size,
                fill = config.dimension_color.to_hex(),
                text = escape_xml(&panel.dimension_text()),
            );
        }
        svg.push_str("</svg>");
        svg
    }

    /// Premultiplied RGBA8 band, transparent where there is no text.
    pub fn rasterize_band(
        &self,
        layout: &SheetLayout,
        config: &SheetConfig,
        width: u32,
        height: u32,
    ) -> CropResult<Raster> {
        let svg = self.band_svg(layout, config, width, height);
        let tree = usvg::Tree::from_str(&svg, &self.options)
            .map_err(|e| CropError::validation(format!("parse label svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            CropError::render_target_exhausted(format!(
                "failed to allocate {width}x{height} label band"
            ))
        })?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        Raster::from_parts(width, height, pixmap.data().to_vec(), true)
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/labels.rs"]
mod tests;
