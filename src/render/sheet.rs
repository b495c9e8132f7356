use std::sync::Arc;

use rayon::prelude::*;

use crate::{
    foundation::{
        config::SheetConfig,
        core::{Rect, Rgba8},
        error::{CropError, CropResult},
    },
    layout::sheet::SheetLayout,
    raster::source::{Raster, RasterSource},
    render::{labels::LabelRasterizer, single::render_crop},
};

/// Paints a laid-out contact sheet: background, label band, then per panel a backdrop, the
/// scaled crop and a border.
#[derive(Debug)]
pub struct SheetRenderer {
    config: SheetConfig,
    labels: LabelRasterizer,
}

impl SheetRenderer {
    /// Prepare fonts once; the renderer can then paint any number of sheets.
    pub fn new(config: SheetConfig) -> CropResult<Self> {
        config.validate()?;
        let labels = LabelRasterizer::new(&config)?;
        Ok(Self { config, labels })
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Canvas size in whole pixels, or `RenderTargetExhausted` when it cannot be allocated.
    pub fn canvas_size(&self, layout: &SheetLayout) -> CropResult<(u16, u16)> {
        let limit = self.config.max_canvas_dim.min(u32::from(u16::MAX));
        let to_px = |v: f64, axis: &str| -> CropResult<u16> {
            let px = v.ceil();
            if !px.is_finite() || px < 1.0 || px > f64::from(limit) {
                return Err(CropError::render_target_exhausted(format!(
                    "sheet {axis} of {v:.0}px exceeds the {limit}px canvas limit"
                )));
            }
            Ok(px as u16)
        };
        Ok((
            to_px(layout.total_width, "width")?,
            to_px(layout.total_height, "height")?,
        ))
    }

    /// Render `layout` from `source` into a premultiplied raster.
    ///
    /// Every panel crop is sampled before any drawing starts; one failing panel fails the
    /// whole sheet.
    #[tracing::instrument(skip_all, fields(panels = layout.panels.len()))]
    pub fn render(&self, source: &dyn RasterSource, layout: &SheetLayout) -> CropResult<Raster> {
        // Guards hand-built layouts; layout_sheet never yields an empty one.
        if layout.panels.is_empty() {
            return Err(CropError::EmptyRequestSet);
        }
        let (width, height) = self.canvas_size(layout)?;

        let cfg = &self.config;
        let crops = layout
            .panels
            .par_iter()
            .map(|panel| {
                let native = render_crop(source, &panel.crop)?;
                shrink_to(native, panel.dest_rect(cfg.top_padding))
            })
            .collect::<CropResult<Vec<_>>>()?;

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        reset_transforms(&mut ctx);
        ctx.set_paint(color_to_cpu(cfg.background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));
        self.draw_label_band(&mut ctx, layout, width, height)?;

        for (panel, crop) in layout.panels.iter().zip(crops) {
            let dest = panel.dest_rect(cfg.top_padding);

            reset_transforms(&mut ctx);
            ctx.set_paint(color_to_cpu(cfg.backdrop));
            ctx.fill_rect(&rect_to_cpu(dest));

            draw_scaled(&mut ctx, crop, dest)?;

            reset_transforms(&mut ctx);
            ctx.set_paint(color_to_cpu(cfg.border_color));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(cfg.border_width));
            ctx.stroke_rect(&rect_to_cpu(dest));
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);
        tracing::debug!(width, height, "sheet rendered");

        Raster::from_parts(
            u32::from(width),
            u32::from(height),
            pixmap.data_as_u8_slice().to_vec(),
            true,
        )
    }

    fn draw_label_band(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        layout: &SheetLayout,
        width: u16,
        height: u16,
    ) -> CropResult<()> {
        let band_h = (self.config.top_padding.ceil() as u16).min(height);
        if band_h == 0 {
            return Ok(());
        }
        let band = self.labels.rasterize_band(
            layout,
            &self.config,
            u32::from(width),
            u32::from(band_h),
        )?;

        reset_transforms(ctx);
        ctx.set_paint(raster_to_paint(band)?);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(band_h),
        ));
        Ok(())
    }
}

/// Downsample a native crop to its on-canvas size. Crops are never enlarged here; the draw
/// transform absorbs any sub-pixel remainder.
fn shrink_to(crop: Raster, dest: Rect) -> CropResult<Raster> {
    let tw = (dest.width().round() as u32).max(1);
    let th = (dest.height().round() as u32).max(1);
    if tw >= crop.width && th >= crop.height {
        return Ok(crop);
    }

    let premultiplied = crop.premultiplied;
    let img = image::RgbaImage::from_raw(crop.width, crop.height, crop.data)
        .ok_or_else(|| CropError::validation("panel crop buffer does not match its size"))?;
    let resized =
        image::imageops::resize(&img, tw, th, image::imageops::FilterType::Triangle);
    Raster::from_parts(tw, th, resized.into_raw(), premultiplied)
}

fn draw_scaled(ctx: &mut vello_cpu::RenderContext, crop: Raster, dest: Rect) -> CropResult<()> {
    let (w, h) = (f64::from(crop.width), f64::from(crop.height));
    let paint = raster_to_paint(crop)?;

    let transform = vello_cpu::kurbo::Affine::translate((dest.x0, dest.y0))
        * vello_cpu::kurbo::Affine::scale_non_uniform(dest.width() / w, dest.height() / h);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(transform);
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
    Ok(())
}

fn reset_transforms(ctx: &mut vello_cpu::RenderContext) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn raster_to_paint(raster: Raster) -> CropResult<vello_cpu::Image> {
    let pixmap = premul_raster_to_pixmap(&raster.into_premultiplied())?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn premul_raster_to_pixmap(raster: &Raster) -> CropResult<vello_cpu::Pixmap> {
    let w: u16 = raster.width.try_into().map_err(|_| {
        CropError::render_target_exhausted(format!("panel width {} exceeds u16", raster.width))
    })?;
    let h: u16 = raster.height.try_into().map_err(|_| {
        CropError::render_target_exhausted(format!("panel height {} exceeds u16", raster.height))
    })?;

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(raster.width as usize * raster.height as usize);
    for px in raster.data.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sheet.rs"]
mod tests;
