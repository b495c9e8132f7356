use crate::{
    foundation::{
        config::{MAX_DENOMINATOR, RATIO_TOLERANCE},
        error::{CropError, CropResult},
    },
    layout::sheet::SheetRequest,
    ratio::math::{Ratio, format_ratio_with, parse_ratio, ratios_equal},
};

/// Built-in ratios offered before any custom ones, in display order.
pub const PRESET_RATIOS: &[(&str, f64)] = &[
    ("1:1 (Square)", 1.0),
    ("2:3 (Photo)", 2.0 / 3.0),
    ("3:4 (Photo)", 3.0 / 4.0),
    ("4:5 (Photo)", 4.0 / 5.0),
    ("16:9 (Display)", 16.0 / 9.0),
];

/// Preset and custom ratios plus the caller's active selection.
///
/// Every mutation is an explicit call returning a result; failures leave the catalog untouched.
#[derive(Clone, Debug)]
pub struct RatioCatalog {
    presets: Vec<Ratio>,
    custom: Vec<Ratio>,
    selected: Vec<f64>,
    tolerance: f64,
    max_denominator: u32,
}

impl Default for RatioCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RatioCatalog {
    /// Catalog holding [`PRESET_RATIOS`], nothing selected.
    pub fn new() -> Self {
        Self::with_tolerance(RATIO_TOLERANCE, MAX_DENOMINATOR)
    }

    /// Catalog using a non-default equality tolerance and fraction search bound.
    pub fn with_tolerance(tolerance: f64, max_denominator: u32) -> Self {
        let presets = PRESET_RATIOS
            .iter()
            .map(|&(label, value)| Ratio {
                value,
                label: Some(label.to_string()),
            })
            .collect();
        Self {
            presets,
            custom: Vec::new(),
            selected: Vec::new(),
            tolerance,
            max_denominator,
        }
    }

    pub fn presets(&self) -> &[Ratio] {
        &self.presets
    }

    pub fn custom(&self) -> &[Ratio] {
        &self.custom
    }

    /// Selected ratio values in selection order.
    pub fn selected(&self) -> &[f64] {
        &self.selected
    }

    fn equal(&self, a: f64, b: f64) -> bool {
        ratios_equal(a, b, self.tolerance)
    }

    pub fn is_selected(&self, value: f64) -> bool {
        self.selected.iter().any(|&r| self.equal(r, value))
    }

    /// Deselect `value` if an equal ratio is selected, otherwise append it.
    ///
    /// Returns whether the ratio is selected afterwards. Non-finite or non-positive values are
    /// rejected and leave the selection unchanged.
    pub fn toggle(&mut self, value: f64) -> CropResult<bool> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CropError::validation(format!(
                "ratio must be finite and positive, got {value}"
            )));
        }
        match self.selected.iter().position(|&r| self.equal(r, value)) {
            Some(idx) => {
                self.selected.remove(idx);
                Ok(false)
            }
            None => {
                self.selected.push(value);
                Ok(true)
            }
        }
    }

    /// Parse `input`, register it as a custom ratio labeled `Custom n:d`, and select it.
    pub fn add_custom(&mut self, input: &str) -> CropResult<&Ratio> {
        let parsed = parse_ratio(input)?;
        let value = parsed.value();

        let exists = self
            .presets
            .iter()
            .chain(&self.custom)
            .any(|r| self.equal(r.value(), value));
        if exists {
            return Err(CropError::duplicate_ratio(format!(
                "ratio '{}' already exists",
                input.trim()
            )));
        }

        let label = format!(
            "Custom {}",
            format_ratio_with(value, self.max_denominator, self.tolerance)
        );
        tracing::debug!(%label, value, "custom ratio added");
        self.custom.push(parsed.with_label(label));
        self.selected.push(value);
        Ok(&self.custom[self.custom.len() - 1])
    }

    /// Remove the custom ratio at `index` and drop it from the selection.
    pub fn remove_custom(&mut self, index: usize) -> CropResult<Ratio> {
        if index >= self.custom.len() {
            return Err(CropError::validation(format!(
                "custom ratio index {index} out of range (have {})",
                self.custom.len()
            )));
        }
        let removed = self.custom.remove(index);
        let tolerance = self.tolerance;
        self.selected
            .retain(|&r| !ratios_equal(r, removed.value(), tolerance));
        Ok(removed)
    }

    /// Preset label, then custom label, then the fraction rendering.
    pub fn label_for(&self, value: f64) -> String {
        self.presets
            .iter()
            .chain(&self.custom)
            .find(|r| self.equal(r.value(), value))
            .and_then(|r| r.label().map(str::to_string))
            .unwrap_or_else(|| format_ratio_with(value, self.max_denominator, self.tolerance))
    }

    /// The selection as labeled contact sheet requests, in selection order.
    pub fn selected_requests(&self) -> CropResult<Vec<SheetRequest>> {
        self.selected
            .iter()
            .map(|&value| {
                let label = self.label_for(value);
                Ok(SheetRequest {
                    ratio: Ratio::new(value)?.with_label(label.clone()),
                    label,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ratio/catalog.rs"]
mod tests;
