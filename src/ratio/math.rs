use crate::foundation::{
    config::{MAX_DENOMINATOR, RATIO_TOLERANCE},
    error::{CropError, CropResult},
};

/// Width-to-height proportion with an optional display label.
///
/// Equality is approximate: use [`Ratio::same_as`] or [`ratios_equal`], never `==` on `value`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Ratio {
    pub(crate) value: f64,
    pub(crate) label: Option<String>,
}

impl Ratio {
    /// Create a validated ratio (`value` finite and `> 0`).
    pub fn new(value: f64) -> CropResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CropError::invalid_format(format!(
                "ratio must be a positive number, got {value}"
            )));
        }
        Ok(Self { value, label: None })
    }

    /// `width / height` from two positive sides.
    pub fn from_sides(width: f64, height: f64) -> CropResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(CropError::invalid_format(format!(
                "ratio sides must be positive, got {width}:{height}"
            )));
        }
        Self::new(width / height)
    }

    /// Attach a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// `width / height`.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Display label, if one was attached.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Label when present, the fraction rendering otherwise.
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format_ratio(self.value))
    }

    /// Approximate equality under the shared [`RATIO_TOLERANCE`].
    pub fn same_as(&self, other: &Ratio) -> bool {
        ratios_equal(self.value, other.value, RATIO_TOLERANCE)
    }
}

/// Parse `"W:H"` into a ratio. Whitespace around either number and the colon is ignored.
pub fn parse_ratio(input: &str) -> CropResult<Ratio> {
    const USAGE: &str = "use W:H (for example 2:3)";

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CropError::invalid_format("please enter a ratio"));
    }
    if !trimmed.contains(':') {
        return Err(CropError::invalid_format(format!(
            "missing ':' in '{trimmed}', {USAGE}"
        )));
    }

    let parts: Vec<&str> = trimmed.split(':').map(str::trim).collect();
    let [w, h] = parts.as_slice() else {
        return Err(CropError::invalid_format(format!(
            "expected exactly two parts in '{trimmed}', {USAGE}"
        )));
    };

    let parse_side = |s: &str| -> CropResult<f64> {
        let v: f64 = s
            .parse()
            .map_err(|_| CropError::invalid_format(format!("'{s}' is not a number, {USAGE}")))?;
        if !v.is_finite() || v <= 0.0 {
            return Err(CropError::invalid_format(format!(
                "'{s}' must be a positive number, {USAGE}"
            )));
        }
        Ok(v)
    };

    Ratio::from_sides(parse_side(w)?, parse_side(h)?)
}

/// `|a - b| < tolerance`.
pub fn ratios_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Render a ratio as the smallest-denominator fraction `"n:d"` with `d <= 100`, or with two
/// decimals when no such fraction is within tolerance.
pub fn format_ratio(value: f64) -> String {
    format_ratio_with(value, MAX_DENOMINATOR, RATIO_TOLERANCE)
}

/// [`format_ratio`] with explicit search bound and tolerance.
pub fn format_ratio_with(value: f64, max_denominator: u32, tolerance: f64) -> String {
    // First hit wins, so simpler fractions are preferred over closer ones.
    for d in 1..=max_denominator {
        let d = f64::from(d);
        let n = (value * d).round();
        if ratios_equal(value, n / d, tolerance) {
            return format!("{n}:{d}");
        }
    }
    format!("{value:.2}")
}

#[cfg(test)]
#[path = "../../tests/unit/ratio/math.rs"]
mod tests;
