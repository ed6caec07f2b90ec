use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Style for one `Renderer::draw_line` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSpec {
    pub visible: bool,
    pub color: Color,
    #[serde(default)]
    pub opacity: Option<f64>,
    pub width: f64,
}

impl Default for LineSpec {
    fn default() -> Self {
        Self {
            visible: true,
            color: Color::rgb(0.0, 0.0, 0.0),
            opacity: None,
            width: 1.0,
        }
    }
}

impl LineSpec {
    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(opacity) = self.opacity {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(ChartError::InvalidData(
                    "line opacity must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        self.color.validate()
    }

    /// Opacity the backend should apply, folding the optional override into the
    /// color alpha.
    #[must_use]
    pub fn effective_opacity(self) -> f64 {
        self.opacity.unwrap_or(1.0) * self.color.alpha
    }
}
