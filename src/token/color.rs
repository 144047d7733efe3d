//! Color tokens and light/dark pairs.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Raw RGBA channels, each nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Returns a copy with every channel clamped into `[0, 1]`.
    ///
    /// `NaN` clamps to `0.0` so encoding stays total.
    pub fn clamped(self) -> Self {
        fn clamp(c: f64) -> f64 {
            if c.is_nan() {
                0.0
            } else {
                c.clamp(0.0, 1.0)
            }
        }
        Self {
            red: clamp(self.red),
            green: clamp(self.green),
            blue: clamp(self.blue),
            alpha: clamp(self.alpha),
        }
    }

    fn channels(&self) -> [(&'static str, f64); 4] {
        [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ]
    }
}

/// A single named color token.
///
/// Channels are validated on construction; a `Color` never holds a value
/// outside `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    name: String,
    original_name: String,
    rgba: Rgba,
}

impl Color {
    /// Creates a color, failing if any channel is outside `[0, 1]` or not finite.
    pub fn new(
        name: impl Into<String>,
        original_name: impl Into<String>,
        rgba: Rgba,
    ) -> Result<Self> {
        let name = name.into();
        for (channel, value) in rgba.channels() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(Error::ChannelOutOfRange {
                    name,
                    channel,
                    value,
                });
            }
        }
        Ok(Self {
            name,
            original_name: original_name.into(),
            rgba,
        })
    }

    /// Normalized identifier, unique per catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw hierarchical name as it appeared in the design tool.
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn rgba(&self) -> Rgba {
        self.rgba
    }
}

/// A light color with an optional dark-appearance counterpart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawColorPair")]
pub struct ColorPair {
    light: Color,
    dark: Option<Color>,
}

impl ColorPair {
    /// Pairs a light color with an optional dark one.
    ///
    /// Both members must carry the same `name` and `original_name`.
    pub fn new(light: Color, dark: Option<Color>) -> Result<Self> {
        if let Some(dark) = &dark {
            if dark.name != light.name || dark.original_name != light.original_name {
                return Err(Error::MismatchedPair {
                    light: light.original_name.clone(),
                    dark: dark.original_name.clone(),
                });
            }
        }
        Ok(Self { light, dark })
    }

    /// A pair with no dark variant.
    pub fn light_only(light: Color) -> Self {
        Self { light, dark: None }
    }

    pub fn light(&self) -> &Color {
        &self.light
    }

    pub fn dark(&self) -> Option<&Color> {
        self.dark.as_ref()
    }

    pub fn name(&self) -> &str {
        self.light.name()
    }

    pub fn original_name(&self) -> &str {
        self.light.original_name()
    }
}

/// Wire form of a color pair in token files.
#[derive(Debug, Deserialize)]
struct RawColorPair {
    name: String,
    #[serde(default)]
    original_name: Option<String>,
    light: Rgba,
    #[serde(default)]
    dark: Option<Rgba>,
}

impl TryFrom<RawColorPair> for ColorPair {
    type Error = Error;

    fn try_from(raw: RawColorPair) -> Result<Self> {
        let original_name = raw.original_name.unwrap_or_else(|| raw.name.clone());
        let light = Color::new(raw.name.clone(), original_name.clone(), raw.light)?;
        let dark = raw
            .dark
            .map(|rgba| Color::new(raw.name, original_name, rgba))
            .transpose()?;
        ColorPair::new(light, dark)
    }
}
