//! # Vertex Colors
//!
//! RGB colors in `[0, 1]` parsed from `#rrggbb` literals, plus the shading
//! mix used to derive palette variants without new literals.

use crate::error::{MeshError, MeshResult};

/// Linear RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Full white, used for geometry without explicit colors.
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    /// Creates a color from explicit channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` literal (the leading `#` is optional).
    ///
    /// Each channel is `byte / 255`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monument_mesh::Rgb;
    ///
    /// let c = Rgb::from_hex("#ff8000").unwrap();
    /// assert_eq!(c, Rgb::new(1.0, 128.0 / 255.0, 0.0));
    /// assert!(Rgb::from_hex("#fff").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> MeshResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(MeshError::invalid_color(hex));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| MeshError::invalid_color(hex))?;
        Ok(Self::new(
            ((value >> 16) & 255) as f64 / 255.0,
            ((value >> 8) & 255) as f64 / 255.0,
            (value & 255) as f64 / 255.0,
        ))
    }

    /// Interpolates toward white (`intensity > 0`) or black (`intensity < 0`)
    /// by `|intensity|`, clamped to 1. Zero returns the color unchanged.
    pub fn mix(self, intensity: f64) -> Self {
        if intensity == 0.0 {
            return self;
        }
        let target = if intensity > 0.0 { 1.0 } else { 0.0 };
        let amount = intensity.abs().min(1.0);
        let blend = |channel: f64| channel + (target - channel) * amount;
        Self::new(blend(self.r), blend(self.g), blend(self.b))
    }

    /// Channels as an array.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Parses `hex` and mixes it by `intensity` in one step.
///
/// # Example
///
/// ```rust
/// use monument_mesh::{mix_color, Rgb};
///
/// assert_eq!(mix_color("#000000", 0.5).unwrap(), Rgb::new(0.5, 0.5, 0.5));
/// assert_eq!(mix_color("#ffffff", -1.0).unwrap(), Rgb::new(0.0, 0.0, 0.0));
/// ```
pub fn mix_color(hex: &str, intensity: f64) -> MeshResult<Rgb> {
    Ok(Rgb::from_hex(hex)?.mix(intensity))
}
