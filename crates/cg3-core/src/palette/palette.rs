//! Palette colors and the two color sets of the display chip.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::{PaletteError, ParseColorError};

/// Index of a palette entry, always in `0..4`.
///
/// Two bits per block in the packed output. Lower indices win ties during
/// quantization, so the declaration order of a palette matters.
pub type PaletteIndex = u8;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels as `[r, g, b, 255]`.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` (case-insensitive).
    ///
    /// ```
    /// use cg3_core::Rgb;
    ///
    /// let orange: Rgb = "#FF8000".parse().unwrap();
    /// assert_eq!(orange, Rgb::new(255, 128, 0));
    ///
    /// let cyan: Rgb = "0ff".parse().unwrap();
    /// assert_eq!(cyan, Rgb::new(0, 255, 255));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::NonAscii);
        }

        match s.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// The two hardware color sets of the 128×96 four-color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorSet {
    /// Green, yellow, blue, red
    #[default]
    Standard,
    /// Buff, cyan, magenta, orange
    Alternate,
}

impl FromStr for ColorSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "0" => Ok(ColorSet::Standard),
            "alternate" | "1" => Ok(ColorSet::Alternate),
            other => Err(format!(
                "unknown color set '{other}' (expected 'standard' or 'alternate')"
            )),
        }
    }
}

/// The four colors a block can take, in tie-break order.
///
/// # Example
///
/// ```
/// use cg3_core::{Palette, Rgb};
///
/// let palette = Palette::STANDARD;
/// assert_eq!(palette.color(0), Rgb::new(0, 255, 0)); // green
/// assert_eq!(palette.color(3), Rgb::new(255, 0, 0)); // red
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; 4],
}

impl Palette {
    /// Number of entries; fixed by the 2-bit block format.
    pub const SIZE: usize = 4;

    /// Green, yellow, blue, red.
    pub const STANDARD: Palette = Palette {
        colors: [
            Rgb::new(0x00, 0xff, 0x00),
            Rgb::new(0xff, 0xff, 0x00),
            Rgb::new(0x00, 0x00, 0xff),
            Rgb::new(0xff, 0x00, 0x00),
        ],
    };

    /// Buff, cyan, magenta, orange.
    pub const ALTERNATE: Palette = Palette {
        colors: [
            Rgb::new(0xff, 0xff, 0xff),
            Rgb::new(0x00, 0xff, 0xff),
            Rgb::new(0xff, 0x00, 0xff),
            Rgb::new(0xff, 0x80, 0x00),
        ],
    };

    /// Build a palette from four distinct colors.
    pub fn new(colors: [Rgb; 4]) -> Result<Self, PaletteError> {
        let mut seen = HashSet::with_capacity(Self::SIZE);
        for (index, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index });
            }
        }
        Ok(Self { colors })
    }

    /// The hardware palette for `set`.
    pub const fn for_color_set(set: ColorSet) -> Self {
        match set {
            ColorSet::Standard => Self::STANDARD,
            ColorSet::Alternate => Self::ALTERNATE,
        }
    }

    /// Parse four hex color strings.
    ///
    /// ```
    /// use cg3_core::Palette;
    ///
    /// let palette = Palette::from_hex(&["#0f0", "#ff0", "#00f", "#f00"]).unwrap();
    /// assert_eq!(palette, Palette::STANDARD);
    /// ```
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        if hex.len() != Self::SIZE {
            return Err(PaletteError::WrongSize {
                expected: Self::SIZE,
                actual: hex.len(),
            });
        }
        let mut colors = [Rgb::default(); 4];
        for (slot, s) in colors.iter_mut().zip(hex) {
            *slot = Rgb::from_str(s.as_ref())?;
        }
        Self::new(colors)
    }

    /// Color of entry `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 4`.
    #[inline]
    pub fn color(&self, index: PaletteIndex) -> Rgb {
        self.colors[index as usize]
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb; 4] {
        &self.colors
    }

    /// `(index, color)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteIndex, Rgb)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as PaletteIndex, c))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::STANDARD
    }
}
