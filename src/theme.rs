use crate::error::{ChartError, ChartResult};
use gpui::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color written as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: HexColor = HexColor::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn to_hsla(self) -> Hsla {
        rgb(self.to_u32()).into()
    }
}

impl From<HexColor> for Hsla {
    fn from(color: HexColor) -> Self {
        color.to_hsla()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::Configuration(format!("invalid hex color {s:?}")));
        }
        let expanded: String = match digits.len() {
            // #RGB shorthand
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => {
                return Err(ChartError::Configuration(format!(
                    "invalid hex color {s:?}"
                )))
            }
        };
        u32::from_str_radix(&expanded, 16)
            .map(HexColor::from_u32)
            .map_err(|_| ChartError::Configuration(format!("invalid hex color {s:?}")))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Base colors handed out to stacks, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub Vec<HexColor>);

impl Palette {
    pub fn new(colors: Vec<HexColor>) -> Self {
        Self(colors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<HexColor> {
        self.0.get(index).copied()
    }

    pub fn colors(&self) -> &[HexColor] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            HexColor::from_u32(0x5DA5DA), // blue
            HexColor::from_u32(0xFAA43A), // orange
            HexColor::from_u32(0x60BD68), // green
            HexColor::from_u32(0xF17CB0), // pink
            HexColor::from_u32(0xB2912F), // brown
            HexColor::from_u32(0xB276B2), // purple
            HexColor::from_u32(0xDECF3F), // yellow
            HexColor::from_u32(0xF15854), // red
        ])
    }
}

#[derive(Clone, Debug)]
pub struct ChartTheme {
    /// Used for series that arrive before a color has been assigned to them.
    pub fallback_series: Hsla,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            fallback_series: gpui::white().alpha(0.6),
        }
    }
}
