//! Plain data shared by the facade and its backends.
//!
//! Nothing here talks to a surface. `Paint` is the platform-free style
//! description; backends either use it directly as their style type or
//! translate it into their own handles.

use serde::{Deserialize, Serialize};

// ─── Size ────────────────────────────────────────────────────────────────

/// Pixel dimensions of a surface or viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

// ─── Color ───────────────────────────────────────────────────────────────

/// RGBA color, each channel in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`. The `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
        let short = |i: usize| nibble(digits[i]).map(|n| n * 17);
        let long = |i: usize| Some(nibble(digits[i])? << 4 | nibble(digits[i + 1])?);

        let [r, g, b, a] = match digits.len() {
            3 => [short(0)?, short(1)?, short(2)?, 255],
            4 => [short(0)?, short(1)?, short(2)?, short(3)?],
            6 => [long(0)?, long(2)?, long(4)?, 255],
            8 => [long(0)?, long(2)?, long(4)?, long(6)?],
            _ => return None,
        };
        Some(Self::from_rgba8(r, g, b, a))
    }

    /// Channels as bytes, rounded and clamped.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }

    /// Uppercase `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

// ─── Paint ───────────────────────────────────────────────────────────────

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32, // 0.0 .. 1.0
    pub color: Color,
}

/// Opaque handle to a backend-registered pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternId(pub u32);

/// Fill or stroke style.
///
/// Gradient geometry is in surface pixels, matching the canvas
/// `createLinearGradient` / `createRadialGradient` factories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    Solid { color: Color },
    LinearGradient {
        start: (f64, f64),
        end: (f64, f64),
        stops: Vec<GradientStop>,
    },
    RadialGradient {
        center: (f64, f64),
        radius: f64,
        stops: Vec<GradientStop>,
    },
    Pattern { id: PatternId },
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }

    /// Solid paint from a hex string, `None` if it does not parse.
    pub fn hex(hex: &str) -> Option<Self> {
        Color::from_hex(hex).map(Self::solid)
    }

    /// Representative flat color: the solid color or the first gradient stop.
    pub fn flat_color(&self) -> Option<Color> {
        match self {
            Self::Solid { color } => Some(*color),
            Self::LinearGradient { stops, .. } | Self::RadialGradient { stops, .. } => {
                stops.first().map(|s| s.color)
            }
            Self::Pattern { .. } => None,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::solid(Color::BLACK)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}
