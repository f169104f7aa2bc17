//! RGB color values and color math helpers

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGB color. Serializes as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Format as a `#rrggbb` hex string
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Rgb(r, g, b))
    }

    /// Squared Euclidean distance to another color in RGB space
    pub fn distance_squared(&self, other: &Rgb) -> i64 {
        let dr = self.0 as i64 - other.0 as i64;
        let dg = self.1 as i64 - other.1 as i64;
        let db = self.2 as i64 - other.2 as i64;
        dr * dr + dg * dg + db * db
    }

    /// WCAG relative luminance, 0.0 (black) to 1.0 (white)
    pub fn relative_luminance(&self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.0) + 0.7152 * linearize(self.1) + 0.0722 * linearize(self.2)
    }

    /// WCAG contrast ratio against another color, in [1, 21]
    pub fn contrast_ratio(&self, other: &Rgb) -> f32 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();

        let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// Black or white, whichever reads better on this background
    pub fn text_color(&self) -> Rgb {
        let white = Rgb(255, 255, 255);
        let black = Rgb(0, 0, 0);

        if self.contrast_ratio(&white) >= self.contrast_ratio(&black) {
            white
        } else {
            black
        }
    }
}

/// A named reference color from the static color table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NamedColor {
    pub name: &'static str,
    pub rgb: Rgb,
}
