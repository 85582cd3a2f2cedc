//! Display colors and palettes

use rand::Rng;

/// 8-bit sRGB color with alpha
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_GRAY: Color = Color::rgb(85, 85, 85);
    pub const LIGHT_GRAY: Color = Color::rgb(170, 170, 170);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const LIME: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const PINK: Color = Color::rgb(255, 0, 255);
    pub const LIGHT_BLUE: Color = Color::rgb(0, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const DARK_BLUE: Color = Color::rgb(0, 0, 128);
    pub const ORANGE: Color = Color::rgb(255, 170, 0);
    pub const BROWN: Color = Color::rgb(128, 60, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Uniformly random opaque color
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }

    pub fn from_catppuccin(color: &catppuccin::Color) -> Self {
        Self::rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    /// Mix with `other`; `ratio` is the weight of `self`, clamped to [0, 1].
    ///
    /// Channels are truncated, alpha is kept from `self`.
    pub fn blend(self, other: Color, ratio: f32) -> Color {
        let ratio = ratio.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 * ratio + b as f32 * (1.0 - ratio)) as u8;
        Color::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            self.a,
        )
    }

    /// Lowercase `rrggbb` hex string after `prefix`
    pub fn to_hex(self, prefix: &str) -> String {
        format!("{prefix}{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Hue, saturation and lightness.
    ///
    /// Hue is in degrees when `hue_in_degrees` is set, otherwise in [0, 1).
    pub fn to_hsl(self, hue_in_degrees: bool) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let diff = max - min;
        let s = if l > 0.5 {
            diff / (2.0 - max - min)
        } else {
            diff / (max + min)
        };

        let sector = if max == r {
            (g - b) / diff + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / diff + 2.0
        } else {
            (r - g) / diff + 4.0
        };
        let h = sector / 6.0;

        (if hue_in_degrees { h * 360.0 } else { h }, s, l)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

impl From<Color> for egui::Color32 {
    fn from(color: Color) -> Self {
        egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

/// Catppuccin Mocha colors used by the HUD
pub mod theme {
    use super::Color;
    use catppuccin::PALETTE;

    pub fn background() -> Color {
        Color::from_catppuccin(&PALETTE.mocha.colors.crust)
    }

    pub fn text() -> Color {
        Color::from_catppuccin(&PALETTE.mocha.colors.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_blend() {
        let gray = Color::WHITE.blend(Color::BLACK, 0.5);
        assert_eq!(gray, Color::rgb(127, 127, 127));

        assert_eq!(Color::RED.blend(Color::BLUE, 1.0), Color::RED);
        assert_eq!(Color::RED.blend(Color::BLUE, 0.0), Color::BLUE);
        assert_eq!(Color::RED.blend(Color::BLUE, 7.0), Color::RED);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::ORANGE.to_hex("#"), "#ffaa00");
        assert_eq!(Color::DARK_BLUE.to_hex(""), "000080");
    }

    #[test]
    fn test_to_hsl_primary() {
        let (h, s, l) = Color::RED.to_hsl(true);
        assert_eq!(h, 0.0);
        assert_eq!(s, 1.0);
        assert_eq!(l, 0.5);

        let (h, _, _) = Color::BLUE.to_hsl(true);
        assert!((h - 240.0).abs() < 1e-3);

        let (h, _, _) = Color::LIME.to_hsl(false);
        assert!((h - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_to_hsl_achromatic() {
        let (h, s, l) = Color::LIGHT_GRAY.to_hsl(true);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((l - 170.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_random_is_opaque() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..16 {
            assert_eq!(Color::random(&mut rng).a, 255);
        }
    }

    #[test]
    fn test_byte_conversions() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(<[u8; 4]>::from(c), [1, 2, 3, 4]);
        assert_eq!(Color::from([1, 2, 3, 4]), c);
        assert_eq!(egui::Color32::from(Color::WHITE), egui::Color32::WHITE);
    }

    #[test]
    fn test_theme_is_readable() {
        assert_ne!(theme::background(), theme::text());
    }
}
