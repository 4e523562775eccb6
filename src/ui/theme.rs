use rand::Rng;
use ratatui::style::Color;

/// 24-bit colour with the arithmetic needed for gradients and fades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    pub fn from_color(color: Color) -> Option<Rgb> {
        match color {
            Color::Rgb(r, g, b) => Some(Rgb::new(r, g, b)),
            Color::Black => Some(Rgb::new(0, 0, 0)),
            Color::White => Some(Rgb::new(0xff, 0xff, 0xff)),
            _ => None,
        }
    }
}

/// Two-colour background gradient, drawn top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientPair {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl GradientPair {
    pub const fn new(top: Rgb, bottom: Rgb) -> Self {
        Self { top, bottom }
    }

    /// Colour at `t` in [0, 1] down the screen.
    pub fn sample(&self, t: f64) -> Rgb {
        self.top.lerp(self.bottom, t)
    }

    /// Uniform pick from [`PALETTE`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> GradientPair {
        PALETTE[rng.random_range(0..PALETTE.len())]
    }
}

impl Default for GradientPair {
    fn default() -> Self {
        PALETTE[0]
    }
}

pub const PALETTE: [GradientPair; 5] = [
    GradientPair::new(Rgb::new(0xFF, 0x9A, 0x9E), Rgb::new(0xFA, 0xD0, 0xC4)),
    GradientPair::new(Rgb::new(0xA1, 0x8C, 0xD1), Rgb::new(0xFB, 0xC2, 0xEB)),
    GradientPair::new(Rgb::new(0x84, 0xFA, 0xB0), Rgb::new(0x8F, 0xD3, 0xF4)),
    GradientPair::new(Rgb::new(0xA1, 0xC4, 0xFD), Rgb::new(0xC2, 0xE9, 0xFB)),
    GradientPair::new(Rgb::new(0xFF, 0xC3, 0xA0), Rgb::new(0xFF, 0xAF, 0xBD)),
];

pub const CARD_BACKGROUND: Rgb = Rgb::new(0xF7, 0xF7, 0xF7);
pub const QUOTE_TEXT: Rgb = Rgb::new(0x33, 0x33, 0x33);
pub const AUTHOR_TEXT: Rgb = Rgb::new(0x55, 0x55, 0x55);
pub const CARD_BORDER: Rgb = Rgb::new(0xE0, 0xE0, 0xE0);
pub const BUTTON_BACKGROUND: Rgb = Rgb::new(0xFC, 0xFC, 0xFC);
pub const BUTTON_TEXT: Rgb = Rgb::new(0x33, 0x33, 0x33);
pub const FOOTER_TEXT: Rgb = Rgb::new(0x40, 0x40, 0x40);
