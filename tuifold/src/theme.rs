use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid hex color {0:?}, expected #rrggbb")]
    BadHex(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex triplet.
    pub fn from_hex(hex: &str) -> Result<Self, ThemeError> {
        let bad = || ThemeError::BadHex(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(bad)?;
        // Exactly six hex digits; from_str_radix alone would take a leading sign
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let parse = |range| u8::from_str_radix(&digits[range], 16).map_err(|_| bad());
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

/// A 16-color terminal palette plus background, foreground and cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub black: Rgb,
    pub red: Rgb,
    pub green: Rgb,
    pub yellow: Rgb,
    pub blue: Rgb,
    pub magenta: Rgb,
    pub cyan: Rgb,
    pub white: Rgb,
    pub bright_black: Rgb,
    pub bright_red: Rgb,
    pub bright_green: Rgb,
    pub bright_yellow: Rgb,
    pub bright_blue: Rgb,
    pub bright_magenta: Rgb,
    pub bright_cyan: Rgb,
    pub bright_white: Rgb,
    pub background: Rgb,
    pub foreground: Rgb,
    pub cursor: Rgb,
}

impl Palette {
    /// The Base16 Eighties terminal scheme.
    ///
    /// Bright colors reuse the normal ones except gray and white, and
    /// the foreground slot carries the same dark gray as the
    /// background. Kept verbatim; [`Theme::from_palette`] works around
    /// the foreground slot.
    pub fn eighties() -> Self {
        Self {
            black: Rgb::new(0x2d, 0x2d, 0x2d),
            red: Rgb::new(0xf2, 0x77, 0x7a),
            green: Rgb::new(0x99, 0xcc, 0x99),
            yellow: Rgb::new(0xff, 0xcc, 0x66),
            blue: Rgb::new(0x66, 0x99, 0xcc),
            magenta: Rgb::new(0xcc, 0x99, 0xcc),
            cyan: Rgb::new(0x66, 0xcc, 0xcc),
            white: Rgb::new(0xd3, 0xd0, 0xc8),
            bright_black: Rgb::new(0x74, 0x73, 0x69),
            bright_red: Rgb::new(0xf2, 0x77, 0x7a),
            bright_green: Rgb::new(0x99, 0xcc, 0x99),
            bright_yellow: Rgb::new(0xff, 0xcc, 0x66),
            bright_blue: Rgb::new(0x66, 0x99, 0xcc),
            bright_magenta: Rgb::new(0xcc, 0x99, 0xcc),
            bright_cyan: Rgb::new(0x66, 0xcc, 0xcc),
            bright_white: Rgb::new(0xf2, 0xf0, 0xec),
            background: Rgb::new(0x2d, 0x2d, 0x2d),
            foreground: Rgb::new(0x2d, 0x2d, 0x2d),
            cursor: Rgb::new(0xd3, 0xd0, 0xc8),
        }
    }

    /// The 16 ANSI slots in override order, color0 through color15.
    pub fn ansi_slots(&self) -> [Rgb; 16] {
        [
            self.black,
            self.red,
            self.green,
            self.yellow,
            self.blue,
            self.magenta,
            self.cyan,
            self.white,
            self.bright_black,
            self.bright_red,
            self.bright_green,
            self.bright_yellow,
            self.bright_blue,
            self.bright_magenta,
            self.bright_cyan,
            self.bright_white,
        ]
    }
}

/// Role colors the strip renderer draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Whole-frame background.
    pub background: Rgb,
    /// Link labels and rail titles.
    pub text: Rgb,
    /// Expanded section headers.
    pub title: Rgb,
    /// Collapsed rail background.
    pub rail: Rgb,
    /// Expanded panel background.
    pub panel: Rgb,
    /// Link label accent.
    pub link: Rgb,
    /// Background of the section under the pointer.
    pub hover: Rgb,
}

impl Theme {
    /// Derives role colors from a terminal palette.
    ///
    /// Text comes from the white slot, not the foreground slot: the
    /// Eighties scheme ships foreground equal to background, which
    /// renders every glyph invisible.
    pub fn from_palette(palette: &Palette) -> Self {
        let panel = lighten(palette.background, 0.06);
        Self {
            background: palette.background,
            text: palette.white,
            title: palette.yellow,
            rail: lighten(palette.background, 0.03),
            panel,
            link: palette.blue,
            hover: lighten(panel, 0.06),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&Palette::eighties())
    }
}

/// Raises perceptual lightness by `amount`, through Oklch.
pub fn lighten(rgb: Rgb, amount: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let srgb = Srgb::new(
        rgb.r as f32 / 255.0,
        rgb.g as f32 / 255.0,
        rgb.b as f32 / 255.0,
    );
    let mut oklch: Oklch = srgb.into_color();
    oklch.l = (oklch.l + amount).clamp(0.0, 1.0);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}
