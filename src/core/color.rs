use serde::{Deserialize, Serialize};

/// 8-bit RGB color as understood by the rendering engine's `rgb(...)` syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `rgb(r, g, b)` and `#rrggbb` color codes.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Some(hex) = input.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        let inner = input
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))?;
        let mut channels = inner.split(',').map(|part| part.trim().parse::<u8>());
        let red = channels.next()?.ok()?;
        let green = channels.next()?.ok()?;
        let blue = channels.next()?.ok()?;
        if channels.next().is_some() {
            return None;
        }
        Some(Self::new(red, green, blue))
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Moves every channel towards white by `ratio` of the remaining distance.
    #[must_use]
    pub fn lighten(self, ratio: f64) -> Self {
        let ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let lift = |channel: u8| {
            let value = f64::from(channel);
            (value + (255.0 - value) * ratio).round().clamp(0.0, 255.0) as u8
        };
        Self::new(lift(self.red), lift(self.green), lift(self.blue))
    }

    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// Returns a lighter variant of `color`, or `None` when the code is not parseable.
#[must_use]
pub fn lighter_color(color: &str, ratio: f64) -> Option<String> {
    RgbColor::parse(color).map(|rgb| rgb.lighten(ratio).to_css())
}
