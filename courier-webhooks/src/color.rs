//! Named embed colors

/// Side bar color of an embed.
///
/// The named variants follow the chat client's palette; `Custom` carries
/// any `0xRRGGBB` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedColor {
    #[default]
    Default,
    Teal,
    Green,
    Blue,
    Purple,
    Magenta,
    Gold,
    Orange,
    Red,
    Grey,
    Blurple,
    Custom(u32),
}

impl EmbedColor {
    /// Decimal value sent on the wire
    pub fn value(self) -> u32 {
        match self {
            Self::Default => 0,
            Self::Teal => 0x1abc9c,
            Self::Green => 0x2ecc71,
            Self::Blue => 0x3498db,
            Self::Purple => 0x9b59b6,
            Self::Magenta => 0xe91e63,
            Self::Gold => 0xf1c40f,
            Self::Orange => 0xe67e22,
            Self::Red => 0xe74c3c,
            Self::Grey => 0x95a5a6,
            Self::Blurple => 0x5865f2,
            Self::Custom(value) => value & 0xffffff,
        }
    }

    /// Build a color from its red, green and blue components
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::Custom(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Look up a named color, case-insensitively, or parse `#RRGGBB` / `0xRRGGBB`
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let named = match input.to_ascii_lowercase().as_str() {
            "default" => Some(Self::Default),
            "teal" => Some(Self::Teal),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "purple" => Some(Self::Purple),
            "magenta" => Some(Self::Magenta),
            "gold" => Some(Self::Gold),
            "orange" => Some(Self::Orange),
            "red" => Some(Self::Red),
            "grey" | "gray" => Some(Self::Grey),
            "blurple" => Some(Self::Blurple),
            _ => None,
        };
        if named.is_some() {
            return named;
        }

        let hex = input
            .strip_prefix('#')
            .or_else(|| input.strip_prefix("0x"))?;
        u32::from_str_radix(hex, 16)
            .ok()
            .filter(|value| *value <= 0xffffff)
            .map(Self::Custom)
    }
}

impl From<u32> for EmbedColor {
    fn from(value: u32) -> Self {
        Self::Custom(value)
    }
}

impl From<EmbedColor> for u32 {
    fn from(color: EmbedColor) -> Self {
        color.value()
    }
}
