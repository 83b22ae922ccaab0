//! ANSI color and decoration codes.

/// The sixteen ANSI colors plus the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Default,

    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,

    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
}

impl Color {
    /// Every color, in code order.
    pub const ALL: [Color; 17] = [
        Color::Default,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::LightGray,
        Color::DarkGray,
        Color::LightRed,
        Color::LightGreen,
        Color::LightYellow,
        Color::LightBlue,
        Color::LightMagenta,
        Color::LightCyan,
        Color::White,
    ];

    /// SGR code that sets this color as the foreground.
    pub fn foreground_code(self) -> u8 {
        match self {
            Color::Default => 39,

            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::LightGray => 37,

            Color::DarkGray => 90,
            Color::LightRed => 91,
            Color::LightGreen => 92,
            Color::LightYellow => 93,
            Color::LightBlue => 94,
            Color::LightMagenta => 95,
            Color::LightCyan => 96,
            Color::White => 97,
        }
    }

    /// SGR code that sets this color as the background.
    pub fn background_code(self) -> u8 {
        self.foreground_code() + 10
    }
}

/// Font decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Bold,
    Underline,
}

impl Decoration {
    /// SGR code that turns the decoration on.
    pub fn code(self) -> u8 {
        match self {
            Decoration::Bold => 1,
            Decoration::Underline => 4,
        }
    }

    /// SGR code that turns the decoration off.
    pub fn reset_code(self) -> u8 {
        match self {
            Decoration::Bold => 21,
            Decoration::Underline => 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_foreground_codes() {
        assert_eq!(Color::Default.foreground_code(), 39);
        assert_eq!(Color::Black.foreground_code(), 30);
        assert_eq!(Color::Red.foreground_code(), 31);
        assert_eq!(Color::LightGray.foreground_code(), 37);
    }

    #[test]
    fn bright_foreground_codes() {
        assert_eq!(Color::DarkGray.foreground_code(), 90);
        assert_eq!(Color::LightCyan.foreground_code(), 96);
        assert_eq!(Color::White.foreground_code(), 97);
    }

    #[test]
    fn background_is_offset_by_ten() {
        for color in Color::ALL {
            assert_eq!(color.background_code(), color.foreground_code() + 10);
        }
        assert_eq!(Color::Default.background_code(), 49);
    }

    #[test]
    fn decoration_codes() {
        assert_eq!(Decoration::Bold.code(), 1);
        assert_eq!(Decoration::Underline.code(), 4);
        assert_eq!(Decoration::Bold.reset_code(), 21);
        assert_eq!(Decoration::Underline.reset_code(), 24);
    }
}
