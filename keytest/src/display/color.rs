/// The sixteen VIC-II colours, by colour code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    Black = 0,
    White = 1,
    Red = 2,
    Cyan = 3,
    Purple = 4,
    Green = 5,
    Blue = 6,
    Yellow = 7,
    Orange = 8,
    Brown = 9,
    LightRed = 10,
    DarkGray = 11,
    Gray = 12,
    LightGreen = 13,
    LightBlue = 14,
    LightGray = 15,
}

impl Color {
    const ALL: [Color; 16] = [
        Color::Black,
        Color::White,
        Color::Red,
        Color::Cyan,
        Color::Purple,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Brown,
        Color::LightRed,
        Color::DarkGray,
        Color::Gray,
        Color::LightGreen,
        Color::LightBlue,
        Color::LightGray,
    ];

    /// Colour RAM is four bits wide; the upper nibble is ignored.
    pub const fn from_code(code: u8) -> Color {
        Self::ALL[(code & 0x0f) as usize]
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Approximate RGB value (Pepto palette).
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0x00, 0x00, 0x00),
            Color::White => (0xff, 0xff, 0xff),
            Color::Red => (0x68, 0x37, 0x2b),
            Color::Cyan => (0x70, 0xa4, 0xb2),
            Color::Purple => (0x6f, 0x3d, 0x86),
            Color::Green => (0x58, 0x8d, 0x43),
            Color::Blue => (0x35, 0x28, 0x79),
            Color::Yellow => (0xb8, 0xc7, 0x6f),
            Color::Orange => (0x6f, 0x4f, 0x25),
            Color::Brown => (0x43, 0x39, 0x00),
            Color::LightRed => (0x9a, 0x67, 0x59),
            Color::DarkGray => (0x44, 0x44, 0x44),
            Color::Gray => (0x6c, 0x6c, 0x6c),
            Color::LightGreen => (0x9a, 0xd2, 0x84),
            Color::LightBlue => (0x6c, 0x5e, 0xb5),
            Color::LightGray => (0x95, 0x95, 0x95),
        }
    }
}

/// Colours of a key block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub highlight: Color,
    pub dim: Color,
}

impl Palette {
    pub const fn select(&self, pressed: bool) -> Color {
        if pressed {
            self.highlight
        } else {
            self.dim
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            highlight: Color::LightRed,
            dim: Color::White,
        }
    }
}
