use super::Color;
use crate::HardwareAccessError;

pub const SCREEN_COLUMNS: u16 = 40;
pub const SCREEN_ROWS: u16 = 25;
pub const SCREEN_CELLS: u16 = SCREEN_COLUMNS * SCREEN_ROWS;

/// One-time display setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Raw VIC-II memory setup value; 21 selects the uppercase/graphics set.
    pub charset: u8,
    pub cursor: Color,
    pub background: Color,
    pub border: Color,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            charset: 21,
            cursor: Color::White,
            background: Color::Black,
            border: Color::Gray,
        }
    }
}

/// A 40×25 character display with a colour per cell. Positions and offsets
/// are linear, row-major cell indices.
pub trait Screen {
    fn configure(&mut self, config: &DisplayConfig) -> Result<(), HardwareAccessError>;

    /// Blanks every cell and resets its colour to the cursor colour.
    fn clear(&mut self) -> Result<(), HardwareAccessError>;

    /// Prints `text` in the cursor colour starting at `position`, without wrapping.
    fn put_str(&mut self, position: u16, text: &str) -> Result<(), HardwareAccessError>;

    fn set_cell_color(&mut self, offset: u16, color: Color) -> Result<(), HardwareAccessError>;
}

/// Cell index of the `index`th character printed from `position`, if on screen.
pub(crate) fn cell_at(position: u16, index: usize) -> Result<u16, HardwareAccessError> {
    let offset = usize::from(position) + index;
    match u16::try_from(offset) {
        Ok(offset) if offset < SCREEN_CELLS => Ok(offset),
        _ => Err(HardwareAccessError::CellOutOfRange {
            offset: u16::try_from(offset).unwrap_or(u16::MAX),
        }),
    }
}
