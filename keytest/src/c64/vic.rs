use super::{registers::*, screen_code, Bus};
use crate::{
    display::{cell_at, Color, DisplayConfig, Screen, SCREEN_CELLS},
    HardwareAccessError,
};

/// Text screen at $0400 with colour RAM at $d800.
pub struct VicScreen<B: Bus> {
    bus: B,
    cursor: Color,
}

impl<B: Bus> VicScreen<B> {
    pub fn new(bus: B) -> Self {
        VicScreen {
            bus,
            cursor: DisplayConfig::default().cursor,
        }
    }
}

impl<B: Bus> Screen for VicScreen<B> {
    fn configure(&mut self, config: &DisplayConfig) -> Result<(), HardwareAccessError> {
        self.bus.poke(VIC_MEMORY_SETUP, config.charset)?;
        self.bus.poke(CURSOR_COLOR, config.cursor.code())?;
        self.bus.poke(VIC_BACKGROUND_COLOR, config.background.code())?;
        self.bus.poke(VIC_BORDER_COLOR, config.border.code())?;
        self.cursor = config.cursor;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), HardwareAccessError> {
        for offset in 0..SCREEN_CELLS {
            self.bus.poke(SCREEN_RAM + offset, screen_code(' '))?;
            self.bus.poke(COLOR_RAM + offset, self.cursor.code())?;
        }
        Ok(())
    }

    fn put_str(&mut self, position: u16, text: &str) -> Result<(), HardwareAccessError> {
        for (i, ch) in text.chars().enumerate() {
            let offset = cell_at(position, i)?;
            self.bus.poke(SCREEN_RAM + offset, screen_code(ch))?;
            self.bus.poke(COLOR_RAM + offset, self.cursor.code())?;
        }
        Ok(())
    }

    fn set_cell_color(&mut self, offset: u16, color: Color) -> Result<(), HardwareAccessError> {
        let offset = cell_at(offset, 0)?;
        self.bus.poke(COLOR_RAM + offset, color.code())
    }
}
