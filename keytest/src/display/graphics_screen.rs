use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::{Rgb565, Rgb888},
    prelude::{DrawTarget, Point, Size},
    primitives::{Primitive, PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
    Drawable,
};

use super::{screen::cell_at, Color, DisplayConfig, Screen, SCREEN_CELLS, SCREEN_COLUMNS};
use crate::HardwareAccessError;

const CELL: Size = Size::new(6, 10);

/// Character screen rendered onto an embedded-graphics draw target.
///
/// Like colour RAM, a cell's colour is the colour of the glyph in it; blank
/// cells show only the background.
pub struct GraphicsScreen<D> {
    display: D,
    config: DisplayConfig,
    text: [char; SCREEN_CELLS as usize],
    colors: [Color; SCREEN_CELLS as usize],
}

impl<D: DrawTarget<Color = Rgb565>> GraphicsScreen<D> {
    pub fn new(display: D) -> Self {
        let config = DisplayConfig::default();
        GraphicsScreen {
            display,
            config,
            text: [' '; SCREEN_CELLS as usize],
            colors: [config.cursor; SCREEN_CELLS as usize],
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn release(self) -> D {
        self.display
    }

    fn draw_cell(&mut self, offset: u16) -> Result<(), HardwareAccessError> {
        let origin = Point::new(
            (offset % SCREEN_COLUMNS) as i32 * CELL.width as i32,
            (offset / SCREEN_COLUMNS) as i32 * CELL.height as i32,
        );
        let background = rgb565(self.config.background);
        Rectangle::new(origin, CELL)
            .into_styled(PrimitiveStyle::with_fill(background))
            .draw(&mut self.display)
            .map_err(|_| HardwareAccessError::Display)?;

        let ch = self.text[offset as usize];
        if ch == ' ' {
            return Ok(());
        }
        // the font only covers ASCII
        let glyph = if ch.is_ascii() { ch } else { '?' };
        let mut buf = [0u8; 4];
        let style = MonoTextStyle::new(&FONT_6X10, rgb565(self.colors[offset as usize]));
        Text::with_baseline(glyph.encode_utf8(&mut buf), origin, style, Baseline::Top)
            .draw(&mut self.display)
            .map_err(|_| HardwareAccessError::Display)?;
        Ok(())
    }
}

impl<D: DrawTarget<Color = Rgb565>> Screen for GraphicsScreen<D> {
    fn configure(&mut self, config: &DisplayConfig) -> Result<(), HardwareAccessError> {
        // charset and border have no counterpart on a bare draw target
        self.config = *config;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), HardwareAccessError> {
        self.display
            .clear(rgb565(self.config.background))
            .map_err(|_| HardwareAccessError::Display)?;
        self.text.fill(' ');
        self.colors.fill(self.config.cursor);
        Ok(())
    }

    fn put_str(&mut self, position: u16, text: &str) -> Result<(), HardwareAccessError> {
        for (i, ch) in text.chars().enumerate() {
            let offset = cell_at(position, i)?;
            self.text[offset as usize] = ch;
            self.colors[offset as usize] = self.config.cursor;
            self.draw_cell(offset)?;
        }
        Ok(())
    }

    fn set_cell_color(&mut self, offset: u16, color: Color) -> Result<(), HardwareAccessError> {
        let offset = cell_at(offset, 0)?;
        self.colors[offset as usize] = color;
        self.draw_cell(offset)
    }
}

fn rgb565(color: Color) -> Rgb565 {
    let (r, g, b) = color.rgb();
    Rgb888::new(r, g, b).into()
}
