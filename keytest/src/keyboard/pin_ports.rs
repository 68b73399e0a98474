use embedded_hal::digital::{InputPin, OutputPin, PinState};

use super::{MatrixPorts, COLS, MASKS, ROWS};
use crate::HardwareAccessError;

/// Row-select and column ports built from individual GPIO pins.
///
/// Bit `i` of the row-select value drives `rows[i]`; bit `i` of the column
/// value is the level of `cols[i]`. Columns should be pulled up so that an
/// idle line reads high.
pub struct PinPorts<O: OutputPin, I: InputPin> {
    rows: [O; ROWS],
    cols: [I; COLS],
}

impl<O: OutputPin, I: InputPin> PinPorts<O, I> {
    pub fn new(rows: [O; ROWS], cols: [I; COLS]) -> Self {
        PinPorts { rows, cols }
    }

    pub fn release(self) -> ([O; ROWS], [I; COLS]) {
        (self.rows, self.cols)
    }
}

impl<O: OutputPin, I: InputPin> MatrixPorts for PinPorts<O, I> {
    fn configure(&mut self) -> Result<(), HardwareAccessError> {
        // every row inactive until the first strobe
        for pin in self.rows.iter_mut() {
            pin.set_high().map_err(|_| HardwareAccessError::Pin)?;
        }
        Ok(())
    }

    fn select_row(&mut self, value: u8) -> Result<(), HardwareAccessError> {
        for (pin, mask) in self.rows.iter_mut().zip(MASKS) {
            pin.set_state(PinState::from(value & mask != 0))
                .map_err(|_| HardwareAccessError::Pin)?;
        }
        Ok(())
    }

    fn read_columns(&mut self) -> Result<u8, HardwareAccessError> {
        let mut value = 0;
        for (pin, mask) in self.cols.iter_mut().zip(MASKS) {
            if pin.is_high().map_err(|_| HardwareAccessError::Pin)? {
                value |= mask;
            }
        }
        Ok(value)
    }
}
