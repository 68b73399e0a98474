use super::{registers::*, Bus};
use crate::{keyboard::MatrixPorts, HardwareAccessError};

/// CIA1 ports A and B as the keyboard matrix ports.
pub struct Cia1<B: Bus> {
    bus: B,
}

impl<B: Bus> Cia1<B> {
    pub fn new(bus: B) -> Self {
        Cia1 { bus }
    }
}

impl<B: Bus> MatrixPorts for Cia1<B> {
    fn configure(&mut self) -> Result<(), HardwareAccessError> {
        self.bus.poke(CIA1_DDR_A, 0xff)?;
        self.bus.poke(CIA1_DDR_B, 0x00)
    }

    fn select_row(&mut self, value: u8) -> Result<(), HardwareAccessError> {
        self.bus.poke(CIA1_PORT_A, value)
    }

    fn read_columns(&mut self) -> Result<u8, HardwareAccessError> {
        self.bus.peek(CIA1_PORT_B)
    }
}
