use core::cell::RefCell;

use crate::HardwareAccessError;

/// Byte-wide access to the 16-bit address space.
pub trait Bus {
    fn peek(&mut self, address: u16) -> Result<u8, HardwareAccessError>;

    fn poke(&mut self, address: u16, value: u8) -> Result<(), HardwareAccessError>;
}

/// Shares one bus between the CIA and VIC halves of a key tester.
impl<B: Bus> Bus for &RefCell<B> {
    fn peek(&mut self, address: u16) -> Result<u8, HardwareAccessError> {
        self.borrow_mut().peek(address)
    }

    fn poke(&mut self, address: u16, value: u8) -> Result<(), HardwareAccessError> {
        self.borrow_mut().poke(address, value)
    }
}

/// The real address space, accessed with volatile loads and stores.
#[derive(Debug, Clone, Copy)]
pub struct MemoryBus {
    _private: (),
}

impl MemoryBus {
    /// # Safety
    ///
    /// Every address this bus is asked for must be a valid register or RAM
    /// location, which holds on a C64 and nowhere else.
    pub const unsafe fn new() -> Self {
        MemoryBus { _private: () }
    }
}

impl Bus for MemoryBus {
    fn peek(&mut self, address: u16) -> Result<u8, HardwareAccessError> {
        // SAFETY: guaranteed by the contract of `MemoryBus::new`.
        Ok(unsafe { core::ptr::read_volatile(usize::from(address) as *const u8) })
    }

    fn poke(&mut self, address: u16, value: u8) -> Result<(), HardwareAccessError> {
        // SAFETY: guaranteed by the contract of `MemoryBus::new`.
        unsafe { core::ptr::write_volatile(usize::from(address) as *mut u8, value) };
        Ok(())
    }
}
