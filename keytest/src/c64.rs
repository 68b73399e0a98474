//! Commodore 64 backend: CIA1 drives the keyboard matrix, the VIC-II and its
//! colour RAM show the result.

mod bus;
mod cia;
pub mod registers;
mod screen_code;
mod vic;

pub use bus::{Bus, MemoryBus};
pub use cia::Cia1;
pub use screen_code::screen_code;
pub use vic::VicScreen;

use crate::{
    controller::{KeyTester, KeyTesterConfig},
    fmt::warn,
};

pub type C64KeyTester<B> = KeyTester<Cia1<B>, VicScreen<B>>;

/// Wires a key tester to CIA1 and the VIC-II on `bus`.
pub fn key_tester<B: Bus + Copy>(bus: B, config: KeyTesterConfig) -> C64KeyTester<B> {
    KeyTester::new(Cia1::new(bus), VicScreen::new(bus), config)
}

/// Firmware entry: initializes the screen and scans until the machine is reset.
pub fn run() -> ! {
    // SAFETY: this is the program's only bus handle and it is only used on a C64.
    let bus = unsafe { MemoryBus::new() };
    let mut tester = key_tester(bus, KeyTesterConfig::default());
    if let Err(e) = tester.init() {
        warn!("init failed: {}", e);
    }
    tester.run_forever()
}
