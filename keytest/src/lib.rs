#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod c64;
pub mod controller;
pub mod display;
pub mod error;
pub mod keyboard;
pub mod sim;

pub use controller::{CancellationToken, KeyTester, KeyTesterConfig};
pub use error::HardwareAccessError;
