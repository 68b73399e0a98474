use core::fmt;

/// Failure of a port, bus or display access.
///
/// Real hardware never produces these; they come from the simulated backends
/// and from drivers that can report failures (GPIO pins, draw targets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareAccessError {
    UnmappedAddress { address: u16 },
    CellOutOfRange { offset: u16 },
    Pin,
    Display,
}

impl fmt::Display for HardwareAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmappedAddress { address } => {
                write!(f, "no register mapped at ${:04x}", address)
            }
            Self::CellOutOfRange { offset } => write!(f, "screen cell {} is out of range", offset),
            Self::Pin => f.write_str("GPIO pin access failed"),
            Self::Display => f.write_str("display draw failed"),
        }
    }
}
