use crate::HardwareAccessError;

/// The two byte-wide ports wired to the key matrix.
pub trait MatrixPorts {
    /// Makes the row-select port an output and the column port an input.
    fn configure(&mut self) -> Result<(), HardwareAccessError>;

    fn select_row(&mut self, value: u8) -> Result<(), HardwareAccessError>;

    /// Column lines of the currently strobed row, active-low.
    fn read_columns(&mut self) -> Result<u8, HardwareAccessError>;
}
