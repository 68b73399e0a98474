use super::{
    masks::{is_pressed, row_select, COLS, ROWS},
    MatrixPorts,
};
use crate::HardwareAccessError;

/// Column snapshots of one full pass, one active-low byte per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanResult {
    rows: [u8; ROWS],
}

impl ScanResult {
    pub const fn new(rows: [u8; ROWS]) -> Self {
        ScanResult { rows }
    }

    pub fn row(&self, row: usize) -> u8 {
        self.rows[row]
    }

    pub fn is_pressed(&self, row: usize, col: usize) -> bool {
        is_pressed(self.rows[row], col)
    }

    /// `(row, col)` of every pressed key, row by row.
    pub fn pressed(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..ROWS).flat_map(move |row| {
            (0..COLS)
                .filter(move |&col| self.is_pressed(row, col))
                .map(move |col| (row, col))
        })
    }

    pub fn pressed_count(&self) -> usize {
        self.rows.iter().map(|r| r.count_zeros() as usize).sum()
    }
}

/// Strobes the matrix one row at a time through a pair of [`MatrixPorts`].
pub struct KeyMatrix<P: MatrixPorts> {
    ports: P,
}

impl<P: MatrixPorts> KeyMatrix<P> {
    pub fn new(ports: P) -> Self {
        KeyMatrix { ports }
    }

    pub fn configure(&mut self) -> Result<(), HardwareAccessError> {
        self.ports.configure()
    }

    /// Selects `row` and reads its columns once. No settle delay, no debounce.
    pub fn scan_row(&mut self, row: usize) -> Result<u8, HardwareAccessError> {
        self.ports.select_row(row_select(row))?;
        self.ports.read_columns()
    }

    pub fn scan(&mut self) -> Result<ScanResult, HardwareAccessError> {
        let mut rows = [0xff; ROWS];
        for (row, columns) in rows.iter_mut().enumerate() {
            *columns = self.scan_row(row)?;
        }
        Ok(ScanResult::new(rows))
    }

    pub fn ports(&self) -> &P {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut P {
        &mut self.ports
    }
}
