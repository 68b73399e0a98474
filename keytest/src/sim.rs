//! Simulated hardware for running the scanner without a machine attached.

use core::ops::Range;

use heapless::{HistoryBuffer, String, Vec};

use crate::{
    c64::{registers::*, Bus},
    display::{cell_at, Color, DisplayConfig, Screen, SCREEN_CELLS},
    keyboard::{MatrixPorts, MASKS, ROWS},
    HardwareAccessError,
};

/// Which switches of the matrix are closed, as active-low column bytes per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixState {
    rows: [u8; ROWS],
}

impl MatrixState {
    pub const fn released() -> Self {
        MatrixState { rows: [0xff; ROWS] }
    }

    pub const fn from_rows(rows: [u8; ROWS]) -> Self {
        MatrixState { rows }
    }

    pub fn press(&mut self, row: usize, col: usize) {
        self.rows[row] &= !MASKS[col];
    }

    pub fn release(&mut self, row: usize, col: usize) {
        self.rows[row] |= MASKS[col];
    }

    pub fn set_row(&mut self, row: usize, columns: u8) {
        self.rows[row] = columns;
    }

    /// Column lines seen with `strobe` on the row-select lines. Every row
    /// whose bit is cleared can pull columns low; with none selected the
    /// lines float high.
    pub fn columns(&self, strobe: u8) -> u8 {
        self.rows
            .iter()
            .zip(MASKS)
            .filter(|(_, mask)| strobe & mask == 0)
            .fold(0xff, |acc, (columns, _)| acc & columns)
    }
}

impl Default for MatrixState {
    fn default() -> Self {
        Self::released()
    }
}

/// Matrix ports backed by a [`MatrixState`], remembering the last pass of strobes.
pub struct SimulatedMatrix {
    pub state: MatrixState,
    configured: bool,
    strobe: u8,
    strobes: HistoryBuffer<u8, ROWS>,
}

impl SimulatedMatrix {
    pub fn new() -> Self {
        Self::with_state(MatrixState::released())
    }

    pub fn with_state(state: MatrixState) -> Self {
        SimulatedMatrix {
            state,
            configured: false,
            strobe: 0xff,
            strobes: HistoryBuffer::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// The last `ROWS` values written to the row-select port.
    pub fn strobes(&self) -> &HistoryBuffer<u8, ROWS> {
        &self.strobes
    }
}

impl Default for SimulatedMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixPorts for SimulatedMatrix {
    fn configure(&mut self) -> Result<(), HardwareAccessError> {
        self.configured = true;
        Ok(())
    }

    fn select_row(&mut self, value: u8) -> Result<(), HardwareAccessError> {
        self.strobe = value;
        self.strobes.write(value);
        Ok(())
    }

    fn read_columns(&mut self) -> Result<u8, HardwareAccessError> {
        Ok(self.state.columns(self.strobe))
    }
}

/// Text and colour cells held in memory.
#[derive(Debug, Clone)]
pub struct SimulatedScreen {
    config: Option<DisplayConfig>,
    text: [char; SCREEN_CELLS as usize],
    colors: [Color; SCREEN_CELLS as usize],
    color_writes: usize,
}

impl SimulatedScreen {
    pub fn new() -> Self {
        SimulatedScreen {
            config: None,
            text: [' '; SCREEN_CELLS as usize],
            colors: [Color::Black; SCREEN_CELLS as usize],
            color_writes: 0,
        }
    }

    pub fn config(&self) -> Option<&DisplayConfig> {
        self.config.as_ref()
    }

    pub fn color_at(&self, offset: u16) -> Option<Color> {
        self.colors.get(usize::from(offset)).copied()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of `set_cell_color` calls so far.
    pub fn color_writes(&self) -> usize {
        self.color_writes
    }

    /// The 40 characters of screen line `line`.
    pub fn line(&self, line: u16) -> String<160> {
        let start = usize::from(line) * 40;
        self.text
            .get(start..start + 40)
            .unwrap_or_default()
            .iter()
            .copied()
            .collect()
    }

    fn cursor(&self) -> Color {
        self.config.unwrap_or_default().cursor
    }
}

impl Default for SimulatedScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SimulatedScreen {
    fn configure(&mut self, config: &DisplayConfig) -> Result<(), HardwareAccessError> {
        self.config = Some(*config);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), HardwareAccessError> {
        let cursor = self.cursor();
        self.text.fill(' ');
        self.colors.fill(cursor);
        Ok(())
    }

    fn put_str(&mut self, position: u16, text: &str) -> Result<(), HardwareAccessError> {
        let cursor = self.cursor();
        for (i, ch) in text.chars().enumerate() {
            let offset = usize::from(cell_at(position, i)?);
            self.text[offset] = ch;
            self.colors[offset] = cursor;
        }
        Ok(())
    }

    fn set_cell_color(&mut self, offset: u16, color: Color) -> Result<(), HardwareAccessError> {
        let offset = cell_at(offset, 0)?;
        self.colors[usize::from(offset)] = color;
        self.color_writes += 1;
        Ok(())
    }
}

/// The C64 regions the key tester touches.
pub const C64_MAPPED: [Range<u16>; 5] = [
    CURSOR_COLOR..CURSOR_COLOR + 1,
    SCREEN_RAM..SCREEN_RAM + SCREEN_CELLS,
    VIC_BASE..VIC_BASE + 0x2f,
    COLOR_RAM..COLOR_RAM + SCREEN_CELLS,
    CIA1_BASE..CIA1_BASE + 0x10,
];

const MAX_REGIONS: usize = 8;

/// A 64 KiB address space where only some regions answer.
///
/// Reads of CIA1 port B come from `matrix`, strobed by the port A bits
/// configured as outputs. Colour RAM keeps only its low nibble.
pub struct SimulatedBus {
    memory: [u8; 0x10000],
    mapped: Vec<Range<u16>, MAX_REGIONS>,
    pub matrix: MatrixState,
}

impl SimulatedBus {
    pub fn new() -> Self {
        Self::with_mapped(&C64_MAPPED)
    }

    /// Only the first eight regions are kept.
    pub fn with_mapped(regions: &[Range<u16>]) -> Self {
        SimulatedBus {
            memory: [0; 0x10000],
            mapped: regions.iter().take(MAX_REGIONS).cloned().collect(),
            matrix: MatrixState::released(),
        }
    }

    /// Raw memory contents, bypassing the mapping.
    pub fn memory(&self, address: u16) -> u8 {
        self.memory[usize::from(address)]
    }

    fn check(&self, address: u16) -> Result<usize, HardwareAccessError> {
        if self.mapped.iter().any(|region| region.contains(&address)) {
            Ok(usize::from(address))
        } else {
            Err(HardwareAccessError::UnmappedAddress { address })
        }
    }
}

impl Default for SimulatedBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SimulatedBus {
    fn peek(&mut self, address: u16) -> Result<u8, HardwareAccessError> {
        let index = self.check(address)?;
        if address == CIA1_PORT_B {
            // input lines are undriven outside the DDRA output bits
            let strobe = self.memory(CIA1_PORT_A) | !self.memory(CIA1_DDR_A);
            return Ok(self.matrix.columns(strobe));
        }
        Ok(self.memory[index])
    }

    fn poke(&mut self, address: u16, value: u8) -> Result<(), HardwareAccessError> {
        let index = self.check(address)?;
        self.memory[index] = if (COLOR_RAM..COLOR_RAM + SCREEN_CELLS).contains(&address) {
            value & 0x0f
        } else {
            value
        };
        Ok(())
    }
}
