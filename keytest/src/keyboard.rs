mod key_matrix;
mod legend;
mod masks;
mod matrix_ports;
mod pin_ports;

pub use key_matrix::{KeyMatrix, ScanResult};
pub use keytest_macros::legend;
pub use legend::{Legend, C64_LEGEND};
pub use masks::{is_pressed, row_select, COLS, MASKS, ROWS};
pub use matrix_ports::MatrixPorts;
pub use pin_ports::PinPorts;
