/// KERNAL text colour used by the screen editor.
pub const CURSOR_COLOR: u16 = 0x0286;
pub const SCREEN_RAM: u16 = 0x0400;

pub const VIC_BASE: u16 = 0xd000;
pub const VIC_MEMORY_SETUP: u16 = 0xd018;
pub const VIC_BORDER_COLOR: u16 = 0xd020;
pub const VIC_BACKGROUND_COLOR: u16 = 0xd021;

pub const COLOR_RAM: u16 = 0xd800;

pub const CIA1_BASE: u16 = 0xdc00;
/// Port A data, row select.
pub const CIA1_PORT_A: u16 = 0xdc00;
/// Port B data, column read.
pub const CIA1_PORT_B: u16 = 0xdc01;
pub const CIA1_DDR_A: u16 = 0xdc02;
pub const CIA1_DDR_B: u16 = 0xdc03;
