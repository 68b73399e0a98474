mod cell_layout;
mod color;
mod graphics_screen;
mod screen;

pub use cell_layout::{CellLayout, BLOCK_WIDTH, LEGEND_BASE, ROW_STRIDE};
pub use color::{Color, Palette};
pub use graphics_screen::GraphicsScreen;
pub use screen::{DisplayConfig, Screen, SCREEN_CELLS, SCREEN_COLUMNS, SCREEN_ROWS};
pub(crate) use screen::cell_at;
