pub const ROWS: usize = 8;
pub const COLS: usize = 8;

/// Single-bit masks, `MASKS[i] == 1 << i`. Shared by rows and columns.
pub const MASKS: [u8; COLS] = {
    let mut masks = [0u8; COLS];
    let mut i = 0;
    while i < COLS {
        masks[i] = 1 << i;
        i += 1;
    }
    masks
};

/// Row-select port value that strobes `row`: its bit cleared, every other bit set.
pub const fn row_select(row: usize) -> u8 {
    !MASKS[row]
}

/// Column lines are active-low: a cleared bit means the key is down.
pub const fn is_pressed(columns: u8, col: usize) -> bool {
    columns & MASKS[col] == 0
}
