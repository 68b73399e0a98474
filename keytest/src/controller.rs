use core::sync::atomic::{AtomicBool, Ordering};

use crate::{
    display::{CellLayout, DisplayConfig, Palette, Screen},
    fmt::{debug, info, warn},
    keyboard::{is_pressed, KeyMatrix, Legend, MatrixPorts, ScanResult, C64_LEGEND, COLS, ROWS},
    HardwareAccessError,
};

#[derive(Debug, Clone, Copy)]
pub struct KeyTesterConfig {
    pub display: DisplayConfig,
    pub palette: Palette,
    pub layout: CellLayout,
    /// Printed on the first screen line.
    pub title: &'static str,
    pub legend: &'static Legend,
}

impl Default for KeyTesterConfig {
    fn default() -> Self {
        KeyTesterConfig {
            display: DisplayConfig::default(),
            palette: Palette::default(),
            layout: CellLayout::default(),
            title: "keyboard test!",
            legend: &C64_LEGEND,
        }
    }
}

/// Stops [`KeyTester::run_until`] at the next pass boundary.
#[derive(Debug, Default)]
pub struct CancellationToken(AtomicBool);

impl CancellationToken {
    pub const fn new() -> Self {
        CancellationToken(AtomicBool::new(false))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Polls the key matrix and paints one colour block per key.
pub struct KeyTester<P: MatrixPorts, S: Screen> {
    pub key_matrix: KeyMatrix<P>,
    pub screen: S,
    config: KeyTesterConfig,
}

impl<P: MatrixPorts, S: Screen> KeyTester<P, S> {
    pub fn new(ports: P, screen: S, config: KeyTesterConfig) -> Self {
        KeyTester {
            key_matrix: KeyMatrix::new(ports),
            screen,
            config,
        }
    }

    pub fn config(&self) -> &KeyTesterConfig {
        &self.config
    }

    /// Configures ports and display, then draws the title and the legend.
    pub fn init(&mut self) -> Result<(), HardwareAccessError> {
        self.key_matrix.configure()?;
        self.screen.configure(&self.config.display)?;
        self.screen.clear()?;
        self.screen.put_str(0, self.config.title)?;
        for (row, labels) in self.config.legend.iter().enumerate() {
            for (col, label) in labels.iter().enumerate() {
                let position = self.config.layout.block_offset(row, col);
                self.screen.put_str(position, label)?;
            }
        }
        info!("key matrix test ready");
        Ok(())
    }

    /// Strobes rows 0..7 once, painting each row's blocks right after reading it.
    pub fn scan_pass(&mut self) -> Result<ScanResult, HardwareAccessError> {
        let mut rows = [0xff; ROWS];
        for (row, snapshot) in rows.iter_mut().enumerate() {
            let columns = self.key_matrix.scan_row(row)?;
            self.paint_row(row, columns)?;
            *snapshot = columns;
        }
        let result = ScanResult::new(rows);
        for (row, col) in result.pressed() {
            debug!("{} down at row {} col {}", self.config.legend[row][col], row, col);
        }
        Ok(result)
    }

    fn paint_row(&mut self, row: usize, columns: u8) -> Result<(), HardwareAccessError> {
        for col in 0..COLS {
            let color = self.config.palette.select(is_pressed(columns, col));
            for offset in self.config.layout.block_cells(row, col) {
                self.screen.set_cell_color(offset, color)?;
            }
        }
        Ok(())
    }

    /// Scans `passes` times and returns the last result.
    pub fn run_passes(&mut self, passes: usize) -> Result<Option<ScanResult>, HardwareAccessError> {
        let mut last = None;
        for _ in 0..passes {
            last = Some(self.scan_pass()?);
        }
        Ok(last)
    }

    /// Scans until `token` is cancelled, checking it before every pass.
    /// Returns the number of completed passes.
    pub fn run_until(&mut self, token: &CancellationToken) -> Result<usize, HardwareAccessError> {
        let mut passes = 0;
        while !token.is_cancelled() {
            self.scan_pass()?;
            passes += 1;
        }
        info!("scan cancelled after {} passes", passes);
        Ok(passes)
    }

    /// Scans back to back with no pacing, for as long as the machine runs.
    pub fn run_forever(mut self) -> ! {
        loop {
            if let Err(e) = self.scan_pass() {
                warn!("scan failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use proptest::prelude::*;

    use super::*;
    use crate::{
        c64::{self, registers::COLOR_RAM},
        display::{Color, BLOCK_WIDTH, SCREEN_CELLS},
        keyboard::{row_select, MASKS},
        sim::{MatrixState, SimulatedBus, SimulatedMatrix, SimulatedScreen},
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn tester(state: MatrixState) -> KeyTester<SimulatedMatrix, SimulatedScreen> {
        init_logger();
        let mut tester = KeyTester::new(
            SimulatedMatrix::with_state(state),
            SimulatedScreen::new(),
            KeyTesterConfig::default(),
        );
        tester.init().unwrap();
        tester
    }

    fn block_colors(screen: &SimulatedScreen, row: usize, col: usize) -> Vec<Color> {
        CellLayout::default()
            .block_cells(row, col)
            .map(|offset| screen.color_at(offset).unwrap())
            .collect()
    }

    fn grid(screen: &SimulatedScreen) -> Vec<Color> {
        (0..ROWS)
            .flat_map(|row| (0..COLS).flat_map(move |col| block_colors(screen, row, col)))
            .collect()
    }

    #[test]
    fn init_draws_title_and_legend() {
        let tester = tester(MatrixState::released());
        let screen = &tester.screen;

        assert!(tester.key_matrix.ports().is_configured());
        assert_eq!(screen.config(), Some(&DisplayConfig::default()));
        assert_eq!(screen.line(0).trim_end(), "keyboard test!");
        assert_eq!(screen.line(1).trim_end(), "");
        assert_eq!(
            screen.line(2).trim_end(),
            "del  ret  lrc  f7   f1   f3   f5   udc"
        );
        assert_eq!(
            screen.line(8).trim_end(),
            "£    *    ;    hom  rsh  =    ↑    /"
        );
        assert_eq!(
            screen.line(9).trim_end(),
            "1    ←    ctr  2    spc  c=   q    run"
        );
        assert_eq!(screen.line(10).trim_end(), "");
    }

    #[test]
    fn only_the_pressed_block_is_highlighted() {
        let mut state = MatrixState::released();
        state.set_row(3, 0xff & !MASKS[5]);
        let mut tester = tester(state);
        tester.scan_pass().unwrap();

        for row in 0..ROWS {
            for col in 0..COLS {
                let expected = if (row, col) == (3, 5) {
                    Color::LightRed
                } else {
                    Color::White
                };
                assert_eq!(block_colors(&tester.screen, row, col), vec![expected; 5]);
            }
        }
        assert_eq!(tester.screen.color_at(80 + 3 * 40 + 25), Some(Color::LightRed));
        assert_eq!(tester.screen.color_at(80 + 3 * 40 + 30), Some(Color::White));
    }

    #[test]
    fn scan_pass_reports_pressed_keys_by_label() {
        let mut state = MatrixState::released();
        state.press(3, 5);
        state.press(7, 4);
        let mut tester = tester(state);
        let result = tester.scan_pass().unwrap();

        let keys = result.pressed().collect::<Vec<_>>();
        assert_eq!(keys, vec![(3, 5), (7, 4)]);
        let labels = keys
            .iter()
            .map(|&(row, col)| tester.config().legend[row][col])
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["h", "spc"]);
    }

    #[test]
    fn fully_pressed_matrix_is_all_highlight() {
        let mut tester = tester(MatrixState::from_rows([0x00; ROWS]));
        let result = tester.scan_pass().unwrap();

        assert_eq!(result.pressed_count(), 64);
        assert!(grid(&tester.screen).iter().all(|c| *c == Color::LightRed));
    }

    #[test]
    fn fully_released_matrix_is_all_dim() {
        let mut tester = tester(MatrixState::released());
        let result = tester.scan_pass().unwrap();

        assert_eq!(result.pressed_count(), 0);
        assert!(grid(&tester.screen).iter().all(|c| *c == Color::White));
    }

    #[test]
    fn pass_paints_exactly_the_grid() {
        let mut tester = tester(MatrixState::released());
        tester.scan_pass().unwrap();

        assert_eq!(
            tester.screen.color_writes(),
            ROWS * COLS * BLOCK_WIDTH as usize
        );
    }

    #[test]
    fn strobes_follow_row_order() {
        let mut tester = tester(MatrixState::released());
        tester.scan_pass().unwrap();

        let strobes = tester
            .key_matrix
            .ports()
            .strobes()
            .oldest_ordered()
            .copied()
            .collect::<Vec<_>>();
        let expected = (0..ROWS).map(row_select).collect::<Vec<_>>();
        assert_eq!(strobes, expected);
    }

    #[test]
    fn run_passes_returns_last_scan() {
        let mut state = MatrixState::released();
        state.press(7, 7);
        let mut tester = tester(state);

        assert_eq!(tester.run_passes(0).unwrap(), None);
        let last = tester.run_passes(3).unwrap().unwrap();
        assert!(last.is_pressed(7, 7));
        assert_eq!(tester.screen.color_writes(), 3 * 320);
    }

    #[test]
    fn cancelled_token_runs_no_pass() {
        let mut tester = tester(MatrixState::released());
        let token = CancellationToken::new();
        token.cancel();

        assert_eq!(tester.run_until(&token).unwrap(), 0);
        assert_eq!(tester.screen.color_writes(), 0);
    }

    /// Matrix ports that cancel the token partway through a pass.
    struct CancellingPorts<'a> {
        inner: SimulatedMatrix,
        token: &'a CancellationToken,
        reads: usize,
        cancel_after: usize,
    }

    impl MatrixPorts for CancellingPorts<'_> {
        fn configure(&mut self) -> Result<(), HardwareAccessError> {
            self.inner.configure()
        }

        fn select_row(&mut self, value: u8) -> Result<(), HardwareAccessError> {
            self.inner.select_row(value)
        }

        fn read_columns(&mut self) -> Result<u8, HardwareAccessError> {
            self.reads += 1;
            if self.reads == self.cancel_after {
                self.token.cancel();
            }
            self.inner.read_columns()
        }
    }

    #[test]
    fn cancellation_waits_for_the_pass_to_finish() {
        init_logger();
        let token = CancellationToken::new();
        let ports = CancellingPorts {
            inner: SimulatedMatrix::new(),
            token: &token,
            reads: 0,
            cancel_after: ROWS + 3,
        };
        let mut tester = KeyTester::new(ports, SimulatedScreen::new(), KeyTesterConfig::default());
        tester.init().unwrap();

        assert_eq!(tester.run_until(&token).unwrap(), 2);
        assert_eq!(tester.key_matrix.ports().reads, 2 * ROWS);
        assert_eq!(tester.screen.color_writes(), 2 * 320);
    }

    #[test]
    fn cancellation_from_another_thread() {
        init_logger();
        let token = CancellationToken::new();
        let mut tester = tester(MatrixState::released());

        let passes = std::thread::scope(|s| {
            s.spawn(|| {
                std::thread::sleep(std::time::Duration::from_millis(20));
                token.cancel();
            });
            tester.run_until(&token)
        })
        .unwrap();
        assert_eq!(tester.screen.color_writes(), passes * 320);
    }

    #[test]
    fn c64_backend_end_to_end() {
        init_logger();
        let bus = RefCell::new(SimulatedBus::new());
        bus.borrow_mut().matrix.press(3, 5);
        let mut tester = c64::key_tester(&bus, KeyTesterConfig::default());
        tester.init().unwrap();
        tester.scan_pass().unwrap();

        let bus = bus.borrow();
        let layout = CellLayout::default();
        for row in 0..ROWS {
            for col in 0..COLS {
                let expected = if (row, col) == (3, 5) { 10 } else { 1 };
                for offset in layout.block_cells(row, col) {
                    assert_eq!(bus.memory(COLOR_RAM + offset), expected);
                }
            }
        }
        // legend label 'r' of row 2, column 1 in screen RAM
        assert_eq!(bus.memory(0x0400 + layout.block_offset(2, 1)), 18);
    }

    #[test]
    fn c64_backend_reports_missing_cia() {
        init_logger();
        let regions = [
            0x0286..0x0287,
            0x0400..0x07e8,
            0xd000..0xd02f,
            COLOR_RAM..COLOR_RAM + SCREEN_CELLS,
        ];
        let bus = RefCell::new(SimulatedBus::with_mapped(&regions));
        let mut tester = c64::key_tester(&bus, KeyTesterConfig::default());

        assert_eq!(
            tester.init(),
            Err(HardwareAccessError::UnmappedAddress { address: 0xdc02 })
        );
        assert_eq!(
            tester.scan_pass(),
            Err(HardwareAccessError::UnmappedAddress { address: 0xdc00 })
        );
    }

    #[test]
    fn custom_palette_and_layout() {
        init_logger();
        let config = KeyTesterConfig {
            palette: Palette {
                highlight: Color::Green,
                dim: Color::DarkGray,
            },
            layout: CellLayout::new(5 * 40),
            ..KeyTesterConfig::default()
        };
        let mut state = MatrixState::released();
        state.press(0, 0);
        let mut tester = KeyTester::new(
            SimulatedMatrix::with_state(state),
            SimulatedScreen::new(),
            config,
        );
        tester.init().unwrap();
        tester.scan_pass().unwrap();

        assert_eq!(tester.screen.line(5).trim_end().get(..3), Some("del"));
        assert_eq!(tester.screen.color_at(200), Some(Color::Green));
        assert_eq!(tester.screen.color_at(205), Some(Color::DarkGray));
        // the default grid position is untouched
        assert_eq!(tester.screen.color_at(80), Some(Color::White));
        assert_eq!(tester.config().layout.base, 200);
    }

    proptest! {
        #[test]
        fn colours_follow_active_low_bits(rows in prop::array::uniform8(any::<u8>())) {
            let mut tester = tester(MatrixState::from_rows(rows));
            let result = tester.scan_pass().unwrap();

            prop_assert_eq!(result, ScanResult::new(rows));
            for row in 0..ROWS {
                for col in 0..COLS {
                    let expected = if rows[row] & MASKS[col] == 0 {
                        Color::LightRed
                    } else {
                        Color::White
                    };
                    prop_assert_eq!(block_colors(&tester.screen, row, col), vec![expected; 5]);
                }
            }
        }

        #[test]
        fn unchanged_matrix_renders_identically(rows in prop::array::uniform8(any::<u8>())) {
            let mut tester = tester(MatrixState::from_rows(rows));
            let first = tester.scan_pass().unwrap();
            let before = tester.screen.colors().to_vec();
            let second = tester.scan_pass().unwrap();

            prop_assert_eq!(first, second);
            prop_assert_eq!(tester.screen.colors(), &before[..]);
        }
    }
}
