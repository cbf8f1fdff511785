//! Window-level arrangement: how sets are placed in the settings and results
//! views, and how big the window should be for each.

use serde::{Deserialize, Serialize};

use crate::layout::dice::CellGeometry;

/// A width/height pair in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Space left free around the results window.
pub const RESULTS_MARGIN: ScreenSize = ScreenSize {
    width: 50.0,
    height: 100.0,
};

/// Result cells stack at most this many per column.
pub const RESULTS_ROWS: u32 = 3;

/// Settings panels stack at most this many per column.
pub const SETTINGS_ROWS: u32 = 4;

/// Arrangement of result cells, filled column by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsGrid {
    pub rows: u32,
    pub columns: u32,
    pub set_count: u32,
}

impl ResultsGrid {
    /// Returns `None` for zero sets.
    pub fn for_sets(set_count: u32) -> Option<Self> {
        if set_count == 0 {
            return None;
        }
        Some(Self {
            rows: set_count.min(RESULTS_ROWS),
            columns: set_count.div_ceil(RESULTS_ROWS),
            set_count,
        })
    }

    /// The window size the results view asks for on a screen of `screen`.
    pub fn window_size(screen: ScreenSize) -> ScreenSize {
        ScreenSize::new(
            (screen.width - RESULTS_MARGIN.width).max(1.0),
            (screen.height - RESULTS_MARGIN.height).max(1.0),
        )
    }

    pub fn cell_geometry(&self, window: ScreenSize) -> CellGeometry {
        CellGeometry::new(
            window.width / self.columns as f32,
            window.height / self.rows as f32,
        )
    }

    /// `(row, column)` of the set at `index`.
    pub fn cell_position(&self, index: usize) -> (u32, u32) {
        let index = index as u32;
        (index % RESULTS_ROWS, index / RESULTS_ROWS)
    }
}

/// `(row, column)` of the settings panel for the set at `index`.
pub fn settings_cell(index: usize) -> (u32, u32) {
    let index = index as u32;
    (index % SETTINGS_ROWS, index / SETTINGS_ROWS)
}

/// Number of settings columns needed for `set_count` panels.
pub fn settings_columns(set_count: u32) -> u32 {
    set_count.div_ceil(SETTINGS_ROWS)
}

/// Window size for the settings view: large enough for `required`, but kept
/// on screen.
pub fn settings_window_size(screen: ScreenSize, required: ScreenSize) -> ScreenSize {
    let max_width = screen.width - 50.0;
    let max_height = screen.height - 100.0;

    let width = if required.width > max_width {
        screen.width - 20.0
    } else {
        max_width.min(required.width + 20.0)
    };
    let height = if required.height > max_height {
        screen.height - 50.0
    } else {
        max_height.min(required.height + 20.0)
    };

    ScreenSize::new(width, height)
}
