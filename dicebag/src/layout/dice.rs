//! Packing a set's dice into the cell that displays it.
//!
//! Dice fill rows of at most six, and every die is the same square size:
//! the largest that fits both the horizontal budget (90% of the cell width)
//! and the vertical budget (half of the cell height, leaving room for the
//! total label beneath the grid).

use serde::{Deserialize, Serialize};

use crate::{error::DiceError, rules::bounds::DICE_COUNT};

/// Pixel size of the region allotted to one set's results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellGeometry {
    pub width: f32,
    pub height: f32,
}

impl CellGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Grid shape and die size for a given cell and dice count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DieLayout {
    pub rows: u32,
    pub columns: u32,
    pub die_size: f32,
    pub dice_count: u32,
}

/// One position in a [`DieLayout`] grid, in pixels relative to the grid's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieSlot {
    pub index: usize,
    pub row: u32,
    pub column: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Surplus slot left over from rectangular packing.
    pub hidden: bool,
}

impl DieLayout {
    pub const MAX_DICE_PER_ROW: u32 = 6;
    pub const WIDTH_FACTOR: f32 = 0.9;
    pub const HEIGHT_FACTOR: f32 = 0.5;

    pub fn compute(cell: CellGeometry, dice_count: u32) -> Result<Self, DiceError> {
        let dice_count = DICE_COUNT.check(dice_count)?;
        if !cell.is_drawable() {
            return Err(DiceError::InvalidCellGeometry {
                width: cell.width,
                height: cell.height,
            });
        }

        let columns = dice_count.min(Self::MAX_DICE_PER_ROW);
        let rows = dice_count.div_ceil(Self::MAX_DICE_PER_ROW);
        // subnormal cells would otherwise round down to nothing
        let die_size = f32::min(
            cell.width * Self::WIDTH_FACTOR / columns as f32,
            cell.height * Self::HEIGHT_FACTOR / rows as f32,
        )
        .max(f32::MIN_POSITIVE);

        log::trace!(
            "Laid out {} dice as {}x{} at {:.1}px in {:.0}x{:.0}",
            dice_count,
            columns,
            rows,
            die_size,
            cell.width,
            cell.height
        );

        Ok(Self {
            rows,
            columns,
            die_size,
            dice_count,
        })
    }

    pub fn slot_count(&self) -> u32 {
        self.rows * self.columns
    }

    pub fn hidden_slots(&self) -> u32 {
        self.slot_count() - self.dice_count
    }

    pub fn grid_width(&self) -> f32 {
        self.columns as f32 * self.die_size
    }

    pub fn grid_height(&self) -> f32 {
        self.rows as f32 * self.die_size
    }

    /// All slots in row-major order; the first `dice_count` are visible.
    pub fn slots(&self) -> impl Iterator<Item = DieSlot> + '_ {
        (0..self.slot_count()).map(move |i| {
            let row = i / self.columns;
            let column = i % self.columns;
            DieSlot {
                index: i as usize,
                row,
                column,
                x: column as f32 * self.die_size,
                y: row as f32 * self.die_size,
                size: self.die_size,
                hidden: i >= self.dice_count,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_dice_one_row() -> anyhow::Result<()> {
        let layout = DieLayout::compute(CellGeometry::new(600.0, 400.0), 4)?;
        assert_eq!((layout.columns, layout.rows), (4, 1));
        assert_eq!(layout.hidden_slots(), 0);
        // width budget 540/4 = 135, height budget 200/1 = 200
        assert_eq!(layout.die_size, 135.0);
        Ok(())
    }

    #[test]
    fn test_eight_dice_two_rows() -> anyhow::Result<()> {
        let layout = DieLayout::compute(CellGeometry::new(600.0, 400.0), 8)?;
        assert_eq!((layout.columns, layout.rows), (6, 2));
        assert_eq!(layout.hidden_slots(), 4);

        let hidden: Vec<_> = layout.slots().filter(|s| s.hidden).collect();
        assert_eq!(hidden.len(), 4);
        assert!(hidden.iter().all(|s| s.row == 1 && s.column >= 2));
        Ok(())
    }

    #[test]
    fn test_height_bound_wins_in_flat_cells() -> anyhow::Result<()> {
        let layout = DieLayout::compute(CellGeometry::new(2000.0, 100.0), 12)?;
        assert_eq!(layout.die_size, 25.0);
        assert!(layout.grid_height() <= 100.0 * DieLayout::HEIGHT_FACTOR);
        assert!(layout.grid_width() <= 2000.0 * DieLayout::WIDTH_FACTOR);
        Ok(())
    }

    #[test]
    fn test_grid_properties_hold_for_all_counts() -> anyhow::Result<()> {
        for (w, h) in [(1.0, 1.0), (0.01, 500.0), (1920.0, 1080.0), (300.0, 90.0)] {
            for dice_count in 1..=12 {
                let layout = DieLayout::compute(CellGeometry::new(w, h), dice_count)?;
                assert!(layout.slot_count() >= dice_count);
                assert!(layout.columns <= 6);
                assert!(layout.die_size > 0.0);
                assert_eq!(layout.hidden_slots(), layout.slot_count() - dice_count);
                assert_eq!(
                    layout.slots().filter(|s| !s.hidden).count(),
                    dice_count as usize
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_slots_tile_the_grid() -> anyhow::Result<()> {
        let layout = DieLayout::compute(CellGeometry::new(600.0, 400.0), 7)?;
        let slots: Vec<_> = layout.slots().collect();
        assert_eq!(slots[6].row, 1);
        assert_eq!(slots[6].column, 0);
        assert_eq!(slots[6].y, layout.die_size);
        assert_eq!(slots[5].x, 5.0 * layout.die_size);
        Ok(())
    }

    #[test]
    fn test_rejects_degenerate_input() {
        let cell = CellGeometry::new(600.0, 400.0);
        for dice_count in [0, 13, u32::MAX] {
            assert!(matches!(
                DieLayout::compute(cell, dice_count),
                Err(DiceError::InvalidInput { .. })
            ));
        }
        for bad in [
            CellGeometry::new(0.0, 400.0),
            CellGeometry::new(600.0, -1.0),
            CellGeometry::new(f32::NAN, 400.0),
        ] {
            assert!(matches!(
                DieLayout::compute(bad, 3),
                Err(DiceError::InvalidCellGeometry { .. })
            ));
        }
    }

    #[test]
    fn test_tiny_cells_still_get_a_die_size() -> anyhow::Result<()> {
        for cell in [CellGeometry::new(1e-45, 1.0), CellGeometry::new(1.0, 1e-45)] {
            let layout = DieLayout::compute(cell, 6)?;
            assert!(layout.die_size > 0.0);
        }
        Ok(())
    }
}
