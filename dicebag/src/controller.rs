use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    color::{ColorRole, PickedColor},
    config::{DiceSetConfig, SetConfigStore, SetId},
    error::DiceError,
    layout::{
        dice::{CellGeometry, DieLayout},
        window::{ResultsGrid, ScreenSize},
    },
    render::roll::RollDrawing,
    roller::Roller,
    rules::dice::RollResult,
    surface::DisplaySurface,
};

pub type Timestamp = chrono::DateTime<chrono::Utc>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Configuring,
    Viewing,
}

/// Geometry of the results view, fixed when it is entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultsView {
    pub grid: ResultsGrid,
    pub window: ScreenSize,
    pub cell: CellGeometry,
}

/// The latest roll of one set and its rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RolledSet {
    pub result: RollResult,
    pub drawing: RollDrawing,
    pub rolled_at: Timestamp,
}

/// A roll flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    pub set_name: String,
    pub sides: u32,
    pub values: Vec<u32>,
    pub total: u32,
    pub rolled_at: Timestamp,
}

impl RolledSet {
    pub fn record(&self, set_name: &str) -> RollRecord {
        RollRecord {
            set_name: set_name.to_string(),
            sides: self.result.sides,
            values: self.result.values.clone(),
            total: self.result.total(),
            rolled_at: self.rolled_at,
        }
    }
}

/// Owns the session: the configured sets, which view is showing, and the
/// latest rendering of every rolled set.
///
/// Every operation either succeeds or returns an error with the controller
/// left exactly as it was.
#[derive(Debug)]
pub struct ViewController {
    mode: ViewMode,
    store: SetConfigStore,
    roller: Roller,
    results: Option<ResultsView>,
    rolls: BTreeMap<SetId, RolledSet>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(Roller::new())
    }
}

impl ViewController {
    pub fn new(roller: Roller) -> Self {
        Self {
            mode: ViewMode::Configuring,
            store: SetConfigStore::new(),
            roller,
            results: None,
            rolls: BTreeMap::new(),
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn store(&self) -> &SetConfigStore {
        &self.store
    }

    pub fn set(&self, id: SetId) -> Result<&DiceSetConfig, DiceError> {
        self.store.get(id)
    }

    pub fn set_mut(&mut self, id: SetId) -> Result<&mut DiceSetConfig, DiceError> {
        self.store.get_mut(id)
    }

    pub fn results(&self) -> Option<&ResultsView> {
        self.results.as_ref()
    }

    pub fn last_roll(&self, id: SetId) -> Option<&RolledSet> {
        self.rolls.get(&id)
    }

    fn expect_mode(&self, expected: ViewMode) -> Result<(), DiceError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(DiceError::WrongMode {
                expected,
                actual: self.mode,
            })
        }
    }

    /// Discards every set and starts over with `count` fresh ones.
    pub fn commit_set_count(&mut self, count: u32) -> Result<(), DiceError> {
        self.expect_mode(ViewMode::Configuring)?;
        self.store.reconfigure(count)?;
        self.rolls.clear();
        self.results = None;
        log::info!("Configured {} dice sets", count);
        Ok(())
    }

    /// Stores a color picker's answer for one of a set's colors.
    pub fn apply_color(
        &mut self,
        id: SetId,
        role: ColorRole,
        picked: PickedColor,
    ) -> Result<(), DiceError> {
        let set = self.store.get_mut(id)?;
        set.apply_picked(role, picked);
        log::debug!("Set {} {:?} color is now {}", id, role, set.color(role));
        Ok(())
    }

    /// Switches to the results view, sizing one cell per set from the
    /// surface's screen.
    pub fn confirm(&mut self, surface: &mut impl DisplaySurface) -> Result<&ResultsView, DiceError> {
        self.expect_mode(ViewMode::Configuring)?;
        let grid = ResultsGrid::for_sets(self.store.len() as u32)
            .ok_or(DiceError::NoSetsConfigured)?;

        let window = ResultsGrid::window_size(surface.screen_size());
        surface.request_size(window);
        let cell = grid.cell_geometry(window);

        log::info!(
            "Showing results for {} sets in a {}x{} grid, {:.0}x{:.0} per cell",
            grid.set_count,
            grid.columns,
            grid.rows,
            cell.width,
            cell.height
        );

        self.rolls.clear();
        self.mode = ViewMode::Viewing;
        Ok(&*self.results.insert(ResultsView { grid, window, cell }))
    }

    /// Returns to the configuration view. Sets are left as they were.
    pub fn back(&mut self) -> Result<(), DiceError> {
        self.expect_mode(ViewMode::Viewing)?;
        self.mode = ViewMode::Configuring;
        log::info!("Back to configuration");
        Ok(())
    }

    /// `(row, column)` of a set's cell in the results view.
    pub fn results_cell(&self, id: SetId) -> Result<(u32, u32), DiceError> {
        self.store.get(id)?;
        let results = self.results.as_ref().ok_or(DiceError::WrongMode {
            expected: ViewMode::Viewing,
            actual: self.mode,
        })?;
        Ok(results.grid.cell_position(id.index()))
    }

    /// Rolls one set and replaces its previous rendering. Other sets are not
    /// touched.
    pub fn roll(&mut self, id: SetId) -> Result<&RolledSet, DiceError> {
        self.expect_mode(ViewMode::Viewing)?;
        let Some(results) = self.results else {
            return Err(DiceError::NoSetsConfigured);
        };
        let set = self.store.get(id)?;

        let plan = set.plan()?;
        let layout = DieLayout::compute(results.cell, plan.dice_count())?;
        let result = plan.roll(&mut self.roller);
        let drawing = RollDrawing::new(&result, &layout, set.dice_color, set.number_color);

        log::info!(
            "Set {} ({}) rolled {}d{}: {:?}{}",
            id,
            set.name,
            plan.dice_count(),
            plan.sides(),
            result.values,
            drawing
                .total_label
                .as_ref()
                .map(|l| format!(", {}", l))
                .unwrap_or_default()
        );

        let rolled = RolledSet {
            result,
            drawing,
            rolled_at: chrono::Utc::now(),
        };
        self.rolls.insert(id, rolled);
        self.rolls.get(&id).ok_or(DiceError::UnknownSet(id))
    }
}
