use dicebag::{layout::window::SETTINGS_ROWS, prelude::*};
use eframe::egui;

use super::{UiAction, painter::to_color32};

/// Room one set's panel takes in the settings grid.
pub const PANEL_SIZE: egui::Vec2 = egui::vec2(330.0, 170.0);
/// Room taken by the set count row above the grid.
pub const HEADER_HEIGHT: f32 = 60.0;

const SWATCH_SIZE: egui::Vec2 = egui::vec2(48.0, 18.0);

/// Size the settings window needs to show `set_count` panels.
pub fn required_size(set_count: u32) -> ScreenSize {
    let columns = settings_columns(set_count).max(1);
    let rows = set_count.clamp(1, SETTINGS_ROWS);
    ScreenSize::new(
        columns as f32 * PANEL_SIZE.x,
        rows as f32 * PANEL_SIZE.y + HEADER_HEIGHT,
    )
}

pub struct SettingsApp {
    pub set_count: u32,
}

impl Default for SettingsApp {
    fn default() -> Self {
        Self {
            set_count: SET_COUNT.lower,
        }
    }
}

impl SettingsApp {
    pub fn header_ui(&mut self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.label(format!(
            "Number of sets ({}-{}):",
            SET_COUNT.lower, SET_COUNT.upper
        ));
        ui.add(egui::DragValue::new(&mut self.set_count).range(SET_COUNT.range()));
        if ui.button("Next").clicked() {
            actions.push(UiAction::CommitSetCount(self.set_count));
        }
        ui.separator();
        // an empty store is reported by the controller, not hidden here
        if ui.button("Confirm Settings").clicked() {
            actions.push(UiAction::Confirm);
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        controller: &mut ViewController,
        actions: &mut Vec<UiAction>,
    ) {
        let set_count = controller.store().len();
        if set_count == 0 {
            ui.label("Choose how many sets to roll, then click 'Next'.");
            return;
        }

        let columns = settings_columns(set_count as u32);
        let rows = (set_count as u32).min(SETTINGS_ROWS);

        egui::ScrollArea::both().show(ui, |ui| {
            egui::Grid::new("settings_grid")
                .spacing([12.0, 12.0])
                .show(ui, |ui| {
                    for row in 0..rows {
                        for column in 0..columns {
                            let Some(id) = controller
                                .store()
                                .ids()
                                .find(|id| settings_cell(id.index()) == (row, column))
                            else {
                                ui.label("");
                                continue;
                            };
                            if let Ok(set) = controller.set_mut(id) {
                                set_panel(ui, id, set, actions);
                            }
                        }
                        ui.end_row();
                    }
                });
        });
    }
}

fn set_panel(
    ui: &mut egui::Ui,
    id: SetId,
    set: &mut DiceSetConfig,
    actions: &mut Vec<UiAction>,
) {
    ui.group(|ui| {
        ui.set_min_size(PANEL_SIZE - egui::vec2(24.0, 24.0));
        egui::Grid::new(("set_panel", id.index()))
            .num_columns(2)
            .show(ui, |ui| {
                ui.label(format!("Set {} Name:", id.index() + 1));
                ui.text_edit_singleline(&mut set.name);
                ui.end_row();

                ui.label(format!("Dice Count (max. {}):", DICE_COUNT.upper));
                let mut dice_count = set.dice_count();
                let changed = ui
                    .add(egui::DragValue::new(&mut dice_count).range(DICE_COUNT.range()))
                    .changed();
                if changed {
                    if let Err(e) = set.set_dice_count(dice_count) {
                        log::warn!("{}", e);
                    }
                }
                ui.end_row();

                ui.label(format!("Sides ({}-{}):", SIDES.lower, SIDES.upper));
                let mut sides = set.sides();
                let changed = ui
                    .add(egui::DragValue::new(&mut sides).range(SIDES.range()))
                    .changed();
                if changed {
                    if let Err(e) = set.set_sides(sides) {
                        log::warn!("{}", e);
                    }
                }
                ui.end_row();

                for (label, role) in [
                    ("Dice Color:", ColorRole::Dice),
                    ("Number Color:", ColorRole::Number),
                ] {
                    ui.label(label);
                    ui.horizontal(|ui| {
                        swatch(ui, set.color(role));
                        if ui.button("Choose").clicked() {
                            actions.push(UiAction::PickColor(id, role));
                        }
                    });
                    ui.end_row();
                }
            });
    });
}

fn swatch(ui: &mut egui::Ui, color: Color) {
    let (rect, response) = ui.allocate_exact_size(SWATCH_SIZE, egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, to_color32(color));
    response.on_hover_text(color.to_hex());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_size_grows_by_column() {
        let one = required_size(1);
        assert_eq!(one, ScreenSize::new(PANEL_SIZE.x, PANEL_SIZE.y + HEADER_HEIGHT));

        let four = required_size(4);
        assert_eq!(four.width, PANEL_SIZE.x);
        assert_eq!(four.height, 4.0 * PANEL_SIZE.y + HEADER_HEIGHT);

        let nine = required_size(9);
        assert_eq!(nine.width, 3.0 * PANEL_SIZE.x);
        assert_eq!(nine.height, four.height);
    }
}
