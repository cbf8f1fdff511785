use dicebag::prelude::*;
use eframe::egui;

use super::{UiAction, painter::EguiCanvas};

/// Space lost around each cell to frames and spacing.
const CELL_PADDING: f32 = 16.0;
/// Gap between neighbouring faces, as a fraction of the face size.
const FACE_GAP: f32 = 0.08;

#[derive(Default)]
pub struct ResultsApp;

impl ResultsApp {
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        controller: &ViewController,
        actions: &mut Vec<UiAction>,
    ) {
        let Some(results) = controller.results() else {
            return;
        };
        let cell = egui::vec2(
            (results.cell.width - CELL_PADDING).max(1.0),
            (results.cell.height - CELL_PADDING).max(1.0),
        );

        egui::ScrollArea::both().show(ui, |ui| {
            egui::Grid::new("results_grid")
                .spacing([0.0, 0.0])
                .show(ui, |ui| {
                    for row in 0..results.grid.rows {
                        for column in 0..results.grid.columns {
                            let id = controller.store().ids().find(|id| {
                                controller.results_cell(*id).ok() == Some((row, column))
                            });
                            match id {
                                Some(id) => cell_ui(ui, cell, id, controller, actions),
                                None => {
                                    ui.allocate_space(cell);
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        });
    }
}

fn cell_ui(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    id: SetId,
    controller: &ViewController,
    actions: &mut Vec<UiAction>,
) {
    let Ok(set) = controller.set(id) else {
        return;
    };

    ui.allocate_ui(size, |ui| {
        ui.set_min_size(size);
        ui.vertical_centered(|ui| {
            if let Some(rolled) = controller.last_roll(id) {
                paint_roll(ui, &rolled.drawing);
                if let Some(label) = &rolled.drawing.total_label {
                    ui.label(egui::RichText::new(label).strong().size(16.0));
                }
            }
            if ui.button(set.roll_label()).clicked() {
                actions.push(UiAction::Roll(id));
            }
        });
    });
}

fn paint_roll(ui: &mut egui::Ui, drawing: &RollDrawing) {
    let size = egui::vec2(drawing.layout.grid_width(), drawing.layout.grid_height());
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let mut canvas = EguiCanvas::new(&painter);

    for placed in &drawing.faces {
        let inset = placed.slot.size * FACE_GAP / 2.0;
        let face = FaceRect::new(
            rect.min.x + placed.slot.x + inset,
            rect.min.y + placed.slot.y + inset,
            placed.slot.size - 2.0 * inset,
        );
        placed.face.paint(&mut canvas, face);
    }
}
