use dicebag::prelude::*;
use eframe::egui;

use super::painter::{from_color32, to_color32};

/// A modal-style window for choosing one color of one set.
pub struct ColorPickerWindow {
    pub id: SetId,
    pub role: ColorRole,
    color: egui::Color32,
}

impl ColorPickerWindow {
    pub fn new(id: SetId, role: ColorRole, current: Color) -> Self {
        Self {
            id,
            role,
            color: to_color32(current),
        }
    }

    /// Shows the window and returns the answer once the user has given one.
    /// Closing the window counts as a cancel.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<PickedColor> {
        let title = match self.role {
            ColorRole::Dice => "Choose Dice Color",
            ColorRole::Number => "Choose Number Color",
        };

        let mut open = true;
        let mut answer = None;
        egui::Window::new(title)
            .id(egui::Id::new(("color_picker", self.id.index())))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut self.color,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        answer = Some(PickedColor::Picked(from_color32(self.color)));
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(PickedColor::Cancelled);
                    }
                });
            });

        if !open {
            answer = Some(PickedColor::Cancelled);
        }
        answer
    }
}
