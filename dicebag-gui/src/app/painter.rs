use dicebag::prelude::*;
use eframe::egui;

/// Offset of the second pass that thickens numerals, since egui ships no
/// bold face.
const BOLD_OFFSET: f32 = 0.6;

pub fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

pub fn from_color32(color: egui::Color32) -> Color {
    Color::rgb(color.r(), color.g(), color.b())
}

/// Paints face drawings with an egui painter, in screen points.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a egui::Painter) -> Self {
        Self { painter }
    }
}

impl FaceCanvas for EguiCanvas<'_> {
    fn fill_square(&mut self, x: f32, y: f32, size: f32, color: Color) {
        let rect = egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(size, size));
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn fill_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color) {
        self.painter
            .circle_filled(egui::pos2(center_x, center_y), radius, to_color32(color));
    }

    fn draw_text(&mut self, center_x: f32, center_y: f32, text: &str, font_size: f32, color: Color) {
        for dx in [0.0, BOLD_OFFSET] {
            self.painter.text(
                egui::pos2(center_x + dx, center_y),
                egui::Align2::CENTER_CENTER,
                text,
                egui::FontId::proportional(font_size),
                to_color32(color),
            );
        }
    }
}
