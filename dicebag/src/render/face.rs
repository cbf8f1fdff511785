//! Drawing a single die face.
//!
//! Faces are described in a fixed normalized square, `0.0..=0.5` on both
//! axes with y pointing up, and only mapped to pixels when painted. Pip
//! positions therefore stay proportionally identical at every die size.

use crate::{color::Color, rules::dice::FaceStyle};

/// Side length of the normalized face square.
pub const FACE_EXTENT: f32 = 0.5;
pub const FACE_CENTER: f32 = FACE_EXTENT / 2.0;
pub const PIP_RADIUS: f32 = 0.04;
/// Numerals are drawn at a fixed point size, independent of die size.
pub const NUMERAL_FONT_SIZE: f32 = 16.0;

const CENTER: (f32, f32) = (FACE_CENTER, FACE_CENTER);

// Coordinates are in the normalized square, y up.
const PIPS_1: &[(f32, f32)] = &[CENTER];
const PIPS_2: &[(f32, f32)] = &[(0.1, 0.4), (0.4, 0.1)];
const PIPS_3: &[(f32, f32)] = &[(0.1, 0.4), CENTER, (0.4, 0.1)];
const PIPS_4: &[(f32, f32)] = &[(0.1, 0.4), (0.4, 0.4), (0.1, 0.1), (0.4, 0.1)];
const PIPS_5: &[(f32, f32)] = &[(0.1, 0.4), (0.4, 0.4), (0.1, 0.1), (0.4, 0.1), CENTER];
const PIPS_6: &[(f32, f32)] = &[
    (0.1, 0.4),
    (0.4, 0.4),
    (0.1, 0.25),
    (0.4, 0.25),
    (0.1, 0.1),
    (0.4, 0.1),
];

/// Pip centers for `value`. Anything outside `1..=6` gets a lone center pip.
pub fn pip_positions(value: u32) -> &'static [(f32, f32)] {
    match value {
        1 => PIPS_1,
        2 => PIPS_2,
        3 => PIPS_3,
        4 => PIPS_4,
        5 => PIPS_5,
        6 => PIPS_6,
        _ => PIPS_1,
    }
}

/// Drawing primitives a face needs from whatever is displaying it.
///
/// Coordinates are pixels with y pointing down.
pub trait FaceCanvas {
    fn fill_square(&mut self, x: f32, y: f32, size: f32, color: Color);
    fn fill_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color);
    /// Bold text centered on the given point.
    fn draw_text(&mut self, center_x: f32, center_y: f32, text: &str, font_size: f32, color: Color);
}

/// Where on the canvas a face is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl FaceRect {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self { x, y, size }
    }

    fn scale(&self) -> f32 {
        self.size / FACE_EXTENT
    }

    /// Maps a normalized point to canvas pixels, flipping y.
    pub fn to_pixels(&self, (nx, ny): (f32, f32)) -> (f32, f32) {
        (
            self.x + nx * self.scale(),
            self.y + (FACE_EXTENT - ny) * self.scale(),
        )
    }

    pub fn length_to_pixels(&self, length: f32) -> f32 {
        length * self.scale()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Background { color: Color },
    Pip { center: (f32, f32), radius: f32, color: Color },
    Numeral { text: String, center: (f32, f32), font_size: f32, color: Color },
}

/// Everything needed to paint one face, in normalized units.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceDrawing {
    pub value: u32,
    pub shapes: Vec<Shape>,
}

impl FaceDrawing {
    /// Paints the face into `rect`. Painting the same drawing twice produces
    /// the same output.
    pub fn paint(&self, canvas: &mut impl FaceCanvas, rect: FaceRect) {
        for shape in &self.shapes {
            match shape {
                Shape::Background { color } => {
                    canvas.fill_square(rect.x, rect.y, rect.size, *color);
                }
                Shape::Pip {
                    center,
                    radius,
                    color,
                } => {
                    let (x, y) = rect.to_pixels(*center);
                    canvas.fill_circle(x, y, rect.length_to_pixels(*radius), *color);
                }
                Shape::Numeral {
                    text,
                    center,
                    font_size,
                    color,
                } => {
                    let (x, y) = rect.to_pixels(*center);
                    canvas.draw_text(x, y, text, *font_size, *color);
                }
            }
        }
    }
}

/// Builds the drawing for one face showing `value`.
pub fn render_face(
    value: u32,
    dice_color: Color,
    number_color: Color,
    style: FaceStyle,
) -> FaceDrawing {
    let mut shapes = vec![Shape::Background { color: dice_color }];

    match style {
        FaceStyle::Pips => {
            shapes.extend(pip_positions(value).iter().map(|&center| Shape::Pip {
                center,
                radius: PIP_RADIUS,
                color: number_color,
            }));
        }
        FaceStyle::Numeral => shapes.push(Shape::Numeral {
            text: value.to_string(),
            center: CENTER,
            font_size: NUMERAL_FONT_SIZE,
            color: number_color,
        }),
    }

    FaceDrawing { value, shapes }
}
