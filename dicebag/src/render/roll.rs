use crate::{
    color::Color,
    layout::dice::{DieLayout, DieSlot},
    render::face::{FaceCanvas, FaceDrawing, FaceRect, render_face},
    rules::dice::RollResult,
};

/// A face paired with the slot it is painted into.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedFace {
    pub slot: DieSlot,
    pub face: FaceDrawing,
}

/// A complete rendering of one set's roll: faces in their grid slots, the
/// surplus slots that stay empty, and the total label if there is one.
#[derive(Debug, Clone, PartialEq)]
pub struct RollDrawing {
    pub layout: DieLayout,
    pub faces: Vec<PlacedFace>,
    pub hidden: Vec<DieSlot>,
    pub total_label: Option<String>,
}

impl RollDrawing {
    pub fn new(
        result: &RollResult,
        layout: &DieLayout,
        dice_color: Color,
        number_color: Color,
    ) -> Self {
        // decided once per roll from the configured sides, not per value
        let style = result.face_style();

        let mut faces = Vec::with_capacity(result.len());
        let mut hidden = Vec::new();
        let mut values = result.values.iter();

        for slot in layout.slots() {
            match values.next() {
                Some(&value) if !slot.hidden => faces.push(PlacedFace {
                    slot,
                    face: render_face(value, dice_color, number_color, style),
                }),
                _ => hidden.push(DieSlot {
                    hidden: true,
                    ..slot
                }),
            }
        }

        let total_label = result
            .shows_total()
            .then(|| format!("Total: {}", result.total()));

        Self {
            layout: *layout,
            faces,
            hidden,
            total_label,
        }
    }

    /// Paints every visible face with the grid's top-left corner at
    /// `(origin_x, origin_y)`. Hidden slots are left untouched.
    pub fn paint(&self, canvas: &mut impl FaceCanvas, origin_x: f32, origin_y: f32) {
        for placed in &self.faces {
            let rect = FaceRect::new(
                origin_x + placed.slot.x,
                origin_y + placed.slot.y,
                placed.slot.size,
            );
            placed.face.paint(canvas, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layout::dice::CellGeometry,
        render::face::{Shape, tests::RecordingCanvas},
        roller::Roller,
        rules::dice::roll,
    };

    fn drawing_for(values: Vec<u32>, sides: u32) -> anyhow::Result<RollDrawing> {
        let result = RollResult { sides, values };
        let layout = DieLayout::compute(CellGeometry::new(600.0, 400.0), result.len() as u32)?;
        Ok(RollDrawing::new(&result, &layout, Color::WHITE, Color::BLACK))
    }

    #[test]
    fn test_four_d6_uses_pips_in_one_row() -> anyhow::Result<()> {
        let drawing = drawing_for(vec![1, 2, 3, 4], 6)?;
        assert_eq!((drawing.layout.columns, drawing.layout.rows), (4, 1));
        assert_eq!(drawing.faces.len(), 4);
        assert!(drawing.hidden.is_empty());
        assert!(drawing.faces.iter().all(|f| {
            f.face
                .shapes
                .iter()
                .skip(1)
                .all(|s| matches!(s, Shape::Pip { .. }))
        }));
        assert_eq!(drawing.total_label.as_deref(), Some("Total: 10"));
        Ok(())
    }

    #[test]
    fn test_eight_d20_uses_numerals_with_hidden_slots() -> anyhow::Result<()> {
        let drawing = drawing_for(vec![20, 1, 7, 13, 2, 19, 11, 8], 20)?;
        assert_eq!((drawing.layout.columns, drawing.layout.rows), (6, 2));
        assert_eq!(drawing.faces.len(), 8);
        assert_eq!(drawing.hidden.len(), 4);
        assert!(drawing.hidden.iter().all(|s| s.hidden && s.row == 1));
        assert!(drawing.faces.iter().all(|f| {
            matches!(f.face.shapes.get(1), Some(Shape::Numeral { .. }))
        }));
        Ok(())
    }

    #[test]
    fn test_low_values_on_large_dice_still_use_numerals() -> anyhow::Result<()> {
        let drawing = drawing_for(vec![3, 2], 8)?;
        assert!(matches!(
            drawing.faces[0].face.shapes[1],
            Shape::Numeral { .. }
        ));
        Ok(())
    }

    #[test]
    fn test_single_die_has_no_total() -> anyhow::Result<()> {
        let drawing = drawing_for(vec![4], 6)?;
        assert_eq!(drawing.total_label, None);
        Ok(())
    }

    #[test]
    fn test_paint_skips_hidden_slots() -> anyhow::Result<()> {
        let drawing = drawing_for(vec![1, 2, 3, 4, 5, 6, 1], 6)?;
        let mut canvas = RecordingCanvas::default();
        drawing.paint(&mut canvas, 0.0, 0.0);
        assert_eq!(canvas.squares.len(), 7);
        assert_eq!(canvas.circles.len(), 1 + 2 + 3 + 4 + 5 + 6 + 1);
        Ok(())
    }

    #[test]
    fn test_same_roll_renders_identically() -> anyhow::Result<()> {
        let result = roll(9, 6, &mut Roller::test_rng())?;
        let layout = DieLayout::compute(CellGeometry::new(640.0, 360.0), 9)?;
        let first = RollDrawing::new(&result, &layout, Color::WHITE, Color::BLACK);
        let second = RollDrawing::new(&result, &layout, Color::WHITE, Color::BLACK);
        assert_eq!(first, second);

        let mut a = RecordingCanvas::default();
        let mut b = RecordingCanvas::default();
        first.paint(&mut a, 12.0, 8.0);
        second.paint(&mut b, 12.0, 8.0);
        assert_eq!(a, b);
        Ok(())
    }
}
