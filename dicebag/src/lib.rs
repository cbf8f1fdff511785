pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
pub mod render;
pub mod roller;
pub mod rules;
pub mod set_parser;
pub mod surface;

pub mod prelude {
    pub use crate::{
        color::{Color, ColorRole, PickedColor},
        config::{DiceSetConfig, SetConfigStore, SetId},
        controller::{ResultsView, RollRecord, RolledSet, Timestamp, ViewController, ViewMode},
        error::DiceError,
        layout::{
            dice::{CellGeometry, DieLayout, DieSlot},
            window::{ResultsGrid, ScreenSize, settings_cell, settings_columns, settings_window_size},
        },
        render::{
            face::{FaceCanvas, FaceDrawing, FaceRect, Shape, render_face},
            roll::{PlacedFace, RollDrawing},
        },
        roller::Roller,
        rules::{
            bounds::{BoundedInt, DICE_COUNT, SET_COUNT, SIDES},
            dice::{FaceStyle, RollPlan, RollResult, roll},
        },
        set_parser::parse_set,
        surface::{DisplaySurface, ErrorSurface, FixedSurface},
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[derive(Default)]
    struct Dialogs(Vec<String>);

    impl ErrorSurface for Dialogs {
        fn show_error(&mut self, title: &str, description: &str) {
            self.0.push(format!("{title}: {description}"));
        }
    }

    #[test]
    fn test_session() -> anyhow::Result<()> {
        let mut controller = ViewController::new(Roller::from_seed(1234));
        let mut surface = FixedSurface::new(ScreenSize::new(1600.0, 1000.0));
        let mut dialogs = Dialogs::default();

        if let Err(e) = controller.confirm(&mut surface) {
            dialogs.report(&e);
        }
        if let Err(e) = controller.commit_set_count(13) {
            dialogs.report(&e);
        }
        assert_eq!(dialogs.0.len(), 2);
        assert_eq!(controller.mode(), ViewMode::Configuring);

        controller.commit_set_count(3)?;
        let pips = SetId(0);
        let numerals = SetId(1);
        {
            let set = controller.set_mut(pips)?;
            set.name = "Skill".to_string();
            set.set_dice_count(5)?;
            set.set_sides(6)?;
        }
        {
            let set = controller.set_mut(numerals)?;
            set.name = "Attack".to_string();
            set.set_dice_count(8)?;
            set.set_sides(20)?;
        }
        controller.apply_color(numerals, ColorRole::Dice, PickedColor::Picked(Color::rgb(128, 0, 0)))?;
        controller.apply_color(numerals, ColorRole::Number, PickedColor::Cancelled)?;

        let cell = controller.confirm(&mut surface)?.cell;
        assert_eq!(cell, CellGeometry::new(1550.0, 300.0));

        let skill = controller.roll(pips)?.clone();
        assert_eq!(skill.result.face_style(), FaceStyle::Pips);
        assert!((5..=30).contains(&skill.result.total()));
        assert!(skill.drawing.total_label.is_some());

        let attack = controller.roll(numerals)?;
        assert_eq!(attack.result.face_style(), FaceStyle::Numeral);
        assert_eq!(attack.drawing.hidden.len(), 4);
        let Some(Shape::Background { color }) = attack.drawing.faces[0].face.shapes.first() else {
            panic!("faces start with their background");
        };
        assert_eq!(*color, Color::rgb(128, 0, 0));

        // the third set was never touched and keeps its defaults
        let single = controller.roll(SetId(2))?;
        assert_eq!(single.result.len(), 1);
        assert_eq!(single.drawing.total_label, None);

        controller.back()?;
        assert_eq!(controller.set(numerals)?.name, "Attack");
        Ok(())
    }
}
