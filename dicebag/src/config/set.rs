use serde::Serialize;

use crate::{
    color::{Color, ColorRole, PickedColor},
    error::DiceError,
    rules::{
        bounds::{DICE_COUNT, SIDES},
        dice::RollPlan,
    },
};

/// One user-defined group of dice.
///
/// `dice_count` and `sides` can only be changed through the validated
/// setters, so they are always within their bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiceSetConfig {
    pub name: String,
    dice_count: u32,
    sides: u32,
    pub dice_color: Color,
    pub number_color: Color,
}

impl Default for DiceSetConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            dice_count: 1,
            sides: 6,
            dice_color: ColorRole::Dice.default_color(),
            number_color: ColorRole::Number.default_color(),
        }
    }
}

impl DiceSetConfig {
    pub fn new(name: impl Into<String>, dice_count: u32, sides: u32) -> Result<Self, DiceError> {
        Ok(Self {
            name: name.into(),
            dice_count: DICE_COUNT.check(dice_count)?,
            sides: SIDES.check(sides)?,
            ..Default::default()
        })
    }

    pub fn with_colors(mut self, dice_color: Color, number_color: Color) -> Self {
        self.dice_color = dice_color;
        self.number_color = number_color;
        self
    }

    pub fn dice_count(&self) -> u32 {
        self.dice_count
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn set_dice_count(&mut self, dice_count: u32) -> Result<(), DiceError> {
        self.dice_count = DICE_COUNT.check(dice_count)?;
        Ok(())
    }

    pub fn set_sides(&mut self, sides: u32) -> Result<(), DiceError> {
        self.sides = SIDES.check(sides)?;
        Ok(())
    }

    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Dice => self.dice_color,
            ColorRole::Number => self.number_color,
        }
    }

    /// Stores a color picker's answer. A cancelled pick resets the role to
    /// its default (white dice, black numbers).
    pub fn apply_picked(&mut self, role: ColorRole, picked: PickedColor) {
        let color = picked.or(role.default_color());
        match role {
            ColorRole::Dice => self.dice_color = color,
            ColorRole::Number => self.number_color = color,
        }
    }

    pub fn plan(&self) -> Result<RollPlan, DiceError> {
        RollPlan::new(self.dice_count, self.sides)
    }

    /// Label for the button that rolls this set.
    pub fn roll_label(&self) -> String {
        format!("{} - Roll Dice", self.name)
    }
}
