use derive_more::IntoIterator;
use serde::{Deserialize, Serialize};

use crate::{
    error::DiceError,
    roller::Roller,
    rules::bounds::{DICE_COUNT, SIDES},
};

/// How a die face shows its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceStyle {
    /// Traditional pip dots, for dice with at most six sides.
    Pips,
    /// The value written out.
    Numeral,
}

impl FaceStyle {
    pub const MAX_PIP_SIDES: u32 = 6;

    pub fn for_sides(sides: u32) -> Self {
        if sides <= Self::MAX_PIP_SIDES {
            FaceStyle::Pips
        } else {
            FaceStyle::Numeral
        }
    }
}

/// The faces of one roll, in the order they were rolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, IntoIterator)]
pub struct RollResult {
    pub sides: u32,
    #[into_iterator(owned, ref)]
    pub values: Vec<u32>,
}

impl RollResult {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// A sum is only worth showing when more than one die was rolled.
    pub fn shows_total(&self) -> bool {
        self.values.len() > 1
    }

    pub fn face_style(&self) -> FaceStyle {
        FaceStyle::for_sides(self.sides)
    }

    pub fn pretty_print(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        write!(f, "Rolled {}d{}: [", self.values.len(), self.sides)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")?;
        if self.shows_total() {
            write!(f, " = {}", self.total())?;
        }
        Ok(())
    }
}

/// A validated request to roll `dice_count` dice with `sides` sides each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollPlan {
    dice_count: u32,
    sides: u32,
}

impl RollPlan {
    pub fn new(dice_count: u32, sides: u32) -> Result<Self, DiceError> {
        Ok(Self {
            dice_count: DICE_COUNT.check(dice_count)?,
            sides: SIDES.check(sides)?,
        })
    }

    pub fn dice_count(&self) -> u32 {
        self.dice_count
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn roll(&self, rng: &mut Roller) -> RollResult {
        let values = (0..self.dice_count).map(|_| rng.d(self.sides)).collect();
        let result = RollResult {
            sides: self.sides,
            values,
        };
        if log::log_enabled!(log::Level::Debug) {
            let mut buf = String::new();
            result.pretty_print(&mut buf).ok();
            log::debug!("{}", buf);
        }
        result
    }
}

/// Validates the request, then rolls it. Nothing is rolled on error.
pub fn roll(dice_count: u32, sides: u32, rng: &mut Roller) -> Result<RollResult, DiceError> {
    Ok(RollPlan::new(dice_count, sides)?.roll(rng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_every_valid_shape() -> anyhow::Result<()> {
        let mut rng = Roller::test_rng();
        for dice_count in 1..=12 {
            for sides in 2..=50 {
                let result = roll(dice_count, sides, &mut rng)?;
                assert_eq!(result.len(), dice_count as usize);
                assert!(result.values.iter().all(|v| (1..=sides).contains(v)));
            }
        }
        Ok(())
    }

    #[test]
    fn test_roll_rejects_out_of_range() {
        let mut rng = Roller::test_rng();
        for (dice_count, sides) in [(0, 6), (13, 6), (3, 1), (3, 51), (0, 0)] {
            let err = roll(dice_count, sides, &mut rng).unwrap_err();
            assert!(matches!(err, DiceError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_total_range_for_five_d6() -> anyhow::Result<()> {
        let mut rng = Roller::test_rng();
        for _ in 0..10000 {
            let result = roll(5, 6, &mut rng)?;
            assert!(result.shows_total());
            assert!((5..=30).contains(&result.total()));
        }
        Ok(())
    }

    #[test]
    fn test_single_die_hides_total() -> anyhow::Result<()> {
        let result = roll(1, 20, &mut Roller::test_rng())?;
        assert!(!result.shows_total());
        Ok(())
    }

    #[test]
    fn test_face_style_threshold() {
        assert_eq!(FaceStyle::for_sides(2), FaceStyle::Pips);
        assert_eq!(FaceStyle::for_sides(6), FaceStyle::Pips);
        assert_eq!(FaceStyle::for_sides(7), FaceStyle::Numeral);
        assert_eq!(FaceStyle::for_sides(50), FaceStyle::Numeral);
    }

    #[test]
    fn test_pretty_print() -> std::fmt::Result {
        let result = RollResult {
            sides: 6,
            values: vec![3, 5, 1],
        };
        let mut buf = String::new();
        result.pretty_print(&mut buf)?;
        assert_eq!(buf, "Rolled 3d6: [3, 5, 1] = 9");

        let single = RollResult {
            sides: 20,
            values: vec![17],
        };
        let mut buf = String::new();
        single.pretty_print(&mut buf)?;
        assert_eq!(buf, "Rolled 1d20: [17]");
        Ok(())
    }
}
