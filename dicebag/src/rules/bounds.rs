use crate::error::DiceError;

/// A closed integer range that user input must fall within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedInt {
    pub field: &'static str,
    pub lower: u32,
    pub upper: u32,
}

/// Dice per set.
pub const DICE_COUNT: BoundedInt = BoundedInt::new("dice count", 1, 12);
/// Sides per die.
pub const SIDES: BoundedInt = BoundedInt::new("sides", 2, 50);
/// Number of configured sets.
pub const SET_COUNT: BoundedInt = BoundedInt::new("number of sets", 1, 12);

impl BoundedInt {
    pub const fn new(field: &'static str, lower: u32, upper: u32) -> Self {
        Self {
            field,
            lower,
            upper,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.lower..=self.upper).contains(&value)
    }

    pub fn check(&self, value: u32) -> Result<u32, DiceError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(self.reject(value))
        }
    }

    /// Parses user text, rejecting anything that is not an integer in range.
    pub fn parse(&self, text: &str) -> Result<u32, DiceError> {
        let trimmed = text.trim();
        let value = trimmed
            .parse::<u32>()
            .map_err(|_| self.reject(trimmed))?;
        self.check(value)
    }

    pub fn range(&self) -> std::ops::RangeInclusive<u32> {
        self.lower..=self.upper
    }

    fn reject(&self, value: impl ToString) -> DiceError {
        DiceError::invalid_input(self.field, value, self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bounds_are_inclusive() {
        assert_eq!(DICE_COUNT.check(1), Ok(1));
        assert_eq!(DICE_COUNT.check(12), Ok(12));
        assert!(DICE_COUNT.check(0).is_err());
        assert!(DICE_COUNT.check(13).is_err());

        assert_eq!(SIDES.check(2), Ok(2));
        assert_eq!(SIDES.check(50), Ok(50));
        assert!(SIDES.check(1).is_err());
        assert!(SIDES.check(51).is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(SIDES.parse(" 20 "), Ok(20));
        let err = SIDES.parse("twenty").unwrap_err();
        assert!(matches!(
            err,
            DiceError::InvalidInput {
                field: "sides",
                min: 2,
                max: 50,
                ..
            }
        ));
        assert!(SIDES.parse("").is_err());
        assert!(SIDES.parse("-4").is_err());
    }
}
