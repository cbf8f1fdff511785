use crate::{config::SetId, controller::ViewMode};

/// Everything that can go wrong while configuring or rolling dice sets.
///
/// None of these are fatal: the caller shows [`DiceError::title`] and
/// [`DiceError::description`] to the user and carries on from the state it
/// was in before the failed action.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiceError {
    #[error("{field} must be within {min}..={max}, got {value}")]
    InvalidInput {
        field: &'static str,
        value: String,
        min: u32,
        max: u32,
    },

    #[error("number of sets must be within 1..=12, got {0}")]
    InvalidSetCount(u32),

    #[error("no dice sets have been configured")]
    NoSetsConfigured,

    #[error("no dice set with id {0}")]
    UnknownSet(SetId),

    #[error("cannot lay out dice in a {width}x{height} cell")]
    InvalidCellGeometry { width: f32, height: f32 },

    #[error("action not available while {actual:?}, expected {expected:?}")]
    WrongMode { expected: ViewMode, actual: ViewMode },
}

impl DiceError {
    pub(crate) fn invalid_input(field: &'static str, value: impl ToString, min: u32, max: u32) -> Self {
        DiceError::InvalidInput {
            field,
            value: value.to_string(),
            min,
            max,
        }
    }

    /// Short title for the modal error message.
    pub fn title(&self) -> &'static str {
        match self {
            DiceError::InvalidInput { .. } => "Input Error",
            _ => "Error",
        }
    }

    /// Corrective message for the user.
    pub fn description(&self) -> &'static str {
        match self {
            DiceError::InvalidInput { .. } => {
                "Please enter valid values for sides (2-50) and dice count (1-12)."
            }
            DiceError::InvalidSetCount(_) => "Please enter a valid number of sets (1-12).",
            DiceError::NoSetsConfigured => {
                "No sets configured. Click 'Next' to set up dice sets first."
            }
            DiceError::UnknownSet(_) => "The selected dice set no longer exists.",
            DiceError::InvalidCellGeometry { .. } => "The display area is too small to draw dice.",
            DiceError::WrongMode { .. } => "That action is not available right now.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        let err = DiceError::invalid_input("sides", 51, 2, 50);
        assert_eq!(err.title(), "Input Error");
        assert_eq!(DiceError::NoSetsConfigured.title(), "Error");
        assert_eq!(DiceError::InvalidSetCount(13).title(), "Error");
    }

    #[test]
    fn test_display_includes_value() {
        let err = DiceError::invalid_input("dice count", "abc", 1, 12);
        assert_eq!(err.to_string(), "dice count must be within 1..=12, got abc");
        assert_eq!(
            DiceError::InvalidSetCount(13).to_string(),
            "number of sets must be within 1..=12, got 13"
        );
    }
}
