//! The collaborators a front end provides to the controller.

use crate::{error::DiceError, layout::window::ScreenSize};

/// The window or screen the dice are shown on.
pub trait DisplaySurface {
    /// Size of the screen the window lives on.
    fn screen_size(&self) -> ScreenSize;

    /// Asks for the window to be resized. The surface may ignore it.
    fn request_size(&mut self, size: ScreenSize);
}

/// Where validation failures are shown to the user.
pub trait ErrorSurface {
    fn show_error(&mut self, title: &str, description: &str);

    fn report(&mut self, error: &DiceError) {
        log::warn!("{}", error);
        self.show_error(error.title(), error.description());
    }
}

/// A fixed-size surface, for headless front ends and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSurface {
    pub screen: ScreenSize,
    pub requested: Option<ScreenSize>,
}

impl FixedSurface {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            screen,
            requested: None,
        }
    }
}

impl DisplaySurface for FixedSurface {
    fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    fn request_size(&mut self, size: ScreenSize) {
        self.requested = Some(size);
    }
}
