use dicebag::prelude::*;
use eframe::egui;

/// The native window, as seen through egui's viewport.
pub struct ViewportSurface<'a> {
    ctx: &'a egui::Context,
}

impl<'a> ViewportSurface<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl DisplaySurface for ViewportSurface<'_> {
    fn screen_size(&self) -> ScreenSize {
        // not every backend reports the monitor, the current window is the
        // best guess left
        let size = self
            .ctx
            .input(|i| i.viewport().monitor_size)
            .unwrap_or_else(|| self.ctx.screen_rect().size());
        ScreenSize::new(size.x, size.y)
    }

    fn request_size(&mut self, size: ScreenSize) {
        log::debug!("Resizing window to {}x{}", size.width, size.height);
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                size.width,
                size.height,
            )));
    }
}

/// Shows validation failures as native message boxes.
pub struct DialogErrors;

impl ErrorSurface for DialogErrors {
    fn show_error(&mut self, title: &str, description: &str) {
        rfd::MessageDialog::new()
            .set_title(title)
            .set_description(description)
            .set_buttons(rfd::MessageButtons::Ok)
            .set_level(rfd::MessageLevel::Error)
            .show();
    }
}
