use dicebag::prelude::*;
use eframe::egui;

pub mod color_picker;
pub mod painter;
pub mod results;
pub mod settings;
pub mod surface;

/// Something the user asked for during a frame, carried out once the views
/// are done borrowing the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    CommitSetCount(u32),
    PickColor(SetId, ColorRole),
    Confirm,
    Back,
    Roll(SetId),
}

#[derive(Default)]
pub struct App {
    pub controller: ViewController,
    pub settings_app: settings::SettingsApp,
    pub results_app: results::ResultsApp,
    pub color_picker: Option<color_picker::ColorPickerWindow>,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| match self.controller.mode() {
                ViewMode::Configuring => {
                    self.settings_app.header_ui(ui, &mut actions);
                }
                ViewMode::Viewing => {
                    if ui.button("Back to Settings").clicked() {
                        actions.push(UiAction::Back);
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.controller.mode() {
            ViewMode::Configuring => {
                self.settings_app.ui(ui, &mut self.controller, &mut actions);
            }
            ViewMode::Viewing => {
                self.results_app.ui(ui, &self.controller, &mut actions);
            }
        });

        if let Some(picker) = &mut self.color_picker {
            if let Some(picked) = picker.show(ctx) {
                let (id, role) = (picker.id, picker.role);
                self.color_picker = None;
                if let Err(e) = self.controller.apply_color(id, role, picked) {
                    surface::DialogErrors.report(&e);
                }
            }
        }

        for action in actions {
            self.apply(ctx, action);
        }
    }

    fn apply(&mut self, ctx: &egui::Context, action: UiAction) {
        let mut display = surface::ViewportSurface::new(ctx);
        if let Err(e) = self.dispatch(action, &mut display) {
            surface::DialogErrors.report(&e);
        }
    }

    /// Carries out one action against the controller.
    fn dispatch(
        &mut self,
        action: UiAction,
        display: &mut impl DisplaySurface,
    ) -> Result<(), DiceError> {
        match action {
            UiAction::CommitSetCount(count) => {
                self.color_picker = None;
                self.controller.commit_set_count(count).map(|()| {
                    let required = settings::required_size(count);
                    let screen = display.screen_size();
                    display.request_size(settings_window_size(screen, required));
                })
            }
            UiAction::PickColor(id, role) => self.controller.set(id).map(|set| {
                self.color_picker = Some(color_picker::ColorPickerWindow::new(
                    id,
                    role,
                    set.color(role),
                ));
            }),
            UiAction::Confirm => {
                self.color_picker = None;
                self.controller.confirm(display).map(|_| ())
            }
            UiAction::Back => self.controller.back(),
            UiAction::Roll(id) => self.controller.roll(id).map(|_| ()),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

pub fn fatal_error_dialog(description: &str) {
    rfd::MessageDialog::new()
        .set_title("Error")
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .set_level(rfd::MessageLevel::Error)
        .show();
}
