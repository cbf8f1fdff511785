use eframe::egui;

pub mod app;

const INITIAL_SIZE: (f32, f32) = (900.0, 600.0);
const TITLE: &str = "Dice Roller with Adaptive Sizes";

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let options = eframe::NativeOptions {
        window_builder: Some(Box::new(move |wb| {
            wb.with_title(TITLE)
                .with_inner_size(egui::Vec2::new(INITIAL_SIZE.0, INITIAL_SIZE.1))
                .with_min_inner_size(egui::Vec2::new(INITIAL_SIZE.0 / 2.0, INITIAL_SIZE.1 / 2.0))
        })),
        ..Default::default()
    };

    let result = eframe::run_native(
        TITLE,
        options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)))),
    );

    // Without a window there is nothing to fall back to.
    if let Err(e) = result {
        log::error!("Failed to start: {}", e);
        app::fatal_error_dialog(&format!("The dice roller could not start: {}", e));
        anyhow::bail!("failed to start the dice roller: {}", e);
    }

    Ok(())
}
