use std::path::PathBuf;

use clap::Parser;
use dicebag::prelude::*;
use unicode_width::UnicodeWidthStr;

mod text_canvas;

use text_canvas::TextCanvas;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dice sets to roll, e.g. `Attack=3d6`, `d20` or `Fire=2d8 #ff0000/#ffffff`
    #[arg(required = true, value_name = "SET")]
    sets: Vec<String>,

    /// How many times to roll every set
    #[arg(short, long, default_value_t = 1)]
    times: u32,

    /// Random seed for reproducibility
    #[arg(long, default_value = None)]
    seed: Option<u64>,

    /// Screen width used to size the dice
    #[arg(long, default_value_t = 1970.0)]
    width: f32,

    /// Screen height used to size the dice
    #[arg(long, default_value_t = 1180.0)]
    height: f32,

    /// Print rolls as JSON instead of drawing them
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Write JSON rolls to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

/// Validation failures go to stderr, the way a dialog would show them.
struct ConsoleErrors;

impl ErrorSurface for ConsoleErrors {
    fn show_error(&mut self, title: &str, description: &str) {
        eprintln!("{}: {}", title, description);
    }
}

fn pad_cells(s: &str, field_cells: usize) -> String {
    let pad = field_cells.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}

fn display_name(set: &DiceSetConfig, id: SetId) -> String {
    if set.name.is_empty() {
        format!("Set {}", id)
    } else {
        set.name.clone()
    }
}

fn configure(controller: &mut ViewController, specs: &[String]) -> anyhow::Result<()> {
    let sets = specs
        .iter()
        .map(|spec| parse_set(spec))
        .collect::<anyhow::Result<Vec<_>>>()?;

    controller.commit_set_count(sets.len() as u32)?;
    for (id, set) in controller.store().ids().zip(sets) {
        log::debug!("Set {} is {:?}", id, set);
        *controller.set_mut(id)? = set;
    }
    Ok(())
}

fn run(args: &Args, controller: &mut ViewController) -> anyhow::Result<Vec<RollRecord>> {
    configure(controller, &args.sets)?;

    let mut surface = FixedSurface::new(ScreenSize::new(args.width, args.height));
    controller.confirm(&mut surface)?;

    let ids: Vec<SetId> = controller.store().ids().collect();
    let name_cells = ids
        .iter()
        .map(|&id| {
            controller
                .set(id)
                .map(|set| display_name(set, id).width())
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0);

    let mut records = Vec::new();
    for round in 1..=args.times {
        if !args.json && args.times > 1 {
            println!("== Roll {} ==", round);
        }
        for &id in &ids {
            let name = display_name(controller.set(id)?, id);
            let rolled = controller.roll(id)?;
            records.push(rolled.record(&name));

            if args.json {
                continue;
            }

            let mut summary = String::new();
            rolled.result.pretty_print(&mut summary)?;
            println!("{}  {}", pad_cells(&name, name_cells), summary);

            let mut canvas = TextCanvas::for_layout(&rolled.drawing.layout);
            rolled.drawing.paint(&mut canvas, 0.0, 0.0);
            println!("{}", canvas.render());
            if let Some(label) = &rolled.drawing.total_label {
                println!("{}", label);
            }
            println!();
        }
    }

    Ok(records)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    log::debug!("Starting with args: {:?}", args);

    let roller = match args.seed {
        Some(seed) => Roller::from_seed(seed),
        None => Roller::new(),
    };
    let mut controller = ViewController::new(roller);

    let records = match run(&args, &mut controller) {
        Ok(records) => records,
        Err(e) => {
            if let Some(err) = e.downcast_ref::<DiceError>() {
                ConsoleErrors.report(err);
            }
            return Err(e);
        }
    };

    if args.json {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &records)?;
        println!();
    }

    if let Some(path) = &args.output {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer(writer, &records)?;
        log::info!("Rolls written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["dicebag-cli", "--seed", "3"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_run_rolls_every_set() -> anyhow::Result<()> {
        let args = args(&["--json", "--times", "3", "Attack=8d20", "5d6", "d4"]);
        let mut controller = ViewController::new(Roller::from_seed(3));
        let records = run(&args, &mut controller)?;

        assert_eq!(records.len(), 9);
        assert_eq!(records[0].set_name, "Attack");
        assert_eq!(records[1].set_name, "Set #2");
        for record in &records {
            assert_eq!(record.total, record.values.iter().sum::<u32>());
            assert!(record.values.iter().all(|&v| v >= 1 && v <= record.sides));
        }
        Ok(())
    }

    #[test]
    fn test_too_many_sets() {
        let specs: Vec<String> = (0..13).map(|_| "d6".to_string()).collect();
        let mut controller = ViewController::new(Roller::from_seed(3));
        let err = configure(&mut controller, &specs).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DiceError>(),
            Some(&DiceError::InvalidSetCount(13))
        );
    }

    #[test]
    fn test_bad_spec_is_rejected_before_configuring() {
        let specs = vec!["3d6".to_string(), "3d99".to_string()];
        let mut controller = ViewController::new(Roller::from_seed(3));
        assert!(configure(&mut controller, &specs).is_err());
        assert!(controller.store().is_empty());
    }

    #[test]
    fn test_pad_cells_counts_wide_chars() {
        assert_eq!(pad_cells("ab", 4), "ab  ");
        assert_eq!(pad_cells("竜", 4), "竜  ");
        assert_eq!(pad_cells("toolong", 3), "toolong");
    }
}
