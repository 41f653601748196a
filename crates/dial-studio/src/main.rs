//! Renders a live clock face to an SVG file, rewritten once per tick.
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dial_engine::logging::{init_logging, LoggingConfig};
use dial_engine::scene::Scene;
use dial_engine::time::Ticker;
use dial_face::{ClockFace, Menu, TimeField, TimeOfDay, TimeSource};

/// Renders a live analog clock face to SVG.
#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Number of ticks to render before exiting; 0 keeps running.
    #[clap(long, short, default_value_t = 0)]
    ticks: u64,

    /// Show a fixed simulated time (HH:MM or HH:MM:SS) instead of the local clock.
    #[clap(long, short)]
    simulate: Option<TimeOfDay>,

    /// Hide the digital readout.
    #[clap(long)]
    hide_digital: bool,

    /// Hide the hour labels.
    #[clap(long)]
    hide_labels: bool,

    /// SVG file rewritten after every tick.
    #[clap(long, short, default_value = "dial.svg")]
    output: PathBuf,

    /// Tick interval in milliseconds.
    #[clap(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: u64,

    /// Include debug logs.
    #[clap(long, short)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(if args.debug {
        LoggingConfig::with_filter("debug")
    } else {
        LoggingConfig::default()
    });

    let mut face = ClockFace::with_system_clock(Scene::new());
    let mut menu = Menu::from_state(face.display_state());

    if let Some(time) = args.simulate {
        menu.select_source(&mut face, TimeSource::Simulated)?;
        for (field, value) in [
            (TimeField::Hours, time.hours()),
            (TimeField::Minutes, time.minutes()),
            (TimeField::Seconds, time.seconds()),
        ] {
            menu.set_field(&mut face, field, value.into())?;
        }
        // Source changes only show up on the next tick.
        face.tick()?;
    }
    menu.set_show_digital(&mut face, !args.hide_digital)?;
    menu.set_show_labels(&mut face, !args.hide_labels)?;

    write_svg(&mut face, &args.output)?;
    log::info!("writing clock face to {}", args.output.display());

    let mut ticker = Ticker::new(Duration::from_millis(args.interval_ms));
    while let Some(info) = ticker.wait() {
        if info.missed > 0 {
            log::warn!("missed {} tick(s), resynchronizing", info.missed);
        }

        let frame = face.tick()?;
        write_svg(&mut face, &args.output)?;
        log::info!("tick {}: {}", info.index, frame.digital_text);

        if args.ticks != 0 && info.index + 1 >= args.ticks {
            ticker.cancel();
        }
    }

    face.tear_down();
    Ok(())
}

fn write_svg(face: &mut ClockFace<Scene>, path: &Path) -> anyhow::Result<()> {
    let view_box = face.style().view_box();
    let svg = face.surface_mut().to_svg(view_box);
    std::fs::write(path, svg).with_context(|| format!("unable to write {}", path.display()))
}
