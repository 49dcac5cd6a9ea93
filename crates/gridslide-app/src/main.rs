//! GridSlide demo entry point (native).

mod app;
mod replay;

use clap::Parser;

/// Draggable matrix board demo.
#[derive(Parser, Debug)]
#[command(name = "gridslide", version, about)]
struct Args {
    /// Replay a recorded gesture trace headlessly instead of opening a window
    #[arg(long, value_name = "PATH")]
    replay: Option<std::path::PathBuf>,

    /// Write a sample gesture trace to PATH and exit
    #[arg(long, value_name = "PATH")]
    record_sample: Option<std::path::PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 960)]
    width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 640)]
    height: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = args.record_sample {
        if let Err(err) = replay::write_sample_trace(&path) {
            log::error!("failed to write sample trace: {err}");
            std::process::exit(1);
        }
        log::info!("sample trace written to {}", path.display());
        return;
    }

    if let Some(path) = args.replay {
        if let Err(err) = replay::run(&path) {
            log::error!("replay failed: {err}");
            std::process::exit(1);
        }
        return;
    }

    log::info!("Starting GridSlide");
    app::run(args.width, args.height);
}
