//! Agentic InfraOps demo GIF generator
//!
//! Plays the scripted Copilot agent session and writes it to
//! `generated/demo-workflow.gif`. Takes no arguments.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use termreel::animation::{FrameSink, RenderingSink, Script, Sequencer};
use termreel::config::Config;
use termreel::output::write_gif;
use termreel::renderer::FrameRenderer;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const OUTPUT_PATH: &str = "generated/demo-workflow.gif";

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run() -> termreel::Result<()> {
    let config = Config::default();
    println!("Generating demo workflow animation...");

    let script = Script::agentic_workflow();
    let renderer = FrameRenderer::new(&config);
    let mut sequencer = Sequencer::new(&config.timing, RenderingSink::new(renderer));

    println!("  → Creating animation frames...");
    sequencer.run(script.steps())?;
    let sink = sequencer.into_sink();
    println!("  → Generated {} frames ({} distinct)", sink.len(), sink.rendered());
    let bitmaps = sink.into_bitmaps();

    let output_path = Path::new(OUTPUT_PATH);
    println!("  → Saving GIF to {}...", output_path.display());
    let size = write_gif(output_path, &bitmaps, config.timing.frame_duration_ms)?;
    println!("  → File size: {:.2} MB", size as f64 / 1024.0 / 1024.0);

    let seconds = bitmaps.len() as f64 * f64::from(config.timing.frame_duration_ms) / 1000.0;
    println!();
    println!("Demo GIF saved to: {}", output_path.display());
    println!("   Duration: ~{:.1} seconds", seconds);

    Ok(())
}
