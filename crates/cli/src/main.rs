//! navspy CLI - scroll-spy tracker demo driver.

use anyhow::Result;
use clap::{Parser, Subcommand};
use navspy_core::{default_sections, SectionId, TrackerConfig};
use navspy_tracker::{
    portfolio_scroll_script, ScrollStep, SectionTracker, SimViewport, SystemClock,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

#[derive(Parser)]
#[command(name = "navspy")]
#[command(about = "Scroll-synced navigation highlight tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the portfolio's navigation sections
    Sections,
    /// Play a simulated scroll and print highlight transitions
    Demo {
        /// Tracker configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Scroll script file (JSON); defaults to the built-in portfolio scroll
        #[arg(long)]
        script: Option<PathBuf>,
        /// Playback pacing factor; values above 1.0 shorten the idle
        /// steps but leave the real-time suppression window untouched
        #[arg(long, default_value = "1.0")]
        speed: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sections => {
            let sections = default_sections();
            println!("Sections ({})", sections.len());
            for section in sections {
                println!("  #{} | {}", section.id, section.label);
            }
        }
        Commands::Demo {
            config,
            script,
            speed,
        } => {
            let config = match config {
                Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
                None => TrackerConfig::default(),
            };
            let script = match script {
                Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
                None => portfolio_scroll_script(),
            };
            run_demo(config, script, speed).await?;
        }
    }

    Ok(())
}

/// Drive the tracker through a scripted scroll against a simulated
/// viewport, printing every nav-highlight transition.
async fn run_demo(config: TrackerConfig, script: Vec<ScrollStep>, speed: f64) -> Result<()> {
    let sections = default_sections();
    let ids: Vec<SectionId> = sections.iter().map(|s| s.id.clone()).collect();

    let host = SimViewport::with_elements(&ids);
    let mut tracker = SectionTracker::bind(host, &ids, config, Arc::new(SystemClock));

    let label_of = |id: &SectionId| {
        sections
            .iter()
            .find(|s| &s.id == id)
            .map(|s| s.label.as_str())
            .unwrap_or("?")
    };

    let mut highlighted: Option<SectionId> = None;
    for step in script {
        match step {
            ScrollStep::Batch(entries) => tracker.on_intersections(&entries),
            ScrollStep::Jump(id) => {
                println!("nav click: #{id}");
                tracker.trigger_manual(id);
            }
            ScrollStep::Settle(ms) => {
                let paced = (ms as f64 / speed.max(0.01)) as u64;
                tokio::time::sleep(std::time::Duration::from_millis(paced)).await;
                continue;
            }
        }

        let active = tracker.active().cloned();
        if active != highlighted {
            match &active {
                Some(id) => println!("highlight -> {} (#{id})", label_of(id)),
                None => println!("highlight -> none"),
            }
            highlighted = active;
        }
    }

    tracker.release();
    Ok(())
}
