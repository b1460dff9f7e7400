#![deny(unsafe_code)]
//! CLI binary for potential-nav.
//!
//! Subcommands:
//! - `run`: build a world from a JSON config (or the demo world), navigate
//!   it to the goal, optionally write the trail as a PNG
//! - `config`: print the demo world config
//! - `schema`: print the scalar override schema accepted by `--params`

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use potential_nav_core::{Drawable, Navigator, Renderer, World, WorldConfig};
use potential_nav_render::Canvas;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

#[derive(Parser)]
#[command(name = "potential-nav", about = "Greedy potential-field navigation")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Navigate a world to its goal and report the outcome.
    Run {
        /// World config as a JSON file. Defaults to the demo world.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Scalar overrides as a JSON string (see `schema`).
        #[arg(long, default_value = "{}")]
        params: String,

        /// Stop after this many steps if the goal has not been reached.
        #[arg(long)]
        max_steps: Option<usize>,

        /// Write the start frame and agent trail to this PNG file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the demo world config as JSON.
    Config,
    /// Print the schema of the `--params` overrides.
    Schema,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Reads the config file (or the demo world) and applies `--params`.
fn load_config(path: Option<&Path>, params: &str) -> Result<WorldConfig, CliError> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid config JSON: {e}")))?;
            WorldConfig::from_json(&value)?
        }
        None => WorldConfig::default(),
    };
    let overrides: serde_json::Value = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    config.apply_overrides(&overrides);
    Ok(config)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&WorldConfig::default())?);
        }
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&WorldConfig::param_schema())?);
        }
        Command::Run {
            config,
            params,
            max_steps,
            output,
        } => {
            let mut config = load_config(config.as_deref(), &params)?;
            if max_steps.is_some() {
                config.max_steps = max_steps;
            }

            let mut world = World::from_config(&config)?;
            let navigator = Navigator::from_config(&config)?;
            info!(
                obstacles = world.obstacles().len(),
                stop_distance = navigator.stop_distance(),
                "starting run"
            );

            let outcome = match &output {
                Some(path) => {
                    let mut canvas = Canvas::for_world(&config)?;
                    world.draw_all(&mut canvas);
                    let agent = world.agent().appearance();
                    let outcome = navigator.run_with(&mut world, |record| {
                        canvas.draw_disk(record.position, agent.radius, agent.color)
                    });
                    potential_nav_render::snapshot::write_png(&canvas, path)?;
                    outcome
                }
                None => navigator.run(&mut world),
            };

            if cli.json {
                let mut info = serde_json::to_value(outcome)?;
                if let Some(path) = &output {
                    info["output"] = serde_json::json!(path.display().to_string());
                }
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "{:?} after {} steps at ({:.2}, {:.2}), {:.2} from goal",
                    outcome.reason,
                    outcome.steps,
                    outcome.final_position.x,
                    outcome.final_position.y,
                    outcome.final_distance,
                );
                if let Some(path) = &output {
                    eprintln!("wrote {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
