//! roomtint - CLI for color resolution, harmony suggestions and room scenes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use roomtint::{apply_template, normalize_hex, open_studio, Color};

/// Resolve paint colors, suggest harmonies and preview room color schemes.
#[derive(Parser, Debug)]
#[command(name = "roomtint")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Color catalog database (JSON)
    #[arg(long, global = true)]
    catalogs: Option<PathBuf>,

    /// Designer template set (JSON); builtin presets when omitted
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    /// Session configuration (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print the canonical form of a hex color
    Normalize { input: String },

    /// Resolve a hex value, catalog:code or bare code
    Resolve {
        code: String,
        /// Catalog searched first for bare codes
        #[arg(long)]
        catalog: Option<String>,
    },

    /// Suggest similar, contrast and monochrome colors
    Harmony {
        /// Base color: hex or catalog code
        color: String,
        /// Pick suggestions from this catalog instead of generating them
        #[arg(long)]
        catalog: Option<String>,
        /// Contrast rotation for catalog suggestions
        #[arg(long, default_value = "0")]
        round: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a template maps onto wall sections and furniture
    Template {
        key: String,
        /// Available wall sections
        #[arg(long, default_value = "4")]
        sections: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List loaded catalogs and templates
    Catalogs,

    /// Run a command script and print the final scene
    Script {
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_colors(label: &str, colors: &[Color]) {
    let list: Vec<String> = colors.iter().map(|c| c.to_string()).collect();
    println!("{:<11} {}", label, list.join(" "));
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut studio = open_studio(
        args.catalogs.as_deref(),
        args.templates.as_deref(),
        args.config.as_deref(),
    )
    .context("Failed to load session data")?;

    match args.command {
        Cmd::Normalize { input } => match normalize_hex(&input) {
            Some(color) => println!("{}", color),
            None => anyhow::bail!("'{}' is not a valid hex color", input),
        },

        Cmd::Resolve { code, catalog } => {
            let resolved = studio.resolve(&code, catalog.as_deref())?;
            println!("{} {} {}", resolved.catalog, resolved.code, resolved.hex);
        }

        Cmd::Harmony {
            color,
            catalog,
            round,
            json,
        } => {
            let base = studio.resolve(&color, None)?.hex;
            let set = studio.suggest(base, catalog.as_deref(), round)?;

            if set.is_empty() {
                warn!("No suggestions for {}", base);
            }

            if json {
                print_json(&set)?;
            } else {
                println!("Base        {}", base);
                print_colors("Similar", &set.similar);
                print_colors("Contrast", &set.contrast);
                if let Some(mono) = &set.monochrome {
                    print_colors("Monochrome", mono);
                }
            }
        }

        Cmd::Template {
            key,
            sections,
            json,
        } => {
            let template = studio
                .templates()
                .get(&key)
                .with_context(|| format!("Template '{}' not found", key))?;
            let assignment = apply_template(template, sections)?;

            if json {
                print_json(&assignment)?;
            } else {
                println!("{}", template.name);
                print_colors("Walls", &assignment.walls);
                if let Some(furniture) = assignment.furniture {
                    println!("{:<11} {}", "Furniture", furniture);
                }
            }
        }

        Cmd::Catalogs => {
            for catalog in studio.catalogs().iter() {
                println!("{:<11} {} entries", catalog.name, catalog.len());
            }
            for key in studio.templates().keys() {
                println!("template    {}", key);
            }
        }

        Cmd::Script { file, json } => {
            let content = read_script(&file)?;
            let snapshot = studio
                .run_script(&content)
                .with_context(|| format!("Script {} failed", file.display()))?;
            info!("Script finished: {} section(s)", snapshot.section_count);

            if json {
                print_json(&snapshot)?;
            } else {
                print_colors("Walls", &snapshot.walls);
                println!("{:<11} {}", "Active", snapshot.active_section);
                println!("{:<11} {}", "Furniture", snapshot.furniture);
                println!("{:<11} {}", "Light", snapshot.lighting.mode);
                if let Some(set) = &snapshot.suggestions {
                    print_colors("Similar", &set.similar);
                    print_colors("Contrast", &set.contrast);
                }
            }
        }
    }

    Ok(())
}

fn read_script(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
