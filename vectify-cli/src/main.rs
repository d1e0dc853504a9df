//! # vectify
//!
//! CLI tool for compiling SVG icons into framework components.
//!
//! ## Usage
//!
//! ```bash
//! # Generate components using ./vectify.toml (or defaults)
//! vectify generate
//!
//! # Override the framework and directories
//! vectify generate --framework vue --input ./svg --output ./src/icons
//!
//! # Dry run to preview changes
//! vectify generate --dry-run
//!
//! # Initialize configuration
//! vectify init --framework svelte
//!
//! # List supported frameworks
//! vectify list
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use vectify::registry;
use vectify_cli::{
    config::{CONFIG_FILENAME, CliArgs, ConfigManager},
    error::{CliError, CliResult},
    generator::{GenerationReport, IconGenerator, PREVIEW_FILENAME},
    scanner::SvgScanner,
    writer::{FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "vectify")]
#[command(author, version, about = "Compile SVG icons into framework components", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate components from a directory of SVG files
    Generate {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input directory containing SVG files
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory for generated components
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target framework
        #[arg(short, long)]
        framework: Option<String>,

        /// Keep the original colors of the SVG files
        #[arg(long)]
        keep_colors: bool,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Initialize a new vectify configuration file
    Init {
        /// Target framework written to the configuration
        #[arg(short, long, default_value = "react")]
        framework: String,

        /// Output path for configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// List supported frameworks
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            match e.downcast_ref::<CliError>() {
                Some(CliError::Validation(_)) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            config,
            input,
            output,
            framework,
            keep_colors,
            dry_run,
        } => {
            let args = CliArgs {
                framework,
                input,
                output,
                keep_colors: keep_colors.then_some(true),
                ..Default::default()
            };
            cmd_generate(config, args, dry_run)?;
        }

        Commands::Init {
            framework,
            output,
            force,
        } => cmd_init(&framework, output, force)?,

        Commands::List => cmd_list(),
    }

    Ok(())
}

/// Generate command implementation.
fn cmd_generate(config_path: Option<PathBuf>, args: CliArgs, dry_run: bool) -> CliResult<()> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(config, &args);
    ConfigManager::validate(&config)?;

    println!("{}", "Scanning for SVG files...".cyan());

    let files = match SvgScanner::new(&config.input).scan_allow_empty() {
        Ok(files) => files,
        Err(e) => {
            println!("{} {}", "Warning:".yellow(), e);
            return Ok(());
        }
    };

    if files.is_empty() {
        println!(
            "{} No SVG files found in {}",
            "Warning:".yellow(),
            config.input.display()
        );
        return Ok(());
    }

    println!("  Found {} SVG file(s)", files.len().to_string().green());

    if dry_run {
        println!("{}", "Dry run mode - no files will be written".cyan());
    }
    println!(
        "{}",
        format!("Generating {} components...", config.framework).cyan()
    );

    let output_dir = config.output.clone();
    let preview = config.generate.preview;
    let generator = IconGenerator::new(config, FileWriter::new(dry_run));
    let report = generator.generate(&files)?;

    print_outputs(&report, dry_run);
    print_summary(&report, dry_run);

    if dry_run {
        println!(
            "\n{} {}",
            "Target directory:".bold(),
            output_dir.display().to_string().cyan()
        );
        println!("{}", "Run without --dry-run to generate files".dimmed());
    } else {
        println!(
            "\n{} {}",
            "Output:".bold(),
            output_dir.display().to_string().cyan()
        );
        if preview {
            println!(
                "{} {}",
                "Preview:".bold(),
                output_dir.join(PREVIEW_FILENAME).display().to_string().cyan()
            );
        }
    }

    Ok(())
}

fn print_outputs(report: &GenerationReport, dry_run: bool) {
    for output in &report.outputs {
        match output {
            WriteResult::Written { path, bytes } => {
                println!("  {} {} ({} bytes)", "✓".green(), path.display(), bytes);
            }
            WriteResult::DryRun { content, path } => {
                println!(
                    "  {} Would write {} ({} bytes)",
                    "[dry-run]".yellow(),
                    path.display(),
                    content.len()
                );
            }
        }
    }

    for path in &report.removed {
        if dry_run {
            println!("  {} Would remove {}", "[dry-run]".yellow(), path.display());
        } else {
            println!("  {} Removed {}", "✗".red(), path.display());
        }
    }
}

fn print_summary(report: &GenerationReport, dry_run: bool) {
    let stats = &report.stats;
    println!("{}", "─".repeat(60).dimmed());

    if stats.is_clean() {
        let verb = if dry_run { "Would generate" } else { "Generated" };
        println!(
            "{} {} {} icon components",
            "✓".green(),
            verb,
            stats.success.to_string().green()
        );
        return;
    }

    let verb = if dry_run { "Analyzed" } else { "Generated" };
    println!(
        "{} {} {} icons, {} failed",
        "⚠".yellow(),
        verb,
        stats.success.to_string().green(),
        stats.failed.to_string().red()
    );

    println!("\n{}", "Errors:".red().bold());
    for failure in &stats.errors {
        println!("  {} {}: {}", "✗".red(), failure.file, failure.error);
    }
}

/// Init command implementation.
fn cmd_init(framework: &str, output: PathBuf, force: bool) -> anyhow::Result<()> {
    if !registry().has(framework) {
        return Err(CliError::Validation(format!(
            "Unsupported framework '{}', expected one of: {}",
            framework,
            registry().list().join(", ")
        ))
        .into());
    }

    if output.exists() && !force {
        println!(
            "{} Configuration file already exists: {}",
            "Error:".red(),
            output.display()
        );
        println!("  Use --force to overwrite");
        return Err(CliError::Validation("Configuration file already exists".to_string()).into());
    }

    let content = ConfigManager::default_config_content(framework);
    std::fs::write(&output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );
    println!("  Run {} to generate components", "vectify generate".cyan());

    Ok(())
}

/// List command implementation.
fn cmd_list() {
    println!("{}", "Supported frameworks:".bold());
    for id in registry().list() {
        let Ok(strategy) = registry().get(id) else {
            continue;
        };
        println!(
            "  {} {} (.{} / .{})",
            format!("{:<10}", id).green(),
            strategy.family().to_string().dimmed(),
            strategy.component_extension(true),
            strategy.component_extension(false)
        );
    }
}

/// Print an error with formatting.
fn print_error(error: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), error);
}
