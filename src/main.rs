use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

mod cli;
mod config;
mod output;

use cli::Cli;
use cli::commands::Commands;
use config::Config;
use folio::render::render_page;

fn setup_logging(level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("folio.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.unwrap_or("info")))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match cli.command_or_default() {
        Commands::Render { output, year, check } => handle_render_command(output.as_deref(), year, check, config),
        Commands::Print { year } => handle_print_command(year, config),
        Commands::Projects => handle_projects_command(config),
    }
}

fn render(year: Option<i32>, config: &Config) -> Result<String> {
    let content = config.resolve_content()?;
    let ctx = config.page_context(year);
    info!("Rendering page for {} (year {})", content.profile.name, ctx.year);
    render_page(&content, &ctx).context("Failed to render page")
}

fn handle_render_command(output_path: Option<&Path>, year: Option<i32>, check: bool, config: &Config) -> Result<()> {
    let path = output_path.unwrap_or(config.output.as_path());
    let html = render(year, config)?;

    if check {
        let digest = output::check_page(path, &html)?;
        println!("{} {} ({})", "Up to date:".green(), path.display(), &digest[..12]);
        return Ok(());
    }

    let digest = output::write_page(path, &html)?;
    println!(
        "{} {} ({} bytes, sha256 {})",
        "Rendered:".green(),
        path.display(),
        html.len(),
        &digest[..12]
    );
    Ok(())
}

fn handle_print_command(year: Option<i32>, config: &Config) -> Result<()> {
    let html = render(year, config)?;
    print!("{}", html);
    Ok(())
}

fn handle_projects_command(config: &Config) -> Result<()> {
    let content = config.resolve_content()?;
    info!("Listing {} projects", content.projects.len());
    for project in &content.projects {
        println!("{}", project.title.bold());
        println!("  {}", project.link.cyan());
        println!("  {}", project.tech.join(", ").dimmed());
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let (config, report) = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging once the configured level is known, then replay what loading found
    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;
    report.log();
    for warning in &report.warnings {
        eprintln!("{} {}", "Warning:".yellow(), warning);
    }

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
