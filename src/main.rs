//! skill-gap: resume and job description skill gap analyzer

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use skill_gap::cli::{self, Cli, Commands, ConfigAction, SkillsAction};
use skill_gap::config::Config;
use skill_gap::input::InputManager;
use skill_gap::output::formatter::{save_report_to_file, ReportGenerator};
use skill_gap::output::AnalysisRecord;
use skill_gap::GapAnalyzer;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("reading config file {}", path.display())),
        None => Config::load().context("loading user configuration"),
    }
}

fn build_analyzer(config: &Config) -> Result<GapAnalyzer> {
    let analyzer = GapAnalyzer::from_config(config).context("building skill vocabulary")?;
    if analyzer.extractor().is_degraded() {
        warn!("Phrase matcher unavailable, using substring matching");
    }
    Ok(analyzer)
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            output,
            save,
            record,
            detailed,
        } => {
            info!("Starting skill gap analysis");

            cli::validate_document(&resume)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("resume file {}", resume.display()))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(anyhow::Error::msg)?,
                None => config.output.format,
            };

            let analyzer = build_analyzer(&config)?;
            let mut input_manager = InputManager::new();

            let resume_text = input_manager
                .extract_text(&resume)
                .await
                .with_context(|| format!("extracting text from {}", resume.display()))?;

            let (job_text, job_source) = match (job, job_text) {
                (Some(job), _) => {
                    cli::validate_document(&job)
                        .map_err(anyhow::Error::msg)
                        .with_context(|| format!("job description file {}", job.display()))?;
                    let text = input_manager
                        .extract_text(&job)
                        .await
                        .with_context(|| format!("extracting text from {}", job.display()))?;
                    (text, job.display().to_string())
                }
                (None, Some(text)) => (text, "inline".to_string()),
                (None, None) => anyhow::bail!("either --job or --job-text is required"),
            };

            let result = analyzer.analyze(&resume_text, &job_text);
            let analysis = AnalysisRecord::new(resume.display().to_string(), job_source, result);

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let report = generator.generate_report(&analysis, &output_format)?;

            match &save {
                Some(path) => {
                    save_report_to_file(&report, path)
                        .with_context(|| format!("saving report to {}", path.display()))?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", report),
            }

            if let Some(path) = &record {
                analysis
                    .write_to(path)
                    .with_context(|| format!("writing analysis record to {}", path.display()))?;
                info!("Analysis record written to {}", path.display());
            }
        }

        Commands::Skills { action } => {
            let analyzer = build_analyzer(&config)?;
            let vocabulary = analyzer.extractor().vocabulary();

            match action {
                SkillsAction::List => {
                    println!("📚 Skill vocabulary ({} entries)\n", vocabulary.len());
                    for label in vocabulary.labels() {
                        println!("  • {}", label);
                    }
                }

                SkillsAction::Extract { file } => {
                    cli::validate_document(&file).map_err(anyhow::Error::msg)?;

                    let text = InputManager::new()
                        .extract_text(&file)
                        .await
                        .with_context(|| format!("extracting text from {}", file.display()))?;

                    let skills = analyzer.extractor().extract(text.as_str());
                    println!("🔍 {} skills found in {}\n", skills.len(), file.display());
                    for label in skills.labels() {
                        println!("  • {}", label);
                    }
                }
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    let rendered = toml::to_string_pretty(&config).context("rendering configuration")?;
                    println!("{}", rendered);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default()
                        .save_to(&path)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}
