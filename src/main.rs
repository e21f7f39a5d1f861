mod catalog;
mod cli;
mod config;
mod error;
mod report;
mod scoring;
mod store;
mod types;

use crate::catalog::Catalog;
use crate::error::{Result, StrengthsError};
use crate::types::config::{ConfiguredFormat, StrengthsConfig};
use crate::types::response::{Dimension, ResponseKey, Responses, SectionId};
use clap::Parser;
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let config = config::load_config(&cwd)?;
    let state_path = resolve_state_path(&cli, config.as_ref());
    let catalog = Catalog::build();

    match cli.command {
        cli::Commands::Rate(cmd) => {
            let section: SectionId = cmd.section.into();
            let dimension: Dimension = cmd.dimension.into();
            let question = catalog.question(section, &cmd.statement).ok_or_else(|| {
                StrengthsError::UnknownStatement {
                    section: section.to_string(),
                    statement: cmd.statement.clone(),
                }
            })?;
            if !question.dimensions.contains(&dimension) {
                return Err(StrengthsError::IllegalDimension {
                    statement: cmd.statement.clone(),
                    dimension: dimension.to_string(),
                });
            }
            if dimension == Dimension::Toggle && cmd.value > 1 {
                return Err(StrengthsError::InvalidToggleValue(cmd.value));
            }

            let mut state = store::load(&state_path)?.unwrap_or_default();
            state
                .responses
                .insert(ResponseKey::new(question.id, dimension), cmd.value);
            let index = catalog
                .questions(section)
                .iter()
                .position(|entry| entry.id == question.id)
                .unwrap_or(0);
            store::save(&state_path, &state.responses, section, index)?;

            let completion =
                scoring::completion::section_completion(&catalog, section, &state.responses);
            println!(
                "{}: {}/{} ({}%)",
                section, completion.answered, completion.total, completion.percentage
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::List(cmd) => {
            let section: SectionId = cmd.section.into();
            let responses = load_responses(&state_path)?;
            for (index, question) in catalog.questions(section).iter().enumerate() {
                let marks = question
                    .dimensions
                    .iter()
                    .map(|dimension| match responses.rating(question.id, *dimension) {
                        Some(value) => format!("{dimension}={value}"),
                        None => format!("{dimension}=-"),
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{index:3}  {:<22} [{marks}] {}", question.id, question.text);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Next(cmd) => {
            let section: SectionId = cmd.section.into();
            let responses = load_responses(&state_path)?;
            let index = match &cmd.category {
                Some(category) => {
                    if !catalog.has_category(section, category) {
                        return Err(StrengthsError::UnknownCategory {
                            section: section.to_string(),
                            category: category.clone(),
                        });
                    }
                    scoring::completion::first_unanswered_in_category(
                        &catalog, section, category, &responses,
                    )
                }
                None => catalog.questions(section).iter().position(|question| {
                    question
                        .dimensions
                        .iter()
                        .any(|dimension| !responses.is_answered(question.id, *dimension))
                }),
            };

            match index {
                Some(index) => {
                    let question = &catalog.questions(section)[index];
                    let pending = question
                        .dimensions
                        .iter()
                        .filter(|dimension| !responses.is_answered(question.id, **dimension))
                        .map(|dimension| dimension.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!(
                        "{index}: {} ({} / {}): {}",
                        question.id, question.category_name, question.subcategory_name, question.text
                    );
                    if pending.is_empty() {
                        println!("all dimensions answered");
                    } else {
                        println!("unanswered: {pending}");
                    }
                }
                None => println!("section {section} is complete"),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Status(cmd) => {
            let responses = load_responses(&state_path)?;
            match (cmd.section, cmd.category) {
                (Some(section_arg), Some(category)) => {
                    let section: SectionId = section_arg.into();
                    if !catalog.has_category(section, &category) {
                        return Err(StrengthsError::UnknownCategory {
                            section: section.to_string(),
                            category,
                        });
                    }
                    let completion = scoring::completion::category_completion(
                        &catalog, section, &category, &responses,
                    );
                    println!(
                        "{section}/{category}: {}/{} ({}%)",
                        completion.answered, completion.total, completion.percentage
                    );
                }
                (Some(section_arg), None) => {
                    let section: SectionId = section_arg.into();
                    let completion =
                        scoring::completion::section_completion(&catalog, section, &responses);
                    println!(
                        "{section}: {}/{} ({}%)",
                        completion.answered, completion.total, completion.percentage
                    );
                }
                (None, _) => {
                    let overall = scoring::completion::overall_completion(&catalog, &responses);
                    println!(
                        "overall: {}/{} ({}%)",
                        overall.answered, overall.total, overall.percentage
                    );
                    for section in SectionId::ALL {
                        let completion =
                            scoring::completion::section_completion(&catalog, section, &responses);
                        println!(
                            "  {section}: {}/{} ({}%)",
                            completion.answered, completion.total, completion.percentage
                        );
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Results(cmd) => {
            let responses = load_responses(&state_path)?;
            let format = resolve_format(cmd.format, config.as_ref());
            let rendered = match cmd.section {
                Some(section_arg) => match SectionId::from(section_arg) {
                    SectionId::Preferences => report::render_preferences(
                        &scoring::preferences::calculate(
                            catalog.categories(SectionId::Preferences),
                            &responses,
                        ),
                        format,
                    )?,
                    SectionId::Environment => report::render_environment(
                        &scoring::environment::calculate(
                            catalog.categories(SectionId::Environment),
                            &responses,
                        ),
                        format,
                    )?,
                    SectionId::Accommodations => report::render_accommodations(
                        &scoring::accommodations::calculate(
                            catalog.categories(SectionId::Accommodations),
                            &responses,
                        ),
                        format,
                    )?,
                },
                None => report::render_all(&scoring::all_results(&catalog, &responses), format)?,
            };
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Export(cmd) => {
            let responses = load_responses(&state_path)?;
            if responses.is_empty() {
                tracing::warn!("no answers recorded yet; the export will be empty");
            }
            let json = store::export_json(&responses)?;
            match cmd.output {
                Some(path) => {
                    std::fs::write(&path, &json)?;
                    println!("exported {} responses to {}", responses.len(), path.display());
                }
                None => println!("{json}"),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Import(cmd) => {
            let raw = std::fs::read_to_string(&cmd.file)?;
            let responses = store::import_json(&raw)?;
            store::save(&state_path, &responses, SectionId::Preferences, 0)?;
            println!("imported {} responses", responses.len());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Reset(cmd) => {
            if !cmd.yes {
                eprintln!("reset discards all saved answers; pass --yes to confirm");
                return Ok(exit_code::WARNINGS);
            }
            store::clear(&state_path)?;
            println!("cleared saved progress");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn load_responses(path: &Path) -> Result<Responses> {
    Ok(store::load(path)?
        .map(|state| state.responses)
        .unwrap_or_default())
}

fn resolve_state_path(cli: &cli::Cli, config: Option<&StrengthsConfig>) -> PathBuf {
    if let Some(path) = &cli.state {
        return path.clone();
    }
    config
        .and_then(|cfg| cfg.state_file())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_STATE_FILE))
}

fn resolve_format(
    flag: Option<cli::ReportFormat>,
    config: Option<&StrengthsConfig>,
) -> report::OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match config.and_then(|cfg| cfg.format()) {
            Some(ConfiguredFormat::Json) => report::OutputFormat::Json,
            Some(ConfiguredFormat::Md) | None => report::OutputFormat::Md,
        },
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_directive = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
