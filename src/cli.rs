use crate::types::response::{Dimension, SectionId};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "strengths",
    version,
    about = "Design strengths and work needs self-assessment CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Override the state file path
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a rating for one statement dimension
    Rate(RateCommand),
    /// List a section's questions in catalog order with answer markers
    List(ListCommand),
    /// Show the next unanswered question
    Next(NextCommand),
    /// Show completion counters
    Status(StatusCommand),
    /// Render scored results
    Results(ResultsCommand),
    /// Write the responses as a portable JSON export
    Export(ExportCommand),
    /// Replace stored responses with a previously exported file
    Import(ImportCommand),
    /// Delete all saved progress
    Reset(ResetCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SectionArg {
    Preferences,
    Environment,
    Accommodations,
}

impl From<SectionArg> for SectionId {
    fn from(value: SectionArg) -> Self {
        match value {
            SectionArg::Preferences => SectionId::Preferences,
            SectionArg::Environment => SectionId::Environment,
            SectionArg::Accommodations => SectionId::Accommodations,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DimensionArg {
    Interest,
    Confidence,
    Importance,
    Current,
    Need,
    Toggle,
}

impl From<DimensionArg> for Dimension {
    fn from(value: DimensionArg) -> Self {
        match value {
            DimensionArg::Interest => Dimension::Interest,
            DimensionArg::Confidence => Dimension::Confidence,
            DimensionArg::Importance => Dimension::Importance,
            DimensionArg::Current => Dimension::Current,
            DimensionArg::Need => Dimension::Need,
            DimensionArg::Toggle => Dimension::Toggle,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Md,
    Json,
}

#[derive(Args)]
pub struct RateCommand {
    pub section: SectionArg,
    pub statement: String,
    #[arg(value_enum)]
    pub dimension: DimensionArg,
    /// Rating on the internal 0..4 scale (toggles take 0 or 1)
    #[arg(value_parser = clap::value_parser!(u8).range(0..=4))]
    pub value: u8,
}

#[derive(Args)]
pub struct ListCommand {
    pub section: SectionArg,
}

#[derive(Args)]
pub struct NextCommand {
    pub section: SectionArg,
    /// Restrict the scan to one category
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct StatusCommand {
    #[arg(long, value_enum)]
    pub section: Option<SectionArg>,
    /// Category drill-down; requires --section
    #[arg(long, requires = "section")]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ResultsCommand {
    /// Section to score; all three when omitted
    pub section: Option<SectionArg>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ExportCommand {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportCommand {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ResetCommand {
    /// Confirm deletion
    #[arg(long, short)]
    pub yes: bool,
}
