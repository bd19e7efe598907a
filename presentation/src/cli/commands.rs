//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use finruimte_domain::{
    AnswerSet, ExistingFinancing, LegalForm, Profitability, Purpose, RevenueBand, YesNo,
};
use std::path::PathBuf;

/// Output format for estimation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Range, bucket, notes and suggested next steps
    Full,
    /// Heading and range only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for finruimte_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => finruimte_domain::OutputFormat::Full,
            OutputFormat::Summary => finruimte_domain::OutputFormat::Summary,
            OutputFormat::Json => finruimte_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for finruimte
#[derive(Parser, Debug)]
#[command(name = "finruimte")]
#[command(author, version, about = "Indicative financing headroom estimate for small businesses")]
#[command(long_about = r#"
finruimte estimates how much financing room a small business might have,
based on seven coarse questions. The result is an indicative euro range and
one of three buckets:

  A  Headroom likely available
  B  Uncertain / dependent
  C  Likely constrained

This is not an offer, not advice and not a credit assessment.

Configuration files are loaded from (in priority order):
1. FINRUIMTE_* environment variables
2. --config <path>       Explicit config file
3. ./finruimte.toml      Project-level config
4. ~/.config/finruimte/config.toml   Global config

Example:
  finruimte estimate --active yes --revenue 100-250k --profitability profit \
      --financing none --purpose investment --guarantee yes
  finruimte wizard
  finruimte events export
"#)]
pub struct Cli {
    /// What to run (defaults to the interactive wizard)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Do not record session events
    #[arg(long, global = true)]
    pub no_events: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Estimate headroom from answers given as flags
    Estimate(EstimateArgs),
    /// Answer the questions step by step
    Wizard,
    /// Inspect or clear the local event log
    Events {
        #[command(subcommand)]
        action: EventsCommand,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventsCommand {
    /// Print every stored event as a JSON array
    Export,
    /// Delete the event log
    Clear,
}

/// Answers for a one-shot estimate. Omitted answers stay unanswered.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct EstimateArgs {
    /// sole_proprietorship | limited_company
    #[arg(long, value_name = "FORM")]
    pub legal_form: Option<LegalForm>,

    /// Trading for at least 12 months: yes | no
    #[arg(long, value_name = "YES|NO")]
    pub active: Option<YesNo>,

    /// Annual revenue: 50-100k | 100-250k | 250-1000k | 1000k+
    #[arg(long, value_name = "BAND")]
    pub revenue: Option<RevenueBand>,

    /// Last year: loss | breakeven | profit
    #[arg(long, value_name = "RESULT")]
    pub profitability: Option<Profitability>,

    /// Outstanding financing: none | under_50k | 50k_or_more
    #[arg(long, value_name = "AMOUNT")]
    pub financing: Option<ExistingFinancing>,

    /// What the money is for: working_capital | investment | refinancing
    #[arg(long, value_name = "PURPOSE")]
    pub purpose: Option<Purpose>,

    /// Personal guarantee possible: yes | no
    #[arg(long, value_name = "YES|NO")]
    pub guarantee: Option<YesNo>,
}

impl EstimateArgs {
    pub fn to_answers(&self) -> AnswerSet {
        AnswerSet {
            legal_form: self.legal_form,
            active_12_months: self.active,
            revenue_band: self.revenue,
            profitability: self.profitability,
            existing_financing: self.financing,
            purpose: self.purpose,
            personal_guarantee_possible: self.guarantee,
        }
    }
}
