//! Command line front end for locale coverage and permission masks.

use std::path::PathBuf;

use anyhow::{
    Context,
    Result,
};
use chat_ui_core::config::ConfigManager;
use chat_ui_core::locale::TranslationPolicy;
use chat_ui_core::permissions::{
    granted,
    toggle_by_ids,
};
use chat_ui_core::report::{
    file_coverage,
    workspace_report,
};
use clap::{
    Parser,
    Subcommand,
    ValueEnum,
};
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "chat-ui-core", version, about)]
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Coverage of one locale file against the base locale file.
    Coverage {
        /// Base locale file.
        base: PathBuf,
        /// Omit to report the base against nothing (0%).
        candidate: Option<PathBuf>,
        /// How a translated leaf is recognized.
        #[arg(long, value_enum, default_value_t = PolicyArg::Distinct)]
        policy: PolicyArg,
        /// Joins nested keys in the missing list.
        #[arg(long, default_value = ".")]
        separator: String,
    },
    /// Coverage of every locale file found in a workspace.
    Report {
        /// Workspace root holding `.chat-ui.json`.
        #[arg(long, default_value = ".")]
        workspace: PathBuf,
    },
    /// Toggles named permissions on a mask.
    Permissions {
        /// Starting mask.
        mask: u64,
        /// Catalog identifier, e.g. `MANAGE_ROLES`. Repeatable.
        #[arg(long = "toggle", value_name = "NAME")]
        toggles: Vec<String>,
    },
}

/// `--policy` values.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Translation must differ from the base text.
    Distinct,
    /// Any non-empty translation counts.
    Presence,
}

impl From<PolicyArg> for TranslationPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Distinct => Self::DistinctValue,
            PolicyArg::Presence => Self::Presence,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let (writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(writer)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Coverage { base, candidate, policy, separator } => {
            let report = file_coverage(&base, candidate.as_deref(), policy.into(), &separator)?;
            print_lines(
                std::iter::once(format!(
                    "{:.2}% ({}/{})",
                    report.percent(),
                    report.translated,
                    report.total
                ))
                .chain(report.missing.iter().map(|key| format!("  missing: {key}"))),
            );
        }
        Command::Report { workspace } => {
            let mut manager = ConfigManager::new();
            manager
                .load_settings(Some(&workspace))
                .with_context(|| format!("Failed to load settings from {}", workspace.display()))?;
            let languages =
                workspace_report(&workspace, manager.get_settings(), num_cpus::get()).await?;
            print_lines(languages.into_iter().map(|language| match language.result {
                Ok(report) => format!(
                    "{}\t{:.2}%\t{}/{}",
                    language.key,
                    report.percent(),
                    report.translated,
                    report.total
                ),
                Err(err) => {
                    tracing::warn!(%err, "Skipping locale file");
                    format!("{}\terror\t{err}", language.key)
                }
            }));
        }
        Command::Permissions { mask, toggles } => {
            let mask = toggle_by_ids(mask, toggles.as_slice())?;
            print_lines(
                std::iter::once(mask.to_string())
                    .chain(granted(mask).map(|permission| format!("  [x] {}", permission.id))),
            );
        }
    }
    Ok(())
}

/// Writes command output to stdout.
#[allow(clippy::print_stdout)]
fn print_lines(lines: impl Iterator<Item = String>) {
    for line in lines {
        println!("{line}");
    }
}
