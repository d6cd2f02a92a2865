use crate::assess::{run_assess, run_show, AssessArgs, ShowArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use estate_scope::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Estate Scope Assessment",
    about = "Score, classify, and price estate oversight engagements",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate an assessment described entirely by command-line flags
    Assess(AssessArgs),
    /// Evaluate the assessment saved in the configured slot file
    Show(ShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Show(args) => run_show(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_scope::workflows::assessment::{AvailabilityLevel, FailureImpact};

    #[test]
    fn parses_assess_flags() {
        let cli = Cli::try_parse_from([
            "estate-scope",
            "assess",
            "--availability",
            "never-fail",
            "--failure-impact",
            "FINANCIAL_LOSS",
            "--vendor-entity-count",
            "12",
            "--json",
        ])
        .expect("flags parse");

        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.availability, Some(AvailabilityLevel::NeverFail));
                assert_eq!(args.failure_impact, Some(FailureImpact::FinancialLoss));
                assert_eq!(args.vendor_entity_count, Some(12));
                assert!(args.json);
            }
            other => panic!("expected assess command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_option_tokens() {
        let result = Cli::try_parse_from(["estate-scope", "assess", "--reporting", "weekly"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["estate-scope"]).expect("parses");
        assert!(cli.command.is_none());
    }
}
