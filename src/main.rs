use std::process::ExitCode;

use dalamud_beta::{Cli, Options, PatchError, PatchOutcome, config_path, logging, run};

fn patch(options: &Options) -> Result<PatchOutcome, PatchError> {
    let path = config_path()?;
    tracing::debug!(path = %path.display(), "resolved config path");
    run(&path, options)
}

fn main() -> ExitCode {
    let cli = Cli::parse_normalized();
    logging::init(cli.verbose);
    let options = cli.into_options();

    match patch(&options) {
        Ok(outcome @ PatchOutcome::Preview { .. }) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Ok(outcome) => {
            tracing::info!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "patch failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
