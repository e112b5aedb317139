#[path = "modules/app.rs"]
mod app;
#[path = "modules/cli.rs"]
mod cli;
#[path = "modules/error.rs"]
mod error;
#[path = "modules/io.rs"]
mod io;
#[path = "modules/logging.rs"]
mod logging;

use clap::Parser;
use std::error::Error;
use std::io::{self as stdio, Write};
use std::process::ExitCode;
use tracing::{debug, info};

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    if let Err(e) = logging::setup_logging(args.logging.verbose, args.logging.quiet) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("coulomb-variants v{} starting up.", env!("CARGO_PKG_VERSION"));

    if let Err(e) = app::run(args) {
        debug!("Run aborted: {:?}", e);
        let _ = write_error_report(&mut stdio::stderr(), &e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn write_error_report(writer: &mut dyn Write, e: &dyn Error) -> stdio::Result<()> {
    writeln!(writer, "Error: {}", e)?;

    let mut source = e.source();
    while let Some(s) = source {
        writeln!(writer, "Caused by: {}", s)?;
        source = s.source();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coulomb_variants::CoulombError;

    #[test]
    fn calculation_error_is_reported_with_its_cause() {
        let e = error::CliError::from(CoulombError::InvalidChargeBalance {
            q2: -0.3,
            q3: -0.3,
            positive: 1.0,
        });
        let mut report = Vec::new();
        write_error_report(&mut report, &e).unwrap();
        let report = String::from_utf8(report).unwrap();

        let mut lines = report.lines();
        assert_eq!(
            lines.next(),
            Some(
                "Error: Calculation error: The sum of negative charges should be equal to positive: |-0.3 + -0.3| != 1 nKL"
            )
        );
        assert_eq!(
            lines.next(),
            Some("Caused by: The sum of negative charges should be equal to positive: |-0.3 + -0.3| != 1 nKL")
        );
        assert_eq!(lines.next(), None);
    }
}
