use super::cli::Cli;
use super::error::CliError;
use super::io::{self, RecordWriter};
use coulomb_variants::{ChargePair, EnumerationOptions, generate_all_variants};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use tracing::{debug, info};

pub fn run(args: Cli) -> Result<(), CliError> {
    let options = EnumerationOptions::with_accuracy(args.enumeration.accuracy);
    debug!(
        "Enumerating {} variants at accuracy {} as {:?}",
        options.variant_count(),
        options.accuracy,
        args.output.format
    );

    let variants = generate_all_variants(options.accuracy)?;

    let pb = if args.output.output.is_some() {
        let pb = ProgressBar::new(options.variant_count());
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?,
        );
        pb.set_message("Calculating forces...");
        pb
    } else {
        ProgressBar::hidden()
    };

    let writer = io::get_writer(&args.output.output)?;
    let mut records = RecordWriter::new(writer, args.output.format, options.accuracy);

    let written = write_variants(variants, &mut records, &pb)?;

    match &args.output.output {
        Some(path) => info!("Wrote {} variants to '{}'", written, path.display()),
        None => info!("Wrote {} variants", written),
    }

    Ok(())
}

/// Computes and writes each pair in turn, stopping at the first failure.
///
/// Records written before the failure are left in the writer. The progress bar is cleared on
/// every exit path.
fn write_variants<W: Write>(
    variants: impl IntoIterator<Item = ChargePair>,
    records: &mut RecordWriter<W>,
    pb: &ProgressBar,
) -> Result<usize, CliError> {
    let write_all = || -> Result<usize, CliError> {
        records.begin()?;
        for pair in variants {
            let forces = pair.forces()?;
            records.write_record(&pair, &forces)?;
            pb.inc(1);
        }
        records.finish()
    };

    let outcome = write_all();
    pb.finish_and_clear();
    outcome
}
