use clap::{ArgAction, Args, Parser, ValueEnum};
use coulomb_variants::math::constants::{DEFAULT_ACCURACY, MAX_ACCURACY};
use std::path::PathBuf;

const AUTHORS: &str = "Tony Kan";
const ABOUT: &str = "A command-line tool that enumerates negative charge pairs on a 3-4-5 right triangle and computes the Coulomb forces they exert on the positive charge.";
const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = AUTHORS,
    version,
    about = ABOUT,
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub enumeration: EnumerationArgs,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub logging: LoggingOptions,
}

/// Options for controlling which variants are enumerated.
#[derive(Args, Debug)]
#[command(next_help_heading = "Enumeration Options")]
pub struct EnumerationArgs {
    /// Number of digits after the decimal point of the charges.
    ///
    /// Charges are stepped by 10^-ACCURACY nKL, giving 10^ACCURACY - 1 variants. Forces are
    /// reported with ACCURACY significant digits.
    #[arg(
        short,
        long,
        value_name = "DIGITS",
        default_value_t = DEFAULT_ACCURACY,
        value_parser = clap::value_parser!(u32).range(0..=MAX_ACCURACY as i64),
    )]
    pub accuracy: u32,
}

/// Options for controlling the output format and destination.
#[derive(Args, Debug)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Options for controlling diagnostic logging on standard error.
#[derive(Args, Debug)]
#[command(next_help_heading = "Logging Options")]
pub struct LoggingOptions {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence all logging.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One sentence per variant naming both charges and their forces.
    Text,
    /// Pretty-printed table with charges and forces, written once all variants are computed.
    Table,
    /// Comma-separated values with columns: q2_nkl, q3_nkl, f2_nh, f3_nh.
    Csv,
    /// JSON object containing the accuracy and the variants array.
    Json,
}
