use super::cli::OutputFormat;
use super::error::CliError;
use coulomb_variants::report::{format_charge, format_significant, format_variant_line};
use coulomb_variants::{ChargePair, ForcePair};
use prettytable::*;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Writes variants one record at a time in the selected format.
///
/// Every format except `Table` emits each record as soon as it is written, so records that
/// precede a failure stay in the output.
pub struct RecordWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    accuracy: u32,
    records: usize,
    table: Table,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W, format: OutputFormat, accuracy: u32) -> Self {
        let mut table = Table::new();
        table.set_titles(row![bc->"Index", bc->"q2 (nKL)", bc->"q3 (nKL)", bc->"F2 (nH)", bc->"F3 (nH)"]);
        Self {
            writer,
            format,
            accuracy,
            records: 0,
            table,
        }
    }

    pub fn begin(&mut self) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Csv => writeln!(self.writer, "q2_nkl,q3_nkl,f2_nh,f3_nh")?,
            OutputFormat::Json => {
                writeln!(self.writer, "{{")?;
                writeln!(self.writer, "  \"accuracy\": {},", self.accuracy)?;
                write!(self.writer, "  \"variants\": [")?;
            }
            OutputFormat::Text | OutputFormat::Table => {}
        }
        Ok(())
    }

    pub fn write_record(&mut self, pair: &ChargePair, forces: &ForcePair) -> Result<(), CliError> {
        let digits = self.accuracy as usize;
        match self.format {
            OutputFormat::Text => {
                writeln!(
                    self.writer,
                    "{}",
                    format_variant_line(pair, forces, self.accuracy)
                )?;
            }
            OutputFormat::Table => {
                self.table.add_row(row![
                    r->self.records,
                    r->format_charge(pair.q2),
                    r->format_charge(pair.q3),
                    r->format_significant(forces.f2, digits),
                    r->format_significant(forces.f3, digits)
                ]);
            }
            OutputFormat::Csv => {
                writeln!(
                    self.writer,
                    "{},{},{},{}",
                    format_charge(pair.q2),
                    format_charge(pair.q3),
                    format_significant(forces.f2, digits),
                    format_significant(forces.f3, digits)
                )?;
            }
            OutputFormat::Json => {
                let separator = if self.records == 0 { "" } else { "," };
                writeln!(self.writer, "{}", separator)?;
                write!(
                    self.writer,
                    "    {{ \"q2\": {}, \"q3\": {}, \"f2\": {}, \"f3\": {} }}",
                    pair.q2, pair.q3, forces.f2, forces.f3
                )?;
            }
        }
        self.records += 1;
        Ok(())
    }

    pub fn finish(&mut self) -> Result<usize, CliError> {
        match self.format {
            OutputFormat::Table => self.write_table()?,
            OutputFormat::Json => {
                if self.records > 0 {
                    writeln!(self.writer)?;
                    writeln!(self.writer, "  ]")?;
                } else {
                    writeln!(self.writer, "]")?;
                }
                writeln!(self.writer, "}}")?;
            }
            OutputFormat::Text | OutputFormat::Csv => {}
        }
        self.writer.flush()?;
        Ok(self.records)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_table(&mut self) -> Result<(), CliError> {
        let box_format = format::FormatBuilder::new()
            .column_separator('│')
            .borders('│')
            .separators(
                &[format::LinePosition::Top],
                format::LineSeparator::new('─', '┬', '╭', '╮'),
            )
            .separators(
                &[format::LinePosition::Title],
                format::LineSeparator::new('═', '╪', '╞', '╡'),
            )
            .separators(
                &[format::LinePosition::Bottom],
                format::LineSeparator::new('─', '┴', '╰', '╯'),
            )
            .padding(1, 1)
            .build();

        let mut summary_table = Table::new();
        summary_table.set_format(box_format);
        summary_table.add_row(row![b->"Accuracy:", self.accuracy]);
        summary_table.add_row(row![b->"Variants:", self.records]);
        summary_table.print(&mut self.writer)?;
        writeln!(self.writer)?;

        self.table.set_format(box_format);
        self.table.print(&mut self.writer)?;
        Ok(())
    }
}
