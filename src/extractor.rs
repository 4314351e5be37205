// src/extractor.rs - Pull prediction inputs out of a log and write them as CSV
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::Path;
use std::time::{Duration, Instant};

use serde_json::{Map, Value};

use crate::config::ExtractorConfig;
use crate::error::{ExtractError, RecordError};
use crate::literal::parse_mapping;
use crate::output_table::OutputTable;
use crate::projection::flatten_record;

/// Runtime statistics for one conversion
#[derive(Debug, Default, Clone)]
pub struct ExtractionStats {
    pub lines_read: usize,
    pub records_extracted: usize,
    pub columns: Vec<String>,
    pub processing_time: Duration,
}

pub struct LogRecordExtractor {
    config: ExtractorConfig,
}

impl Default for LogRecordExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl LogRecordExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        LogRecordExtractor { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Locate the mapping literal in a marked line.
    ///
    /// The literal runs from just after the first prefix occurrence up to the
    /// terminator, or up to a second prefix occurrence, whichever comes first.
    /// Without a terminator the rest of the line is taken.
    pub fn literal_segment<'l>(&self, line: &'l str) -> Result<&'l str, RecordError> {
        let prefix = self.config.literal_prefix.as_str();
        let start = line
            .find(prefix)
            .map(|idx| idx + prefix.len())
            .ok_or_else(|| RecordError::MissingPrefix {
                marker: self.config.marker.clone(),
                prefix: prefix.to_string(),
            })?;

        let mut segment = &line[start..];
        if let Some(end) = segment.find(prefix) {
            segment = &segment[..end];
        }
        if let Some(end) = segment.find(self.config.terminator.as_str()) {
            segment = &segment[..end];
        }
        Ok(segment.trim())
    }

    /// Turn one log line into a flat row; `Ok(None)` for unmarked lines.
    pub fn extract_record(&self, line: &str) -> Result<Option<Map<String, Value>>, RecordError> {
        if !line.contains(self.config.marker.as_str()) {
            return Ok(None);
        }
        let segment = self.literal_segment(line)?;
        let record = parse_mapping(segment)?;
        Ok(Some(flatten_record(&record)?))
    }

    /// Read every line of `input` into a table. Stops at the first malformed
    /// record.
    pub fn read_table<R: BufRead>(
        &self,
        input: R,
    ) -> Result<(OutputTable, ExtractionStats), ExtractError> {
        let start_time = Instant::now();
        let mut stats = ExtractionStats::default();
        let mut table = match &self.config.keys {
            Some(keys) => OutputTable::with_keys(keys.clone()),
            None => OutputTable::new(),
        };

        for (index, line_result) in input.lines().enumerate() {
            let line = line_result?;
            let line_number = index + 1;
            stats.lines_read += 1;

            let row = self
                .extract_record(&line)
                .map_err(|source| ExtractError::MalformedRecord {
                    line: line_number,
                    source,
                })?;

            if let Some(row) = row {
                if self.config.debug {
                    eprintln!(
                        "predlog: line {}: matched record with {} fields",
                        line_number,
                        row.len()
                    );
                }
                table.push_row(row);
                stats.records_extracted += 1;
            }
        }

        stats.columns = table.columns().iter().cloned().collect();
        stats.processing_time = start_time.elapsed();
        Ok((table, stats))
    }

    /// Convert the log at `input_path` into a CSV at `output_path`.
    ///
    /// The whole log is read before the output is touched, so a missing input
    /// or a malformed record leaves no output file behind. An existing output
    /// file is overwritten.
    pub fn extract_and_convert(
        &self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<ExtractionStats, ExtractError> {
        let file = File::open(input_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExtractError::InputNotFound {
                path: input_path.to_path_buf(),
            },
            _ => ExtractError::Io(e),
        })?;

        if self.config.debug {
            eprintln!("predlog: reading from {}", input_path.display());
        }

        let (table, stats) = self.read_table(BufReader::new(file))?;

        let output = BufWriter::new(File::create(output_path)?);
        table.write_csv(output)?;

        if self.config.debug {
            eprintln!(
                "predlog: wrote {} rows to {}",
                table.len(),
                output_path.display()
            );
        }

        Ok(stats)
    }
}
