//! Report rendering.
//!
//! Handles the per-run text block and the closing summary line.

use crate::benchmark::Report;
use std::io::{self, Stdout, Write};
use tracing::warn;

/// Something that can render benchmark reports.
pub trait Reporter {
    fn report(&mut self, report: &Report);

    /// Render the average nanoseconds per allocation over all runs.
    fn summary(&mut self, average_nanos_per_alloc: i64);
}

/// Writes reports as plain text, to stdout unless told otherwise.
pub struct StdioReporter<W: Write = Stdout> {
    out: W,
}

impl StdioReporter<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> StdioReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_report(&mut self, report: &Report) -> io::Result<()> {
        write!(self.out, "{}", report.description)?;
        writeln!(
            self.out,
            "Number of allocations/deallocations = {}",
            report.allocation_count
        )?;
        writeln!(
            self.out,
            "Total time: {} seconds, {} nseconds.",
            report.elapsed_seconds, report.elapsed_nanoseconds
        )?;
        self.out.flush()
    }
}

impl<W: Write> Reporter for StdioReporter<W> {
    fn report(&mut self, report: &Report) {
        // A broken output stream does not stop the benchmark
        if let Err(e) = self.write_report(report) {
            warn!(error = %e, "failed to write report");
        }
    }

    fn summary(&mut self, average_nanos_per_alloc: i64) {
        if let Err(e) = writeln!(self.out, "{}", average_nanos_per_alloc) {
            warn!(error = %e, "failed to write summary");
        }
    }
}
