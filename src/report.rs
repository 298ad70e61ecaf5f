//! Final run summary and the sinks that display it.

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

/// Summary of a converged run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    /// Number of generations executed, counting the converging one.
    pub generations: usize,

    /// Gene string of the configured target.
    pub target_genes: String,

    /// Gene string of the candidate that first reached the target fitness.
    ///
    /// Convergence compares fitness only, so this may be any arrangement
    /// with the target's number of ones rather than the target pattern
    /// itself.
    pub found_genes: String,

    /// Fitness shared by the target and the found candidate.
    pub fitness: usize,

    /// Wall-clock time spent in the generation loop.
    pub elapsed: Duration,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[FINAL REPORT]")?;
        writeln!(f, "NUMBER OF GENERATION: {}", self.generations)?;
        writeln!(f, "SOLUTION GENES: {}", self.target_genes)?;
        write!(f, "FOUND INDIVIDUAL GENES: {}", self.found_genes)
    }
}

/// Receives the summary of a finished run.
pub trait Reporter {
    /// Publishes `report`.
    fn report(&mut self, report: &RunReport) -> io::Result<()>;
}

/// Writes the timing line and the final report as text.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, report: &RunReport) -> io::Result<()> {
        writeln!(
            self.out,
            "Genetic Algorithm: {:.3}ms",
            report.elapsed.as_secs_f64() * 1000.0
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "{report}")?;
        self.out.flush()
    }
}
