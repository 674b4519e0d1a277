//! Report output to standard output or a file.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use cage_model::{CageError, Result};
use tracing::{debug, info};

/// Where a rendered report goes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReportTarget {
    #[default]
    Stdout,
    /// Created if missing, truncated otherwise.
    File(PathBuf),
}

impl ReportTarget {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Buffered writer for rendered reports.
pub struct ReportWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Write the report verbatim and flush.
    pub fn write_report(mut self, report: &str) -> io::Result<()> {
        self.writer.write_all(report.as_bytes())?;
        self.writer.flush()
    }

    /// Write the report followed by a newline and flush.
    pub fn write_report_line(mut self, report: &str) -> io::Result<()> {
        self.writer.write_all(report.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl ReportWriter<std::fs::File> {
    /// Open `path` for writing, replacing any existing contents.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(Self::new(file))
    }
}

/// Send a rendered report to `target`.
///
/// Standard output receives the report followed by a newline. A file
/// receives the report exactly and is closed before returning, including
/// when the write fails.
///
/// # Errors
///
/// Returns [`CageError::Io`] when the file cannot be created or written and
/// [`CageError::Stdout`] when standard output is closed.
pub fn write_report(report: &str, target: &ReportTarget) -> Result<()> {
    write_report_with(report, target, io::stdout().lock())
}

/// [`write_report`] with `stdout` standing in for standard output.
///
/// `stdout` is only written when `target` is [`ReportTarget::Stdout`].
///
/// # Errors
///
/// As for [`write_report`].
pub fn write_report_with<W: Write>(report: &str, target: &ReportTarget, stdout: W) -> Result<()> {
    match target {
        ReportTarget::Stdout => {
            ReportWriter::new(stdout)
                .write_report_line(report)
                .map_err(CageError::Stdout)?;
            debug!(bytes = report.len(), "wrote partition report to stdout");
        }
        ReportTarget::File(path) => {
            let to_error = |source| CageError::Io {
                path: path.clone(),
                source,
            };
            ReportWriter::create(path)
                .and_then(|writer| writer.write_report(report))
                .map_err(to_error)?;
            info!(path = %path.display(), bytes = report.len(), "wrote partition report");
        }
    }
    Ok(())
}
