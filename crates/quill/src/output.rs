//! Status lines on stderr.
//!
//! Stdout is reserved for generated documents (`quill query` without
//! `--output`), so every report goes to stderr.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};

/// Reporter for command progress.
pub(crate) struct Output {
    term: Term,
    label: Style,
    done: Style,
    failed: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            label: Style::new().cyan().bold(),
            done: Style::new().green(),
            failed: Style::new().red(),
        }
    }

    /// Where configuration came from.
    pub(crate) fn config_source(&self, path: Option<&Path>) {
        let source = path.map_or_else(|| "defaults".to_owned(), |p| p.display().to_string());
        self.field("Config", &source);
    }

    /// Address the server is about to bind.
    pub(crate) fn listening(&self, host: &str, port: u16) {
        self.field("Serving", &format!("http://{host}:{port}/"));
    }

    /// A rendered document was written to `path`.
    pub(crate) fn document_written(&self, rows: usize, path: &Path) {
        let line = written_line(rows, path);
        let _ = self.term.write_line(&self.done.apply_to(line).to_string());
    }

    /// Fatal command error.
    pub(crate) fn error(&self, err: &dyn Display) {
        let line = format!("Error: {err}");
        let _ = self.term.write_line(&self.failed.apply_to(line).to_string());
    }

    fn field(&self, label: &str, value: &str) {
        let _ = self
            .term
            .write_line(&format!("{} {value}", self.label.apply_to(format!("{label}:"))));
    }
}

fn written_line(rows: usize, path: &Path) -> String {
    let noun = if rows == 1 { "row" } else { "rows" };
    format!("Wrote {rows} {noun} to {}", path.display())
}
