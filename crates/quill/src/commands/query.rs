//! `quill query` command implementation.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Args;
use quill_config::Config;
use quill_markup::{Document, MarkupError, NewlineMode, ResultCursor, escape_html};
use quill_sql::{SqliteCursor, open_read_only};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the query command.
#[derive(Args)]
pub(crate) struct QueryArgs {
    /// SQLite database file (opened read-only).
    #[arg(short, long, env = "QUILL_DATABASE")]
    database: PathBuf,

    /// SQL query to run.
    #[arg(short, long)]
    sql: String,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page title (overrides config).
    #[arg(short, long)]
    title: Option<String>,

    /// Path to configuration file (default: auto-discover quill.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl QueryArgs {
    /// Execute the query command.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried or the document
    /// cannot be written.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        let pool = open_read_only(&self.database).await?;
        let mut cursor = SqliteCursor::query(&pool, &self.sql).await?;
        let rows = cursor.len();
        pool.close().await;

        let title = self.title.as_deref().unwrap_or(&config.document.title);
        let doc = render_query_page(&config, title, &mut cursor)?;

        if let Some(path) = &self.output {
            doc.write_to(BufWriter::new(File::create(path)?))?;
            output.document_written(rows, path);
        } else {
            doc.write_to(io::stdout().lock())?;
        }

        Ok(())
    }
}

/// Complete HTML document with the cursor's columns as header row and one
/// body row per result row.
fn render_query_page<C: ResultCursor>(
    config: &Config,
    title: &str,
    cursor: &mut C,
) -> Result<Document, MarkupError> {
    let document = &config.document;
    let table = &config.table;

    let mut doc = Document::new(
        &document.doctype,
        NewlineMode::from_bits(document.newline_bits()),
    );
    let title = escape_html(title);
    doc.html_open(&[])
        .head_open(&[])
        .meta(&["charset", "utf-8"])
        .title(&title, &[])
        .close_until("head")
        .body_open(&[]);

    let table_attrs = if table.table_class.is_empty() {
        Vec::new()
    } else {
        vec!["class", table.table_class.as_str()]
    };
    doc.table_open(&table_attrs);
    if let Some(caption) = &table.caption {
        doc.caption(&escape_html(caption), &[]);
    }
    doc.thead_open(&[])
        .tr_th_cursor(&table.row_class, &table.header_class, cursor)?
        .close_until("thead")
        .tbody_open(&[])
        .tr_td_cursor(&table.row_class, &table.data_class, cursor)?
        .close_all();

    Ok(doc)
}
