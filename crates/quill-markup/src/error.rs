//! Error types for document building.

/// Boxed error reported by an external data collaborator (e.g. a query cursor).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Contract violation while building a document.
///
/// These signal caller bugs rather than transient conditions, so they are
/// propagated immediately and never retried.
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    /// `when` called while a conditional block is already active.
    #[error("nested conditional blocks are not supported")]
    NestedCondition,

    /// `otherwise` called outside a conditional block.
    #[error("otherwise() called without an active when()")]
    OtherwiseWithoutWhen,

    /// `end_when` called outside a conditional block.
    #[error("end_when() called without an active when()")]
    EndWithoutWhen,

    /// `try_close_until` target is not on the tag stack.
    #[error("tag <{0}> is not open")]
    TagNotOpen(String),

    /// A record generator received a value of another shape.
    #[error("{generator} expects a record, got {found}")]
    NotARecord {
        /// Name of the generator that rejected the value.
        generator: &'static str,
        /// Shape of the value that was passed.
        found: &'static str,
    },

    /// A mapping generator received a value of another shape.
    #[error("{generator} expects a mapping, got {found}")]
    NotAMapping {
        /// Name of the generator that rejected the value.
        generator: &'static str,
        /// Shape of the value that was passed.
        found: &'static str,
    },

    /// A sequence generator received a value of another shape.
    #[error("{generator} expects a sequence, got {found}")]
    NotASequence {
        /// Name of the generator that rejected the value.
        generator: &'static str,
        /// Shape of the value that was passed.
        found: &'static str,
    },

    /// The cursor could not enumerate its columns.
    #[error("Failed to read cursor columns: {0}")]
    CursorColumns(#[source] BoxError),

    /// The cursor could not scan the current row.
    #[error("Failed to scan cursor row {row}: {source}")]
    CursorScan {
        /// Zero-based index of the row that failed.
        row: usize,
        /// Error reported by the cursor.
        #[source]
        source: BoxError,
    },
}
