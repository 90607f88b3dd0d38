pub mod assemble;
pub mod error;
pub mod reorder;
pub mod rules;
pub mod split;

pub use error::FormatError;
pub use rules::Rules;

/// Formatter entry point.
///
/// Holds the reordering rules; one instance can format any number of
/// independent documents.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    rules: Rules,
}

impl Formatter {
    pub fn new(rules: Rules) -> Self {
        Formatter { rules }
    }

    /// Reorder the keys of every top-level mapping in `source` and
    /// reassemble the document.
    ///
    /// The source file ID is threaded into errors for diagnostic display
    /// with codespan-reporting.
    pub fn format(&self, source: &str, file_id: usize) -> Result<String, FormatError> {
        let (header, raw_blocks) = split::split_blocks(source, file_id)?;
        let blocks: Vec<String> = raw_blocks
            .iter()
            .map(|raw| assemble::assemble_block(&reorder::reorder_block(&self.rules, raw)))
            .collect();
        Ok(assemble::assemble_document(header, &blocks))
    }
}

/// Format a document with the default rules.
pub fn fmt(source: &str) -> Result<String, FormatError> {
    Formatter::default().format(source, 0)
}
