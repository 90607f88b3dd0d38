use crate::split::Block;

/// Re-emit one block: wrapper header first when present, then the items
/// joined by single newlines. No blank lines inside a block.
pub fn assemble_block(block: &Block) -> String {
    let body = block.items.join("\n");
    match &block.header {
        Some(header) => format!("{header}\n{body}"),
        None => body,
    }
}

/// Join assembled blocks into the final document: the sequence marker
/// replaces the first pad character of each block, consecutive blocks are
/// separated by exactly one blank line, and the header is emitted
/// verbatim once.
pub fn assemble_document(header: &str, blocks: &[String]) -> String {
    let body = blocks
        .iter()
        .map(|block| retick(block))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{header}\n{body}\n")
}

/// Put the sequence marker back over the two-space pad inserted by the
/// block splitter.
fn retick(block: &str) -> String {
    match block.strip_prefix(' ') {
        Some(rest) => format!("-{rest}"),
        None => block.to_string(),
    }
}
