use crate::error::FormatError;
use crate::rules::Rules;

/// Indentation of a block's top-level keys.
pub const ITEM_INDENT: &str = "  ";
/// Indentation of top-level keys under a wrapper object.
pub const WRAPPED_INDENT: &str = "    ";

/// One top-level sequence element, split into reorderable parts.
#[derive(Debug, Clone)]
pub struct Block {
    /// Wrapper object line (`  job:` etc.), kept verbatim, when the
    /// block uses the wrapper convention.
    pub header: Option<String>,
    /// Indentation of the block's top-level keys.
    pub prefix: &'static str,
    /// One entry per top-level key, each with its full multi-line value.
    pub items: Vec<String>,
}

// ---------------------------------------------------------------------------
// Block splitting
// ---------------------------------------------------------------------------

/// Split a document into its header and one raw text block per top-level
/// sequence element.
///
/// The header is everything before the first sequence marker and may be
/// empty. Within the sequence, blank lines are dropped and trailing
/// whitespace is trimmed; each block's leading `- ` marker is replaced
/// with two spaces so every block body starts at uniform indentation.
pub fn split_blocks(content: &str, file_id: usize) -> Result<(&str, Vec<String>), FormatError> {
    // The header ends at the newline before the first sequence marker;
    // that newline is not kept (assembly re-inserts it).
    let header_end = if content.starts_with("- ") {
        0
    } else {
        match content.find("\n-") {
            Some(pos) => pos,
            None => {
                return Err(FormatError::malformed(
                    "document contains no top-level sequence entry",
                    0..content.len(),
                    file_id,
                )
                .with_note("expected at least one line starting with `- `"));
            }
        }
    };
    let header = &content[..header_end];

    let mut blocks = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    // The synthetic trailing "-" line flushes the last block through the
    // same path as the others; it never becomes a block itself.
    let lines = content[header_end..]
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .chain(std::iter::once("-"));
    for line in lines {
        if line.starts_with('-') && !block.is_empty() {
            blocks.push(strip_markers(&block));
            block.clear();
        }
        block.push(line);
    }

    Ok((header, blocks))
}

fn strip_markers(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| untick(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace a leading `- ` with two spaces, keeping column positions.
fn untick(line: &str) -> String {
    match line.strip_prefix("- ") {
        Some(rest) => format!("  {rest}"),
        None => line.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Wrapper detection and item splitting
// ---------------------------------------------------------------------------

/// Split one raw block into its optional wrapper header and top-level
/// items.
///
/// A block is wrapper-wrapped when its first line is exactly a two-space
/// indent, a recognized wrapper name, and a colon; its keys then sit one
/// level deeper.
pub fn split_block(rules: &Rules, block: &str) -> Block {
    let wrapped = rules
        .wrapper_names
        .iter()
        .any(|name| block.starts_with(&format!("  {name}:\n")));

    if wrapped {
        // The matched pattern ends with a newline, so the split succeeds.
        let (head, body) = match block.split_once('\n') {
            Some(parts) => parts,
            None => (block, ""),
        };
        Block {
            header: Some(head.to_string()),
            prefix: WRAPPED_INDENT,
            items: split_items(WRAPPED_INDENT, body),
        }
    } else {
        Block {
            header: None,
            prefix: ITEM_INDENT,
            items: split_items(ITEM_INDENT, block),
        }
    }
}

/// Split a block body into top-level items at `prefix` indentation.
///
/// Boundaries come from `is_item_boundary` alone. Anything before the
/// first boundary is discarded (empty for conforming input), and a
/// sentinel line is appended so the last item flushes through the same
/// path as the others.
pub fn split_items(prefix: &str, body: &str) -> Vec<String> {
    let mut scan = String::with_capacity(body.len() + prefix.len() + 5);
    scan.push('\n');
    scan.push_str(body);
    scan.push('\n');
    scan.push_str(prefix);
    scan.push_str("eof");

    let bytes = scan.as_bytes();
    let bounds: Vec<usize> = (0..bytes.len())
        .filter(|&pos| is_item_boundary(bytes, prefix, pos))
        .collect();

    bounds
        .windows(2)
        .map(|pair| scan[pair[0] + 1..pair[1]].to_string())
        .collect()
}

/// True when `pos` sits on the newline that starts a new top-level item:
/// the next `prefix.len()` bytes are exactly `prefix` and the byte after
/// them is not a space.
///
/// The non-space test keeps nested structures and block-scalar bodies
/// (indented strictly deeper than `prefix`) attached to their key. It
/// assumes the dialect never puts a key's continued value at exactly
/// `prefix` depth; input that does gets split at the wrong place, without
/// error.
fn is_item_boundary(bytes: &[u8], prefix: &str, pos: usize) -> bool {
    bytes[pos] == b'\n'
        && bytes[pos + 1..].starts_with(prefix.as_bytes())
        && bytes
            .get(pos + 1 + prefix.len())
            .is_some_and(|byte| *byte != b' ')
}
