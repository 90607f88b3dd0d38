/// Keys promoted to the front of every mapping, in emission order.
const KEY_ORDER: &[&str] = &[
    "name",
    "parent",
    "description",
    "run",
    "pre-run",
    "post-run",
    "when",
    "become",
    "loop",
    "register",
];

/// Object names whose block wraps its mapping one indentation level
/// deeper (`- job:` followed by 4-space-indented keys).
const WRAPPER_NAMES: &[&str] = &[
    "job",
    "nodeset",
    "project",
    "tenant",
    "secret",
    "semaphore",
    "pipeline",
    "project-template",
];

/// Reordering rules, passed into the formatter rather than read from
/// globals so related dialects can supply their own tables.
#[derive(Debug, Clone)]
pub struct Rules {
    /// Priority keys, emitted first in this order.
    pub key_order: Vec<String>,
    /// Names that trigger the wrapper-object convention.
    pub wrapper_names: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            key_order: KEY_ORDER.iter().map(|key| key.to_string()).collect(),
            wrapper_names: WRAPPER_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}
