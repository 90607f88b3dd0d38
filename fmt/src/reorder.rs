use crate::rules::Rules;
use crate::split::{self, Block};

/// Split one raw block and reorder its items.
pub fn reorder_block(rules: &Rules, raw: &str) -> Block {
    let Block {
        header,
        prefix,
        items,
    } = split::split_block(rules, raw);
    Block {
        header,
        prefix,
        items: reorder_items(rules, prefix, items),
    }
}

/// Reorder a block's items: priority keys first, in priority-list order,
/// then everything else in its original relative order.
///
/// Stable two-partition reorder; every input item appears exactly once in
/// the output. Duplicate keys (malformed but not rejected) group at that
/// key's priority position, keeping their mutual original order.
pub fn reorder_items(rules: &Rules, prefix: &str, items: Vec<String>) -> Vec<String> {
    let mut taken = vec![false; items.len()];
    let mut order: Vec<usize> = Vec::with_capacity(items.len());

    for key in &rules.key_order {
        let pattern = format!("{prefix}{key}:");
        for (pos, item) in items.iter().enumerate() {
            if !taken[pos] && item.starts_with(&pattern) {
                taken[pos] = true;
                order.push(pos);
            }
        }
    }
    for (pos, item_taken) in taken.iter().enumerate() {
        if !item_taken {
            order.push(pos);
        }
    }

    let mut slots: Vec<Option<String>> = items.into_iter().map(Some).collect();
    order
        .iter()
        .map(|&pos| slots[pos].take().unwrap_or_default())
        .collect()
}
