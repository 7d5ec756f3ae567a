use autodoc_ingest::Entry;

/// Default depth cap for the flattened listing.
pub const DEFAULT_TREE_DEPTH: usize = 4;

/// Pre-order listing of the forest, one `"<indent>- <name> (<kind>)"` line
/// per entry, two spaces of indent per depth level.
///
/// Once depth exceeds `max_depth` while processing a sibling list, the
/// walk stops outright and returns what it has accumulated; it does not
/// skip ahead to later siblings at the same or shallower depth. Deep
/// trees therefore produce an intentionally partial listing, including at
/// the root level.
#[must_use]
pub fn flatten_tree(forest: &[Entry], max_depth: usize) -> String {
    let mut output = String::new();
    flatten_into(forest, 0, max_depth, &mut output);
    output
}

/// Returns `false` once the depth cut has fired; callers unwind without
/// emitting anything further.
fn flatten_into(siblings: &[Entry], depth: usize, max_depth: usize, output: &mut String) -> bool {
    for entry in siblings {
        if depth > max_depth {
            return false;
        }

        let indent = "  ".repeat(depth);
        output.push_str(&format!("{indent}- {} ({})\n", entry.name, entry.kind.as_str()));

        if let Some(children) = &entry.children {
            if !flatten_into(children, depth + 1, max_depth, output) {
                return false;
            }
        }
    }
    true
}
