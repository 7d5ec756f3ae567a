use autodoc_ingest::Entry;

/// Dependency/package descriptors used to infer the technology stack.
const MANIFEST_NAMES: &[&str] = &["package.json", "pom.xml"];

/// Returned when no qualifying manifest exists anywhere in the forest.
pub const NO_MANIFEST_SENTINEL: &str = "No dependency file found.";

/// Locate a dependency manifest and return its formatted excerpt.
///
/// The top-level list is checked first; a root-level manifest with
/// non-empty content wins outright. Otherwise the whole forest is searched
/// depth-first for the first name match that has content. Never errors.
#[must_use]
pub fn locate_manifest(forest: &[Entry]) -> String {
    if let Some(root_match) = forest.iter().find(|entry| is_manifest_name(&entry.name)) {
        if let Some(content) = non_empty_content(root_match) {
            return format_manifest(&root_match.name, content);
        }
    }

    deep_search(forest).unwrap_or_else(|| NO_MANIFEST_SENTINEL.to_string())
}

fn deep_search(list: &[Entry]) -> Option<String> {
    for entry in list {
        if is_manifest_name(&entry.name) {
            if let Some(content) = non_empty_content(entry) {
                return Some(format_manifest(&entry.name, content));
            }
        }
        if let Some(children) = &entry.children {
            if let Some(found) = deep_search(children) {
                return Some(found);
            }
        }
    }
    None
}

fn is_manifest_name(name: &str) -> bool {
    MANIFEST_NAMES.contains(&name)
}

fn non_empty_content(entry: &Entry) -> Option<&str> {
    entry.content.as_deref().filter(|content| !content.is_empty())
}

fn format_manifest(name: &str, content: &str) -> String {
    format!("Filename: {name}\nContent:\n{content}")
}
