use autodoc_ingest::{Entry, EntryKind};
use once_cell::sync::Lazy;
use regex::Regex;

/// Default cap for the whole snippet bundle, in characters.
pub const DEFAULT_SNIPPET_CAP: usize = 10_000;

/// Per-file excerpt length, in characters.
const SNIPPET_CHARS: usize = 1_000;

/// Lowercased-name substrings excluded from the bundle regardless of any
/// other match. Ignore wins over inclusion; the precedence is deliberate.
const IGNORE_SUBSTRINGS: &[&str] = &[
    "test",
    "spec",
    "config",
    "setup",
    "d.ts",
    "min.js",
    "node_modules",
    "dist",
    "build",
    ".git",
];

/// Case-sensitive markers of architecturally significant filenames.
const CORE_SUBSTRINGS: &[&str] = &["App", "Server", "Routes", "Main", "Controller", "Service"];

/// Initial-capital identifier of at least three characters with a known
/// source extension, e.g. `UserModel.ts`.
static MODEL_OR_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]{2,}\.(java|ts|tsx|py|cs|jsx)$").unwrap());

/// Pluggable relevance test for snippet collection, so alternate
/// heuristics can be substituted without touching the traversal.
pub trait SnippetClassifier {
    fn classify(&self, name: &str) -> bool;
}

/// Default substring/regex heuristic.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicClassifier;

impl SnippetClassifier for HeuristicClassifier {
    fn classify(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        if IGNORE_SUBSTRINGS.iter().any(|marker| lower.contains(marker)) {
            return false;
        }

        MODEL_OR_CLASS.is_match(name)
            || CORE_SUBSTRINGS.iter().any(|marker| name.contains(marker))
    }
}

/// Collect excerpts of relevant files into a single bundle capped at
/// `total_cap` characters. The final truncation may cut a snippet
/// mid-content; that is accepted, not an error.
#[must_use]
pub fn collect_key_snippets(forest: &[Entry], total_cap: usize) -> String {
    collect_key_snippets_with(forest, total_cap, &HeuristicClassifier)
}

#[must_use]
pub fn collect_key_snippets_with(
    forest: &[Entry],
    total_cap: usize,
    classifier: &dyn SnippetClassifier,
) -> String {
    let mut snippets = String::new();
    scan(forest, classifier, &mut snippets);

    let collected = snippets.chars().count();
    if collected > total_cap {
        log::debug!("Snippet bundle truncated from {collected} to {total_cap} chars");
    }
    truncate_chars(snippets, total_cap)
}

fn scan(list: &[Entry], classifier: &dyn SnippetClassifier, snippets: &mut String) {
    for entry in list {
        if entry.kind == EntryKind::File {
            if let Some(content) = entry.content.as_deref().filter(|content| !content.is_empty()) {
                if classifier.classify(&entry.name) {
                    snippets.push_str(&format!(
                        "\n--- File: {} ---\n{}\n...\n",
                        entry.name,
                        first_chars(content, SNIPPET_CHARS)
                    ));
                }
            }
        }
        if let Some(children) = &entry.children {
            scan(children, classifier, snippets);
        }
    }
}

fn first_chars(text: &str, cap: usize) -> &str {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn truncate_chars(mut text: String, cap: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(cap) {
        text.truncate(idx);
    }
    text
}
