use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use regex_lite::Regex;

/// Narrow introspection seam over whatever style rules are loaded right now.
///
/// Implementations return only what they can actually see: a sheet that
/// cannot be introspected (cross-origin in a browser host, unreadable file on
/// disk) simply contributes nothing.
pub trait StyleSource {
    /// Selector texts of every accessible plain style rule, in sheet order.
    fn selector_texts(&self) -> Vec<String>;
}

/// Scan every accessible selector for `preset-*` class hooks.
///
/// Returns the distinct captured tokens sorted ascending (ordinal); theme
/// authors keep these lower-case so ordinal order is the display order.
pub fn scan_presets(source: &dyn StyleSource) -> Vec<String> {
    // regex-lite has no compile failure path for a literal pattern like this
    let pattern = Regex::new(r"\.preset-([0-9A-Za-z_-]+)").unwrap();
    let mut found = BTreeSet::new();
    for selector in source.selector_texts() {
        for capture in pattern.captures_iter(&selector) {
            if let Some(token) = capture.get(1) {
                found.insert(token.as_str().to_string());
            }
        }
    }
    found.into_iter().collect()
}

/// In-memory source for tests and embedded hosts.
#[derive(Debug, Default)]
pub struct FixtureSource {
    selectors: Vec<String>,
}

impl FixtureSource {
    pub fn new(selectors: &[&str]) -> Self {
        Self {
            selectors: selectors.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StyleSource for FixtureSource {
    fn selector_texts(&self) -> Vec<String> {
        self.selectors.clone()
    }
}

/// Source backed by the `.css` files of a snippets directory.
///
/// Files that cannot be read are skipped silently (logged at debug); a
/// missing directory yields an empty rule list.
#[derive(Debug)]
pub struct CssFileSource {
    dir: PathBuf,
}

impl CssFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl StyleSource for CssFileSource {
    fn selector_texts(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("snippet dir {:?} not readable: {}", self.dir, e);
                return Vec::new();
            }
        };

        let mut selectors = Vec::new();
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "css"))
            .collect();
        paths.sort();

        for path in paths {
            match fs::read_to_string(&path) {
                Ok(css) => selectors.extend(extract_selectors(&css)),
                Err(e) => {
                    log::debug!("skipping unreadable sheet {:?}: {}", path, e);
                }
            }
        }
        selectors
    }
}

/// Pull the selector text of every top-level plain style rule out of raw CSS.
///
/// Tracks brace depth so rules nested under `@media`/`@keyframes` and rule
/// bodies are not mistaken for selectors; at-rule preludes are dropped.
fn extract_selectors(css: &str) -> Vec<String> {
    let css = strip_comments(css);
    let mut selectors = Vec::new();
    let mut depth = 0usize;
    let mut segment = String::new();

    for ch in css.chars() {
        match ch {
            '{' => {
                if depth == 0 {
                    let text = segment.trim();
                    if !text.is_empty() && !text.starts_with('@') {
                        selectors.push(text.to_string());
                    }
                }
                depth += 1;
                segment.clear();
            }
            '}' => {
                depth = depth.saturating_sub(1);
                segment.clear();
            }
            ';' if depth == 0 => segment.clear(), // @import and friends
            _ => {
                if depth == 0 {
                    segment.push(ch);
                }
            }
        }
    }
    selectors
}

fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut chars = css.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '/' && chars.peek() == Some(&'*') {
            chars.next();
            let mut prev = '\0';
            for inner in chars.by_ref() {
                if prev == '*' && inner == '/' {
                    break;
                }
                prev = inner;
            }
        } else {
            out.push(ch);
        }
    }
    out
}
