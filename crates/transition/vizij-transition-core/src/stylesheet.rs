//! Stylesheet normalization.
//!
//! Stylesheets are authored with `-ms-` standing in for "whatever prefix the host
//! needs". At start-up the text is fetched, the marker is swapped for the detected
//! prefix, and the result is appended to the document as a new style node.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::capability::CapabilitySet;

/// Prefix token stylesheet authors write in place of the real vendor prefix.
pub const PREFIX_MARKER: &str = "-ms-";

/// Blocking text fetch for a named stylesheet resource.
/// Failures are reported as empty text.
pub trait StylesheetSource {
    fn fetch(&self, location: &str) -> String;
}

/// Destination for normalized stylesheet text.
pub trait StylesheetSink {
    /// Append `css` as a new style node; existing style content is left untouched.
    fn append_stylesheet(&mut self, css: &str);
}

/// Case-insensitive replacement of every [`PREFIX_MARKER`] occurrence with `prefix`.
pub fn normalize_prefix(text: &str, prefix: &str) -> String {
    let marker = PREFIX_MARKER.as_bytes();
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    // The marker is ASCII, so every match starts and ends on a char boundary.
    while i + marker.len() <= bytes.len() {
        if bytes[i..i + marker.len()].eq_ignore_ascii_case(marker) {
            out.push_str(&text[copied..i]);
            out.push_str(prefix);
            i += marker.len();
            copied = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&text[copied..]);
    out
}

/// Fetch every location and join the texts with a line break.
pub fn fetch_all<S, L>(source: &S, locations: &[L]) -> String
where
    S: StylesheetSource + ?Sized,
    L: AsRef<str>,
{
    locations
        .iter()
        .map(|location| {
            let text = source.fetch(location.as_ref());
            if text.is_empty() {
                log::warn!(
                    target: "vizij_transition",
                    "stylesheet {:?} is empty or could not be fetched",
                    location.as_ref()
                );
            }
            text
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fetch, rewrite the prefix marker for `caps`, and append the result to `sink`.
///
/// Meant to run once after detection; calling it again appends a second copy.
pub fn normalize_and_install<S, K, L>(caps: &CapabilitySet, source: &S, sink: &mut K, locations: &[L])
where
    S: StylesheetSource + ?Sized,
    K: StylesheetSink + ?Sized,
    L: AsRef<str>,
{
    let raw = fetch_all(source, locations);
    let css = normalize_prefix(&raw, caps.vendor_prefix());
    log::debug!(
        target: "vizij_transition",
        "installing {} bytes of stylesheet text with prefix {:?}",
        css.len(),
        caps.vendor_prefix()
    );
    sink.append_stylesheet(&css);
}

/// In-memory stylesheet source keyed by location.
#[derive(Clone, Debug, Default)]
pub struct MapSource {
    sheets: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, location: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(location, text);
        self
    }

    pub fn insert(&mut self, location: impl Into<String>, text: impl Into<String>) {
        self.sheets.insert(location.into(), text.into());
    }
}

impl StylesheetSource for MapSource {
    fn fetch(&self, location: &str) -> String {
        self.sheets.get(location).cloned().unwrap_or_default()
    }
}

/// Reads stylesheets relative to a directory on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl StylesheetSource for FileSource {
    fn fetch(&self, location: &str) -> String {
        let path = self.root.join(location);
        fs::read_to_string(&path).unwrap_or_else(|err| {
            log::warn!(
                target: "vizij_transition",
                "failed to read stylesheet {}: {err}",
                path.display()
            );
            String::new()
        })
    }
}

/// Collects appended stylesheets; handy for native tooling and tests.
impl StylesheetSink for Vec<String> {
    fn append_stylesheet(&mut self, css: &str) {
        self.push(css.to_string());
    }
}
