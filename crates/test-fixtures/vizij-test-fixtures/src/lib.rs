use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Named fixtures, each mapped to a path under [`root`].
#[derive(Debug, Deserialize)]
struct Manifest {
    stylesheets: HashMap<String, String>,
    catalogs: HashMap<String, String>,
}

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures manifest should parse")
});

fn entry<'a>(section: &'a HashMap<String, String>, kind: &str, name: &str) -> Result<&'a str> {
    section
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("no {kind} fixture named '{name}'"))
}

fn read(rel: &str) -> Result<String> {
    let path = root().join(rel);
    fs::read_to_string(&path).with_context(|| format!("reading fixture {}", path.display()))
}

/// Directory holding every fixture; root for file-backed stylesheet sources.
pub fn root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

/// Prefix-templated stylesheets (authored with the `-ms-` marker).
pub mod stylesheets {
    use super::*;

    pub fn text(name: &str) -> Result<String> {
        read(entry(&MANIFEST.stylesheets, "stylesheet", name)?)
    }

    /// Location relative to [`root`], as a file-backed source expects it.
    pub fn location(name: &str) -> Result<String> {
        entry(&MANIFEST.stylesheets, "stylesheet", name).map(str::to_string)
    }
}

/// Animation catalogs (bring-to-view / remove-from-view lists).
pub mod catalogs {
    use super::*;

    pub fn json(name: &str) -> Result<String> {
        read(entry(&MANIFEST.catalogs, "catalog", name)?)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let text = json(name)?;
        serde_json::from_str(&text).with_context(|| format!("parsing catalog fixture '{name}'"))
    }
}
