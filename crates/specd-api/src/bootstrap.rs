//! # Seed Bootstrap
//!
//! Hydrates the in-memory seed store from the configured seeds folder at
//! startup. Each `*.yaml`/`*.yml`/`*.json` file under the folder becomes one
//! seed, keyed by its relative path with the extension stripped (so
//! `simple/example-spec.yaml` hydrates as `simple/example-spec`), with the
//! raw file text as its value.
//!
//! A missing folder is not an error: the server starts with an empty store,
//! which is the normal development mode.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::seed::SeedStore;

/// Extensions recognized as seed files.
const SEED_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Load every seed file under `folder` into the store.
///
/// Returns the number of seeds loaded. Unreadable files and directories are
/// skipped with a warning rather than aborting startup.
pub fn hydrate_seeds(store: &SeedStore, folder: &Path) -> usize {
    if !folder.is_dir() {
        tracing::warn!(
            folder = %folder.display(),
            "seeds folder not found, starting with an empty seed store"
        );
        return 0;
    }
    let mut count = 0;
    visit(folder, folder, store, &mut count);
    count
}

fn visit(dir: &Path, base: &Path, store: &SeedStore, count: &mut usize) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable seed directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit(&path, base, store, count);
            continue;
        }
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !SEED_EXTENSIONS.contains(&ext) {
            continue;
        }
        match fs::read_to_string(&path) {
            Ok(text) => {
                store.set(seed_name(&path, base), Value::String(text));
                *count += 1;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable seed file");
            }
        }
    }
}

/// Seed name for a file: relative path, `/`-separated, extension stripped.
fn seed_name(path: &Path, base: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
