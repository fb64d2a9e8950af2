//! package.json precondition
//!
//! pugstart is installed per-project; it refuses to run unless the invoking
//! directory carries a package.json that declares it as a dependency, since
//! the bundled templates live under that install.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Dependency key this tool must appear under.
pub const PACKAGE_NAME: &str = "pugstart";

#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
}

/// Verify `<cwd>/package.json` exists, parses, and declares pugstart.
pub fn check(cwd: &Path) -> ScaffoldResult<()> {
    let path = cwd.join("package.json");
    let text = fs::read_to_string(&path).map_err(|_| ScaffoldError::ManifestMissing {
        dir: cwd.to_path_buf(),
    })?;

    let manifest: PackageManifest = serde_json::from_str(&text)?;
    if !manifest.dependencies.contains_key(PACKAGE_NAME) {
        return Err(ScaffoldError::DependencyMissing);
    }

    Ok(())
}
