//! Error types for pugstart
//!
//! Library errors use `thiserror`; the binary layer wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pugstart operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Main error type for pugstart operations
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Target template directory missing or not a directory
    #[error("template directory must be specified when running pugstart: {path} is not a directory")]
    DirectoryNotFound { path: PathBuf },

    /// No package.json next to the invocation
    #[error("package.json hasn't been found in {dir}")]
    ManifestMissing { dir: PathBuf },

    /// package.json exists but does not declare pugstart
    #[error("'pugstart' hasn't been found in package.json. Please run 'npm i --save pugstart'")]
    DependencyMissing,

    /// package.json exists but is not valid JSON
    #[error("package.json could not be parsed: {0}")]
    ManifestInvalid(#[from] serde_json::Error),

    /// _base or _base/_sections could not be created
    #[error("error occurred while initializing the {path} directory")]
    BaseDirCreation { path: PathBuf },

    /// Bundled template files are missing from the package install
    #[error("bundled template file not found: {path}\n  Please run 'npm i --save pugstart' to restore the bundled templates")]
    BundledSourceMissing { path: PathBuf },

    /// index.pug exists but was not produced by pugstart
    #[error("looks like you already have {path} and it wasn't scaffolded by pugstart.\n  Re-run with '-r' to allow pugstart to rewrite it (your content is kept inside 'block main')")]
    ForeignEntryFile { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
