//! Bundled template source and installers
//!
//! The npm package ships a read-only `source/` tree:
//!
//! ```text
//! source/
//!   _base/
//!     layout.pug
//!     head.pug
//!     _sections/        partials copied wholesale into <target>/_base/_sections
//!   sections/
//!     header.pug        copied on demand into <target>/sections
//!     footer.pug
//! ```
//!
//! Directory creation is idempotent; an existing directory is never an error
//! and existing user files are never deleted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::models::AnswerSet;

/// Location of the bundled template tree.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    root: PathBuf,
}

impl TemplateSource {
    /// The tree as installed by npm, relative to the invocation directory.
    pub fn bundled(cwd: &Path) -> Self {
        Self {
            root: cwd.join("node_modules").join("pugstart").join("source"),
        }
    }

    /// Explicit root, used by tests and by anyone vendoring the templates.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn base_dir(&self) -> PathBuf {
        self.root.join("_base")
    }

    fn base_sections_dir(&self) -> PathBuf {
        self.base_dir().join("_sections")
    }

    fn optional_sections_dir(&self) -> PathBuf {
        self.root.join("sections")
    }
}

/// Ensure `<target>/_base` and `<target>/_base/_sections` exist and are
/// populated from the bundled tree: every `_sections` partial plus
/// `head.pug` and `layout.pug`.
pub fn install_base(source: &TemplateSource, target: &Path) -> ScaffoldResult<()> {
    let base = target.join("_base");
    let sections = base.join("_sections");
    create_dir(&base)?;
    create_dir(&sections)?;

    let src_sections = source.base_sections_dir();
    let entries = fs::read_dir(&src_sections).map_err(|_| ScaffoldError::BundledSourceMissing {
        path: src_sections.clone(),
    })?;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            copy_bundled(&entry.path(), &sections.join(entry.file_name()))?;
        }
    }

    for name in ["head.pug", "layout.pug"] {
        copy_bundled(&source.base_dir().join(name), &base.join(name))?;
    }

    Ok(())
}

/// Copy the header/footer partials the user asked for into
/// `<target>/sections`, never overwriting a file already there.
///
/// The whole stage is skipped when neither section is requested.
pub fn install_optional_sections(
    answers: &AnswerSet,
    source: &TemplateSource,
    target: &Path,
) -> ScaffoldResult<()> {
    if !answers.footer && !answers.header {
        return Ok(());
    }

    let sections = target.join("sections");
    create_dir(&sections)?;

    for (wanted, name) in [(answers.footer, "footer.pug"), (answers.header, "header.pug")] {
        if !wanted {
            continue;
        }
        let dest = sections.join(name);
        if dest.is_file() {
            continue;
        }
        copy_bundled(&source.optional_sections_dir().join(name), &dest)?;
    }

    Ok(())
}

fn create_dir(path: &Path) -> ScaffoldResult<()> {
    fs::create_dir_all(path).map_err(|_| ScaffoldError::BaseDirCreation {
        path: path.to_path_buf(),
    })
}

fn copy_bundled(src: &Path, dst: &Path) -> ScaffoldResult<()> {
    match fs::copy(src, dst) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ScaffoldError::BundledSourceMissing {
                path: src.to_path_buf(),
            })
        }
        Err(e) => Err(e.into()),
    }
}
