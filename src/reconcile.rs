//! Entry-file reconciliation
//!
//! `index.pug` is the one file in the target directory the user owns. This
//! module decides whether it needs creating, is already scaffolded, or holds
//! foreign content that must be relocated rather than destroyed.
//!
//! Detection is line-oriented: the file counts as scaffolded only when all
//! three required declarations appear as whole trimmed lines. Substring hits
//! (`extends _base/layouts`, `myblock config`) never match.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Declaration lines an entry file must carry to count as scaffolded.
pub const EXTENDS_LINE: &str = "extends _base/layout";
pub const CONFIG_BLOCK_LINE: &str = "block config";
pub const MAIN_BLOCK_LINE: &str = "block main";

/// One pug tab-stop, used when relocating foreign content under `block main`.
pub const TAB_STOP: &str = "    ";

/// Fixed top of every generated entry file, ending right after `block main`.
const ENTRY_HEADER: &str = "\
extends _base/layout

//- Include all files
//- All configurations for the template
block config
    include _base/config

    //- If you want to change default configs, just set the properties here
    //- config.title = 'New title';

block main
";

/// What reconciliation did to the entry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// No entry file existed; a fresh one was written.
    Created,
    /// The file already carried all required declarations; left untouched.
    AlreadyScaffolded,
    /// Foreign content was relocated under `block main`.
    Rewritten,
}

/// Ensure `<dir>/index.pug` exists and is structurally compatible with the
/// generated base layout.
///
/// Never destroys unrecognized content: without `allow_rewrite` a foreign
/// file is a [`ScaffoldError::ForeignEntryFile`] and its bytes stay as they
/// were; with it, the original lines are kept verbatim (indented one
/// tab-stop) as the body of `block main`.
pub fn reconcile(dir: &Path, allow_rewrite: bool) -> ScaffoldResult<EntryOutcome> {
    let entry = entry_path(dir);

    if !entry.is_file() {
        fs::write(&entry, fresh_entry())?;
        return Ok(EntryOutcome::Created);
    }

    let content = fs::read_to_string(&entry)?;
    if is_scaffolded(&content) {
        return Ok(EntryOutcome::AlreadyScaffolded);
    }

    if !allow_rewrite {
        return Err(ScaffoldError::ForeignEntryFile { path: entry });
    }

    fs::write(&entry, wrap_foreign(&content))?;
    Ok(EntryOutcome::Rewritten)
}

/// Path of the entry file inside the target directory.
pub fn entry_path(dir: &Path) -> PathBuf {
    dir.join("index.pug")
}

/// Whole-line detection of a previously scaffolded entry file.
///
/// An empty file has no matching lines and is therefore foreign.
pub fn is_scaffolded(content: &str) -> bool {
    let mut extends = false;
    let mut config = false;
    let mut main = false;
    for line in content.lines().map(str::trim) {
        match line {
            EXTENDS_LINE => extends = true,
            CONFIG_BLOCK_LINE => config = true,
            MAIN_BLOCK_LINE => main = true,
            _ => {}
        }
    }
    extends && config && main
}

/// Entry file written when none exists yet.
fn fresh_entry() -> String {
    format!("{ENTRY_HEADER}{TAB_STOP}h1 Hello world\n")
}

/// Rebuild the entry file around foreign content: fixed header first, then
/// the original text relocated under `block main`, every line indented by
/// exactly one tab-stop, in original order.
fn wrap_foreign(original: &str) -> String {
    let indented = original
        .split('\n')
        .map(|line| format!("{TAB_STOP}{line}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{ENTRY_HEADER}{indented}\n")
}
