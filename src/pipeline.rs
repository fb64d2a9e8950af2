//! Pipeline runner
//!
//! Sequences the scaffolding stages as a short-circuiting chain:
//! Validate -> Reconcile -> Install -> Prompt -> Social -> Config ->
//! Sections -> Assets. Each stage must finish before the next starts; the
//! first error aborts the rest. The answer set is threaded through by
//! reference and only the Prompt and Social stages extend it.

use std::path::Path;

use console::style;

use crate::cdn::{self, Registry};
use crate::config;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::models::Section;
use crate::prompts::Prompter;
use crate::reconcile::{self, EntryOutcome};
use crate::templates::{self, TemplateSource};

/// Confirm the target path exists and is a directory.
pub fn validate_target(target: &Path) -> ScaffoldResult<()> {
    if target.is_dir() {
        Ok(())
    } else {
        Err(ScaffoldError::DirectoryNotFound {
            path: target.to_path_buf(),
        })
    }
}

/// Run the whole scaffolding pipeline against `target`.
pub fn run(
    target: &Path,
    allow_rewrite: bool,
    source: &TemplateSource,
    prompter: &mut dyn Prompter,
    registry: &dyn Registry,
) -> ScaffoldResult<()> {
    validate_target(target)?;

    match reconcile::reconcile(target, allow_rewrite)? {
        EntryOutcome::Created => stage_done("index.pug has been created."),
        EntryOutcome::AlreadyScaffolded => {
            stage_done("index.pug is already scaffolded, leaving it untouched.")
        }
        EntryOutcome::Rewritten => {
            stage_done("index.pug has been rewritten; your content now lives in 'block main'.")
        }
    }

    templates::install_base(source, target)?;
    stage_done("_base directory has been initialized.");

    let mut answers = prompter.main_answers()?;
    stage_done("First part has been successfully completed.");

    if answers.has_section(Section::Social) {
        answers.social = prompter.social_profile()?;
        stage_done("Social part has been successfully completed.");
    }

    config::write_config(&answers, target)?;
    stage_done("config.pug has been generated.");

    templates::install_optional_sections(&answers, source, target)?;

    let buckets = cdn::collect_links(prompter, registry)?;
    cdn::write_cdn_file(&buckets, target)?;
    println!(
        "    {}",
        style(format!(
            "{} css and {} js packages were added to your template.",
            buckets.stylesheets.len(),
            buckets.scripts.len()
        ))
        .cyan()
    );
    stage_done("CDN part has been successfully finished.");

    Ok(())
}

fn stage_done(message: &str) {
    println!("    {}", style(message).green());
}
