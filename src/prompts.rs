//! Interactive prompts
//!
//! The pipeline only depends on the [`Prompter`] trait; the dialoguer-backed
//! implementation lives here and scripted implementations live in tests.

use std::io;

use dialoguer::{Confirm, Input, MultiSelect};

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::models::{AnswerSet, Section, SocialProfile};

/// Source of user answers for the pipeline.
pub trait Prompter {
    /// The main question sequence; must return a non-empty title.
    fn main_answers(&mut self) -> ScaffoldResult<AnswerSet>;

    /// Asked only when the `social` section was selected.
    fn social_profile(&mut self) -> ScaffoldResult<SocialProfile>;

    /// Next package name for the cdn loop; empty input terminates the loop.
    fn cdn_package(&mut self) -> ScaffoldResult<String>;
}

/// Terminal prompter built on dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_err(e: dialoguer::Error) -> ScaffoldError {
    ScaffoldError::Io(io::Error::other(e))
}

impl Prompter for DialoguerPrompter {
    fn main_answers(&mut self) -> ScaffoldResult<AnswerSet> {
        let title: String = Input::new()
            .with_prompt("Enter your title")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("Title is required.")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(prompt_err)?;

        let keywords: String = Input::new()
            .with_prompt("Enter your keywords (delimiter: ',')")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        let description: String = Input::new()
            .with_prompt("Enter your description")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        let follow = Confirm::new()
            .with_prompt("Do you want to set 'follow' for robots?")
            .default(true)
            .interact()
            .map_err(prompt_err)?;

        let index = Confirm::new()
            .with_prompt("Do you want to set 'index' for robots?")
            .default(true)
            .interact()
            .map_err(prompt_err)?;

        let google_analytics: String = Input::new()
            .with_prompt("Enter your Google Analytics id (leave empty if none)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        let css: String = Input::new()
            .with_prompt("Enter your css files (delimiter: ',')")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        let footer = Confirm::new()
            .with_prompt("Do you want to include the 'footer' section?")
            .default(true)
            .interact()
            .map_err(prompt_err)?;

        let header = Confirm::new()
            .with_prompt("Do you want to include the 'header' section?")
            .default(true)
            .interact()
            .map_err(prompt_err)?;

        let labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
        let selected = MultiSelect::new()
            .with_prompt("Select the sections you want to include in your template")
            .items(&labels)
            .defaults(&[true; Section::ALL.len()])
            .interact()
            .map_err(prompt_err)?;
        let sections = selected.into_iter().map(|idx| Section::ALL[idx]).collect();

        let itemscope_and_apple = Confirm::new()
            .with_prompt("Do you want to add 'itemscope' and 'appleMobileWebAppCapable' attributes?")
            .default(true)
            .interact()
            .map_err(prompt_err)?;

        Ok(AnswerSet {
            title,
            keywords,
            description,
            index,
            follow,
            google_analytics,
            css,
            footer,
            header,
            sections,
            itemscope_and_apple,
            social: SocialProfile::default(),
        })
    }

    fn social_profile(&mut self) -> ScaffoldResult<SocialProfile> {
        let name: String = Input::new()
            .with_prompt("Enter the name you want to be used in social")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        let url: String = Input::new()
            .with_prompt("Enter the URL address you want to be used in social")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        let image: String = Input::new()
            .with_prompt("Enter the image URL you want to be used in social")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        Ok(SocialProfile { name, url, image })
    }

    fn cdn_package(&mut self) -> ScaffoldResult<String> {
        let name: String = Input::new()
            .with_prompt("Enter the name of the CDN package to add (empty to finish)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;
        Ok(name.trim().to_string())
    }
}
