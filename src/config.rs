//! Config emitter
//!
//! Renders `_base/config.pug`, the unbuffered code block every generated page
//! pulls its settings from. The file is tool-owned and always rewritten in
//! full; user overrides belong in the entry file's `block config`.

use std::fs;
use std::path::Path;

use crate::error::ScaffoldResult;
use crate::models::{AnswerSet, Section};

/// Compose the two robots answers into the two-token directive.
pub fn robots_directive(index: bool, follow: bool) -> String {
    format!(
        "{}, {}",
        if index { "index" } else { "noindex" },
        if follow { "follow" } else { "nofollow" }
    )
}

/// Parse the comma-delimited css answer into a pug list literal.
///
/// Entries are trimmed and empties dropped, so stray commas never produce
/// `''` entries. An unset answer renders as `[]`.
pub fn css_list(raw: &str) -> String {
    let entries: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("'{s}'"))
        .collect();
    format!("[{}]", entries.join(","))
}

/// Render the full config.pug text from the collected answers.
pub fn render_config(answers: &AnswerSet) -> String {
    let section = |s: Section| answers.has_section(s);
    format!(
        r#"-
    var config = {{
        // Main properties
        title: "{title}",
        keywords: "{keywords}",
        description: "{description}",
        robots: "{robots}",
        googleAnalyticsId: "{analytics}", // leave empty if you don't have google analytics
        css: {css}, // Array<String> | Path to your css files
        browserConfig: "browserconfig.xml", // Default. Change if you have a browserconfig elsewhere.

        //- Social
        name: "{social_name}",
        url: "{social_url}",
        image: "{social_image}",

        // Additional properties
        footer: {footer},
        header: {header},
        social: {social},
        favicon: {favicon},
        afterScripts: {after_scripts},
        beforeScripts: {before_scripts},
        crossBrowser: {cross_browser},
        cdn: {cdn},
        fonts: {fonts},
        itemscope: {itemscope},
        appleMobileWebAppCapable: {itemscope}
    }};
"#,
        title = answers.title,
        keywords = answers.keywords,
        description = answers.description,
        robots = robots_directive(answers.index, answers.follow),
        analytics = answers.google_analytics,
        css = css_list(&answers.css),
        social_name = answers.social.name,
        social_url = answers.social.url,
        social_image = answers.social.image,
        footer = answers.footer,
        header = answers.header,
        social = section(Section::Social),
        favicon = section(Section::Favicon),
        after_scripts = section(Section::AfterScripts),
        before_scripts = section(Section::BeforeScripts),
        cross_browser = section(Section::CrossBrowser),
        cdn = section(Section::Cdn),
        fonts = section(Section::Fonts),
        itemscope = answers.itemscope_and_apple,
    )
}

/// Write (always overwrite) `<target>/_base/config.pug`.
pub fn write_config(answers: &AnswerSet, target: &Path) -> ScaffoldResult<()> {
    fs::write(target.join("_base").join("config.pug"), render_config(answers))?;
    Ok(())
}
