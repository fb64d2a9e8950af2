//! Answer set collected from the interactive prompts.
//!
//! The prompt orchestrator builds an [`AnswerSet`] incrementally; later
//! pipeline stages (social enrichment, cdn resolution) read and extend it
//! before the config emitter consumes it.

/// Optional named sections the user can toggle in the multi-select prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Social,
    Cdn,
    Fonts,
    Favicon,
    AfterScripts,
    BeforeScripts,
    CrossBrowser,
}

impl Section {
    /// All sections in prompt order, every one default-checked.
    pub const ALL: [Section; 7] = [
        Section::Social,
        Section::Cdn,
        Section::Fonts,
        Section::Favicon,
        Section::AfterScripts,
        Section::BeforeScripts,
        Section::CrossBrowser,
    ];

    /// Identifier as it appears in the generated config object.
    pub fn key(self) -> &'static str {
        match self {
            Section::Social => "social",
            Section::Cdn => "cdn",
            Section::Fonts => "fonts",
            Section::Favicon => "favicon",
            Section::AfterScripts => "afterScripts",
            Section::BeforeScripts => "beforeScripts",
            Section::CrossBrowser => "crossBrowser",
        }
    }

    /// Human label shown in the multi-select prompt.
    pub fn label(self) -> &'static str {
        match self {
            Section::Social => "social            Open Graph / social meta partial",
            Section::Cdn => "cdn               cdnjs stylesheet/script includes",
            Section::Fonts => "fonts             web font includes",
            Section::Favicon => "favicon           favicon link set",
            Section::AfterScripts => "after-scripts     scripts at the end of the page",
            Section::BeforeScripts => "before-scripts    scripts inside <head>",
            Section::CrossBrowser => "cross-browser     legacy browser shims",
        }
    }
}

/// Social metadata gathered when the `social` section is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialProfile {
    pub name: String,
    pub url: String,
    pub image: String,
}

/// Everything the prompts collect, threaded through the pipeline by reference.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    /// Page title; the prompt rejects empty input.
    pub title: String,
    /// Comma-delimited keyword list, kept raw.
    pub keywords: String,
    pub description: String,
    /// robots directive halves
    pub index: bool,
    pub follow: bool,
    /// Empty when the user has no analytics account.
    pub google_analytics: String,
    /// Comma-delimited stylesheet paths, parsed by the config emitter.
    pub css: String,
    pub footer: bool,
    pub header: bool,
    pub sections: Vec<Section>,
    /// One answer drives both `itemscope` and `appleMobileWebAppCapable`.
    pub itemscope_and_apple: bool,
    pub social: SocialProfile,
}

impl AnswerSet {
    pub fn has_section(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_section_reflects_membership() {
        let answers = AnswerSet {
            sections: vec![Section::Cdn, Section::Fonts],
            ..Default::default()
        };
        assert!(answers.has_section(Section::Cdn));
        assert!(!answers.has_section(Section::Social));
    }

    #[test]
    fn section_keys_match_config_fields() {
        assert_eq!(Section::AfterScripts.key(), "afterScripts");
        assert_eq!(Section::CrossBrowser.key(), "crossBrowser");
    }
}
