//! Asset-link resolution against the cdnjs registry
//!
//! An interactive loop collects package names, resolves each against the
//! registry, and buckets the resulting links by kind. Lookup failures are
//! retryable and never abort the pipeline; the loop ends on empty input and
//! the accumulated links are written to `_base/_sections/cdn.pug` between
//! marker comments.

use std::fs;
use std::path::Path;
use std::time::Duration;

use console::style;
use serde::Deserialize;
use thiserror::Error;

use crate::error::ScaffoldResult;
use crate::prompts::Prompter;

/// Host serving the resolved files.
pub const CDN_BASE: &str = "https://cdnjs.cloudflare.com/ajax/libs";
/// Metadata API endpoint.
pub const API_BASE: &str = "https://api.cdnjs.com/libraries";
/// Maximum number of suggestions shown after a failed exact lookup.
pub const MAX_SUGGESTIONS: usize = 10;

/// Lookup failures; all retryable from the interactive loop.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("response status code is {0}")]
    Status(u16),
}

/// Resolved package metadata from an exact-name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLink {
    pub name: String,
    pub version: String,
    pub filename: String,
}

/// How an [`AssetLink`] gets embedded, judged by filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Script,
}

impl AssetLink {
    pub fn kind(&self) -> Option<AssetKind> {
        match self.filename.rsplit('.').next() {
            Some("css") => Some(AssetKind::Stylesheet),
            Some("js") => Some(AssetKind::Script),
            _ => None,
        }
    }

    /// Fully-qualified cdnjs URL.
    pub fn url(&self) -> String {
        format!("{CDN_BASE}/{}/{}/{}", self.name, self.version, self.filename)
    }
}

/// Read-only registry lookups, kept behind a trait so the loop is testable.
pub trait Registry {
    /// Exact-name lookup. `Ok(None)` means the registry answered but the
    /// metadata was malformed or incomplete.
    fn fetch(&self, name: &str) -> Result<Option<AssetLink>, RegistryError>;

    /// Substring search, at most [`MAX_SUGGESTIONS`] names.
    fn search(&self, query: &str) -> Result<Vec<String>, RegistryError>;
}

/// cdnjs-backed registry over a blocking HTTP client.
pub struct CdnjsRegistry {
    client: reqwest::blocking::Client,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct LibraryResponse {
    name: Option<String>,
    version: Option<String>,
    filename: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    name: String,
}

impl CdnjsRegistry {
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_api_base(API_BASE)
    }

    /// Custom endpoint, used by tests pointing at a local server.
    pub fn with_api_base(api_base: impl Into<String>) -> Result<Self, RegistryError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("pugstart")
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| RegistryError::Network(e.to_string()))?;
        Ok(Self {
            client,
            api_base: api_base.into(),
        })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, RegistryError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| RegistryError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(RegistryError::Status(response.status().as_u16()));
        }
        Ok(response)
    }
}

impl Registry for CdnjsRegistry {
    fn fetch(&self, name: &str) -> Result<Option<AssetLink>, RegistryError> {
        let url = format!("{}/{}", self.api_base, name);
        let body: LibraryResponse = self
            .get(&url)?
            .json()
            .map_err(|e| RegistryError::Network(e.to_string()))?;

        Ok(match (body.name, body.version, body.filename) {
            (Some(name), Some(version), Some(filename)) => Some(AssetLink {
                name,
                version,
                filename,
            }),
            _ => None,
        })
    }

    fn search(&self, query: &str) -> Result<Vec<String>, RegistryError> {
        let url = format!("{}/?search={}", self.api_base, query);
        let body: SearchResponse = self
            .get(&url)?
            .json()
            .map_err(|e| RegistryError::Network(e.to_string()))?;

        Ok(body
            .results
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|hit| hit.name)
            .collect())
    }
}

/// Outcome of resolving one package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Metadata found; the link belongs in a bucket.
    Added(AssetLink),
    /// Exact lookup was incomplete; candidate names to show the user.
    Suggestions(Vec<String>),
    /// Lookup failed; message to surface inline, nothing recorded.
    Failed(String),
}

/// Resolve a single package name: exact lookup first, search fallback when
/// the metadata is incomplete.
pub fn resolve_package(registry: &dyn Registry, name: &str) -> Resolution {
    match registry.fetch(name) {
        Ok(Some(link)) => Resolution::Added(link),
        Ok(None) => match registry.search(name) {
            Ok(names) if !names.is_empty() => Resolution::Suggestions(names),
            Ok(_) => Resolution::Failed(format!(
                "no packages matching '{name}' were found, please try another name"
            )),
            Err(e) => Resolution::Failed(e.to_string()),
        },
        Err(e) => Resolution::Failed(e.to_string()),
    }
}

/// Links accumulated during the loop, stylesheets and scripts apart.
#[derive(Debug, Default, Clone)]
pub struct LinkBuckets {
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

impl LinkBuckets {
    /// Record a link in its bucket; `false` when the filename is neither
    /// css nor js and nothing was recorded.
    pub fn record(&mut self, link: &AssetLink) -> bool {
        match link.kind() {
            Some(AssetKind::Stylesheet) => {
                self.stylesheets.push(link.url());
                true
            }
            Some(AssetKind::Script) => {
                self.scripts.push(link.url());
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stylesheets.is_empty() && self.scripts.is_empty()
    }
}

/// Run the interactive collection loop until the user submits empty input.
///
/// Resolution failures are printed and retried; only prompt IO errors abort.
pub fn collect_links(
    prompter: &mut dyn Prompter,
    registry: &dyn Registry,
) -> ScaffoldResult<LinkBuckets> {
    let mut buckets = LinkBuckets::default();

    loop {
        let name = prompter.cdn_package()?;
        if name.is_empty() {
            break;
        }

        match resolve_package(registry, &name) {
            Resolution::Added(link) => {
                if buckets.record(&link) {
                    println!(
                        "    {}",
                        style(format!(
                            "{} has been successfully added to your cdn file.",
                            link.name
                        ))
                        .green()
                    );
                } else {
                    println!(
                        "    {}",
                        style(format!(
                            "{} resolves to '{}', which is neither css nor js; skipped.",
                            link.name, link.filename
                        ))
                        .yellow()
                    );
                }
            }
            Resolution::Suggestions(names) => {
                println!(
                    "    {}",
                    style("Package name is incorrect. Please enter one of the names below or try another:")
                        .cyan()
                );
                for candidate in names {
                    println!("      {}", style(candidate).cyan());
                }
            }
            Resolution::Failed(message) => {
                println!("    {}", style(format!("Error: {message}")).red());
            }
        }
    }

    Ok(buckets)
}

/// Render the marker-bounded cdn partial: stylesheets first, then scripts.
pub fn render_cdn_file(buckets: &LinkBuckets) -> String {
    let mut tags: Vec<String> = buckets
        .stylesheets
        .iter()
        .map(|url| format!("link(rel=\"stylesheet\", href=\"{url}\")"))
        .collect();
    tags.extend(buckets.scripts.iter().map(|url| format!("script(src=\"{url}\")")));

    format!("// START cdn\n\n{}\n\n// END cdn\n", tags.join("\n"))
}

/// Write (always overwrite) `<target>/_base/_sections/cdn.pug`.
pub fn write_cdn_file(buckets: &LinkBuckets, target: &Path) -> ScaffoldResult<()> {
    let path = target.join("_base").join("_sections").join("cdn.pug");
    fs::write(path, render_cdn_file(buckets))?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    pub(crate) struct MockRegistry {
        pub libraries: HashMap<String, AssetLink>,
        pub suggestions: Vec<String>,
        pub status: Option<u16>,
    }

    impl MockRegistry {
        pub fn empty() -> Self {
            Self {
                libraries: HashMap::new(),
                suggestions: Vec::new(),
                status: None,
            }
        }

        pub fn with_library(name: &str, version: &str, filename: &str) -> Self {
            let mut registry = Self::empty();
            registry.libraries.insert(
                name.to_string(),
                AssetLink {
                    name: name.to_string(),
                    version: version.to_string(),
                    filename: filename.to_string(),
                },
            );
            registry
        }
    }

    impl Registry for MockRegistry {
        fn fetch(&self, name: &str) -> Result<Option<AssetLink>, RegistryError> {
            if let Some(status) = self.status {
                return Err(RegistryError::Status(status));
            }
            Ok(self.libraries.get(name).cloned())
        }

        fn search(&self, _query: &str) -> Result<Vec<String>, RegistryError> {
            if let Some(status) = self.status {
                return Err(RegistryError::Status(status));
            }
            Ok(self.suggestions.clone())
        }
    }

    #[test]
    fn links_classify_by_extension() {
        let css = AssetLink {
            name: "normalize".into(),
            version: "8.0.1".into(),
            filename: "normalize.min.css".into(),
        };
        let js = AssetLink {
            name: "jquery".into(),
            version: "3.7.1".into(),
            filename: "jquery.min.js".into(),
        };
        let other = AssetLink {
            name: "font".into(),
            version: "1.0.0".into(),
            filename: "font.woff2".into(),
        };

        assert_eq!(css.kind(), Some(AssetKind::Stylesheet));
        assert_eq!(js.kind(), Some(AssetKind::Script));
        assert_eq!(other.kind(), None);
    }

    #[test]
    fn url_is_fully_qualified() {
        let link = AssetLink {
            name: "jquery".into(),
            version: "3.7.1".into(),
            filename: "jquery.min.js".into(),
        };
        assert_eq!(
            link.url(),
            "https://cdnjs.cloudflare.com/ajax/libs/jquery/3.7.1/jquery.min.js"
        );
    }

    #[test]
    fn resolve_returns_added_for_complete_metadata() {
        let registry = MockRegistry::with_library("jquery", "3.7.1", "jquery.min.js");

        match resolve_package(&registry, "jquery") {
            Resolution::Added(link) => assert_eq!(link.name, "jquery"),
            other => panic!("expected Added, got {other:?}"),
        }
    }

    #[test]
    fn resolve_falls_back_to_suggestions() {
        let mut registry = MockRegistry::empty();
        registry.suggestions = vec!["jquery".into(), "jquery-ui".into()];

        match resolve_package(&registry, "jqeury") {
            Resolution::Suggestions(names) => {
                assert_eq!(names, vec!["jquery".to_string(), "jquery-ui".to_string()]);
            }
            other => panic!("expected Suggestions, got {other:?}"),
        }
    }

    #[test]
    fn resolve_reports_non_200_as_retryable_failure() {
        let mut registry = MockRegistry::empty();
        registry.status = Some(404);

        match resolve_package(&registry, "jquery") {
            Resolution::Failed(message) => assert!(message.contains("404")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn resolve_reports_empty_search_as_failure() {
        let registry = MockRegistry::empty();

        match resolve_package(&registry, "definitely-not-a-package") {
            Resolution::Failed(message) => assert!(message.contains("definitely-not-a-package")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn buckets_keep_stylesheets_and_scripts_apart() {
        let mut buckets = LinkBuckets::default();
        let recorded = buckets.record(&AssetLink {
            name: "normalize".into(),
            version: "8.0.1".into(),
            filename: "normalize.min.css".into(),
        });
        assert!(recorded);
        buckets.record(&AssetLink {
            name: "jquery".into(),
            version: "3.7.1".into(),
            filename: "jquery.min.js".into(),
        });

        assert_eq!(buckets.stylesheets.len(), 1);
        assert_eq!(buckets.scripts.len(), 1);
    }

    #[test]
    fn unclassifiable_link_is_not_recorded() {
        let mut buckets = LinkBuckets::default();
        let recorded = buckets.record(&AssetLink {
            name: "font".into(),
            version: "1.0.0".into(),
            filename: "font.woff2".into(),
        });

        assert!(!recorded);
        assert!(buckets.is_empty());
    }

    #[test]
    fn empty_buckets_render_bare_markers() {
        let rendered = render_cdn_file(&LinkBuckets::default());
        assert_eq!(rendered, "// START cdn\n\n\n\n// END cdn\n");
    }

    #[test]
    fn render_puts_stylesheets_before_scripts() {
        let buckets = LinkBuckets {
            stylesheets: vec!["https://cdn.example/a.css".into()],
            scripts: vec!["https://cdn.example/b.js".into()],
        };

        let rendered = render_cdn_file(&buckets);

        let css_at = rendered.find("link(rel=\"stylesheet\"").unwrap();
        let js_at = rendered.find("script(src=").unwrap();
        assert!(css_at < js_at);
        assert!(rendered.starts_with("// START cdn\n"));
        assert!(rendered.ends_with("// END cdn\n"));
    }
}
