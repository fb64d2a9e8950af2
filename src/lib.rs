//! pugstart - interactive scaffolder for Pug template projects
//!
//! Given an existing target directory, pugstart generates a `_base/` layout
//! with shared partials, reconciles the project's `index.pug` entry file
//! without destroying user content, renders `_base/config.pug` from an
//! interactive question sequence, and optionally resolves cdnjs packages
//! into a marker-bounded `cdn.pug` partial.

pub mod cdn;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod pipeline;
pub mod prompts;
pub mod reconcile;
pub mod templates;

// Re-exports for convenience
pub use cdn::{AssetKind, AssetLink, CdnjsRegistry, LinkBuckets, Registry};
pub use error::{ScaffoldError, ScaffoldResult};
pub use models::{AnswerSet, Section, SocialProfile};
pub use prompts::{DialoguerPrompter, Prompter};
pub use reconcile::EntryOutcome;
pub use templates::TemplateSource;
