//! Internationalization (i18n) module for the bilingual sprint plan board.
//!
//! All language-related logic lives here: the set of supported languages, the
//! validated `Language` type, dotted-key resolution against a language's
//! dataset tree, structural parity validation between datasets, and
//! resolution metrics.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `resolver`: Dotted i18n key resolution with fallback helpers
//! - `validator`: Cross-language dataset shape validation
//! - `metrics`: Resolution observability and metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use sprint_plan_board::i18n::{Language, Resolver};
//!
//! let lang = Language::from_code("zh")?;
//! let resolver = Resolver::new(dataset.root());
//! let role = resolver.resolve_or("team.roles.Developer", "Developer");
//! ```

mod language;
mod metrics;
mod registry;
mod resolver;
mod validator;

pub use language::Language;
pub use metrics::{ResolutionMetrics, ResolutionReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::Resolver;
pub use validator::{DatasetValidator, ValidationReport};
