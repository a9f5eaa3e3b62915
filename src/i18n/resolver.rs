//! Dotted i18n key resolution.
//!
//! An i18n key is a dotted path into the active language's dataset tree,
//! e.g. `team.roles.Developer` or `user_stories.subtasks.ST-001.title`.
//! Resolution walks the tree field by field and yields text only when every
//! segment exists and the leaf is a non-empty string; everything else is a
//! miss and the caller supplies a fallback. Misses are expected and frequent
//! (raw data fields double as fallback text), so they are counted but never
//! logged.
//!
//! Resolution is re-run on every render pass with no caching; keys are at
//! most four segments deep, so each lookup is a handful of map probes.

use crate::i18n::ResolutionMetrics;
use serde_json::Value;

/// Resolves dotted keys against one language's dataset tree.
///
/// Borrow-only view; a resolver is constructed per render pass from the
/// active dataset and holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    root: &'a Value,
}

impl<'a> Resolver<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// Resolve a dotted key to localized text.
    ///
    /// Returns `None` if any intermediate segment is absent, or if the final
    /// value is not a non-empty string. Never panics.
    pub fn resolve(&self, key: &str) -> Option<&'a str> {
        let mut node = self.root;
        for segment in key.split('.') {
            node = match node.get(segment) {
                Some(next) => next,
                None => {
                    ResolutionMetrics::global().record_miss();
                    return None;
                }
            };
        }

        match node.as_str() {
            Some(text) if !text.is_empty() => {
                ResolutionMetrics::global().record_hit();
                Some(text)
            }
            _ => {
                ResolutionMetrics::global().record_miss();
                None
            }
        }
    }

    /// Resolve a key, falling back to the given text on a miss.
    ///
    /// Every renderer uses this instead of hand-rolling the fallback, so the
    /// fallback behavior cannot drift between sections.
    pub fn resolve_or(&self, key: &str, fallback: &str) -> String {
        match self.resolve(key) {
            Some(text) => text.to_string(),
            None => {
                ResolutionMetrics::global().record_fallback();
                fallback.to_string()
            }
        }
    }

    /// Resolve the first key in a chain that yields text.
    ///
    /// Used where several i18n locations may hold the text (e.g. a board
    /// task's title under `board_tasks` or `subtasks`); first non-miss wins.
    pub fn resolve_first(&self, keys: &[&str]) -> Option<&'a str> {
        keys.iter().find_map(|key| self.resolve(key))
    }

    /// Like `resolve_first`, with a fallback when the whole chain misses.
    pub fn resolve_first_or(&self, keys: &[&str], fallback: &str) -> String {
        match self.resolve_first(keys) {
            Some(text) => text.to_string(),
            None => {
                ResolutionMetrics::global().record_fallback();
                fallback.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> Value {
        json!({
            "team": {
                "title": "Team",
                "roles": {
                    "Developer": "Software Engineer",
                    "Empty": ""
                }
            },
            "user_stories": {
                "subtasks": {
                    "ST-001": { "title": "Login form" }
                }
            },
            "metrics": { "team_capacity": 100 }
        })
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_exact_string() {
        let tree = sample_tree();
        let resolver = Resolver::new(&tree);
        assert_eq!(
            resolver.resolve("team.roles.Developer"),
            Some("Software Engineer")
        );
    }

    #[test]
    fn test_resolve_single_segment() {
        let tree = json!({"title": "Sprint Plan"});
        let resolver = Resolver::new(&tree);
        assert_eq!(resolver.resolve("title"), Some("Sprint Plan"));
    }

    #[test]
    fn test_resolve_deep_key() {
        let tree = sample_tree();
        let resolver = Resolver::new(&tree);
        assert_eq!(
            resolver.resolve("user_stories.subtasks.ST-001.title"),
            Some("Login form")
        );
    }

    #[test]
    fn test_resolve_missing_intermediate_segment() {
        let tree = sample_tree();
        let resolver = Resolver::new(&tree);
        assert_eq!(resolver.resolve("team.skills.Backend"), None);
    }

    #[test]
    fn test_resolve_missing_final_segment() {
        let tree = sample_tree();
        let resolver = Resolver::new(&tree);
        assert_eq!(resolver.resolve("team.roles.Designer"), None);
    }

    #[test]
    fn test_resolve_empty_string_leaf_is_none() {
        let tree = sample_tree();
        let resolver = Resolver::new(&tree);
        assert_eq!(resolver.resolve("team.roles.Empty"), None);
    }

    #[test]
    fn test_resolve_non_string_leaf_is_none() {
        let tree = sample_tree();
        let resolver = Resolver::new(&tree);
        // Numbers and objects are data, not localized text
        assert_eq!(resolver.resolve("metrics.team_capacity"), None);
        assert_eq!(resolver.resolve("team.roles"), None);
    }

    #[test]
    fn test_resolve_through_string_is_none() {
        let tree = sample_tree();
        let resolver = Resolver::new(&tree);
        assert_eq!(resolver.resolve("team.title.extra"), None);
    }

    #[test]
    fn test_resolve_on_empty_tree() {
        let tree = json!({});
        let resolver = Resolver::new(&tree);
        assert_eq!(resolver.resolve("team.roles.Developer"), None);
    }

    // ==================== Fallback Tests ====================

    #[test]
    fn test_resolve_or_hit() {
        let tree = sample_tree();
        let resolver = Resolver::new(&tree);
        assert_eq!(
            resolver.resolve_or("team.roles.Developer", "Developer"),
            "Software Engineer"
        );
    }

    #[test]
    fn test_resolve_or_falls_back() {
        let tree = sample_tree();
        let resolver = Resolver::new(&tree);
        assert_eq!(
            resolver.resolve_or("team.roles.Designer", "Designer"),
            "Designer"
        );
    }

    #[test]
    fn test_resolve_first_picks_first_hit() {
        let tree = sample_tree();
        let resolver = Resolver::new(&tree);
        let text = resolver.resolve_first(&[
            "user_stories.board_tasks.ST-001.title",
            "user_stories.subtasks.ST-001.title",
        ]);
        assert_eq!(text, Some("Login form"));
    }

    #[test]
    fn test_resolve_first_or_exhausted_chain_falls_back() {
        let tree = sample_tree();
        let resolver = Resolver::new(&tree);
        let text = resolver.resolve_first_or(
            &[
                "user_stories.board_tasks.ST-999.title",
                "user_stories.subtasks.ST-999.title",
            ],
            "Raw title",
        );
        assert_eq!(text, "Raw title");
    }

    // ==================== Property Tests ====================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Path segments that cannot collide with the dot separator.
        fn segment() -> impl Strategy<Value = String> {
            "[a-zA-Z][a-zA-Z0-9_-]{0,8}"
        }

        proptest! {
            /// Inserting a value at a generated path and resolving the same
            /// dotted key must return exactly that value.
            #[test]
            fn resolve_returns_inserted_leaf(
                segments in proptest::collection::vec(segment(), 1..4),
                leaf in "[^\u{0}]{1,20}",
            ) {
                let mut tree = Value::String(leaf.clone());
                for segment in segments.iter().rev() {
                    tree = json!({ segment: tree });
                }

                let key = segments.join(".");
                let resolver = Resolver::new(&tree);
                prop_assert_eq!(resolver.resolve(&key), Some(leaf.as_str()));
            }

            /// A key with an extra unknown trailing segment never resolves.
            #[test]
            fn resolve_unknown_suffix_is_none(
                segments in proptest::collection::vec(segment(), 1..3),
                leaf in "[^\u{0}]{1,20}",
            ) {
                let mut tree = Value::String(leaf);
                for segment in segments.iter().rev() {
                    tree = json!({ segment: tree });
                }

                let key = format!("{}.definitely-not-there", segments.join("."));
                let resolver = Resolver::new(&tree);
                prop_assert_eq!(resolver.resolve(&key), None);
            }
        }
    }
}
