//! Dataset parity validation module.
//!
//! The two language datasets must be structurally identical: same branches,
//! same array lengths, same numbers; only leaf text is allowed to differ.
//! This module checks a translated dataset against the canonical one and
//! reports divergences, so a hole in the Chinese file shows up in the logs
//! at load time instead of as a silent English fallback on the page.

use serde_json::Value;

/// Validation report containing errors and warnings about a dataset pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural divergences (missing branches, type or length mismatches)
    pub errors: Vec<String>,

    /// Non-structural divergences (missing localized text, extra keys,
    /// numeric drift)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for cross-language dataset parity.
pub struct DatasetValidator;

impl DatasetValidator {
    /// Compare a translated dataset tree against the canonical one.
    ///
    /// # Arguments
    /// * `canonical` - The canonical-language dataset tree (English)
    /// * `translated` - The translated dataset tree being checked
    ///
    /// # Returns
    /// A `ValidationReport` containing any errors or warnings found.
    pub fn validate(canonical: &Value, translated: &Value) -> ValidationReport {
        let mut report = ValidationReport::new();
        Self::walk(canonical, translated, "", &mut report);
        report
    }

    fn walk(canonical: &Value, translated: &Value, path: &str, report: &mut ValidationReport) {
        match (canonical, translated) {
            (Value::Object(canon_map), Value::Object(trans_map)) => {
                for (key, canon_value) in canon_map {
                    let child_path = Self::join(path, key);
                    match trans_map.get(key) {
                        Some(trans_value) => {
                            Self::walk(canon_value, trans_value, &child_path, report)
                        }
                        None if canon_value.is_string() => report
                            .warnings
                            .push(format!("missing localized text at '{}'", child_path)),
                        None => report
                            .errors
                            .push(format!("missing branch at '{}'", child_path)),
                    }
                }
                for key in trans_map.keys() {
                    if !canon_map.contains_key(key) {
                        report
                            .warnings
                            .push(format!("extra key at '{}'", Self::join(path, key)));
                    }
                }
            }
            (Value::Array(canon_items), Value::Array(trans_items)) => {
                if canon_items.len() != trans_items.len() {
                    report.errors.push(format!(
                        "length mismatch at '{}': canonical has {}, translation has {}",
                        path,
                        canon_items.len(),
                        trans_items.len()
                    ));
                }
                for (index, (canon_item, trans_item)) in
                    canon_items.iter().zip(trans_items.iter()).enumerate()
                {
                    let child_path = Self::join(path, &index.to_string());
                    Self::walk(canon_item, trans_item, &child_path, report);
                }
            }
            // Leaf text is the one thing allowed to differ
            (Value::String(_), Value::String(_)) => {}
            (Value::Number(canon_num), Value::Number(trans_num)) => {
                if canon_num != trans_num {
                    report.warnings.push(format!(
                        "numeric drift at '{}': canonical {}, translation {}",
                        path, canon_num, trans_num
                    ));
                }
            }
            (Value::Bool(canon_bool), Value::Bool(trans_bool)) => {
                if canon_bool != trans_bool {
                    report.warnings.push(format!(
                        "boolean drift at '{}': canonical {}, translation {}",
                        path, canon_bool, trans_bool
                    ));
                }
            }
            (Value::Null, Value::Null) => {}
            _ => report.errors.push(format!(
                "type mismatch at '{}': canonical is {}, translation is {}",
                path,
                Self::kind(canonical),
                Self::kind(translated)
            )),
        }
    }

    fn join(path: &str, key: &str) -> String {
        if path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", path, key)
        }
    }

    fn kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== Clean Pair Tests ====================

    #[test]
    fn test_identical_shape_is_clean() {
        let canonical = json!({
            "team": { "title": "Team", "roles": { "Developer": "Engineer" } },
            "metrics": { "team_capacity": 100 }
        });
        let translated = json!({
            "team": { "title": "团队", "roles": { "Developer": "工程师" } },
            "metrics": { "team_capacity": 100 }
        });

        let report = DatasetValidator::validate(&canonical, &translated);
        assert!(report.is_clean());
    }

    #[test]
    fn test_differing_text_is_allowed() {
        let canonical = json!({ "title": "Sprint Plan" });
        let translated = json!({ "title": "冲刺计划" });

        let report = DatasetValidator::validate(&canonical, &translated);
        assert!(report.is_clean());
    }

    // ==================== Warning Tests ====================

    #[test]
    fn test_missing_string_leaf_is_warning() {
        let canonical = json!({ "roles": { "Developer": "Engineer", "QA": "Tester" } });
        let translated = json!({ "roles": { "Developer": "工程师" } });

        let report = DatasetValidator::validate(&canonical, &translated);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("roles.QA"));
    }

    #[test]
    fn test_extra_key_is_warning() {
        let canonical = json!({ "title": "Team" });
        let translated = json!({ "title": "团队", "subtitle": "多余" });

        let report = DatasetValidator::validate(&canonical, &translated);
        assert!(!report.has_errors());
        assert!(report.warnings.iter().any(|w| w.contains("subtitle")));
    }

    #[test]
    fn test_numeric_drift_is_warning() {
        let canonical = json!({ "metrics": { "team_capacity": 100 } });
        let translated = json!({ "metrics": { "team_capacity": 120 } });

        let report = DatasetValidator::validate(&canonical, &translated);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("team_capacity"));
    }

    // ==================== Error Tests ====================

    #[test]
    fn test_missing_branch_is_error() {
        let canonical = json!({ "team": { "roles": { "Developer": "Engineer" } } });
        let translated = json!({});

        let report = DatasetValidator::validate(&canonical, &translated);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("team"));
    }

    #[test]
    fn test_type_mismatch_is_error() {
        let canonical = json!({ "roles": { "Developer": "Engineer" } });
        let translated = json!({ "roles": "Engineer" });

        let report = DatasetValidator::validate(&canonical, &translated);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("type mismatch"));
    }

    #[test]
    fn test_array_length_mismatch_is_error() {
        let canonical = json!({ "points": [{ "title": "a" }, { "title": "b" }] });
        let translated = json!({ "points": [{ "title": "一" }] });

        let report = DatasetValidator::validate(&canonical, &translated);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("length mismatch"));
    }

    #[test]
    fn test_nested_paths_in_messages() {
        let canonical = json!({ "a": { "b": { "c": "text" } } });
        let translated = json!({ "a": { "b": {} } });

        let report = DatasetValidator::validate(&canonical, &translated);
        assert!(report.warnings.iter().any(|w| w.contains("a.b.c")));
    }
}
