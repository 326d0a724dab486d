//! Outcome of a validation pass: which field failed and why.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Location of a value inside an `ApplicantRecord`, rendered as `email`,
/// `resume[0]` or `jobs[1].from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath {
    field: &'static str,
    index: Option<usize>,
    sub_field: Option<&'static str>,
}

impl FieldPath {
    pub const fn field(field: &'static str) -> Self {
        Self {
            field,
            index: None,
            sub_field: None,
        }
    }

    /// Points at one element of a list field
    pub const fn at(self, index: usize) -> Self {
        Self {
            index: Some(index),
            ..self
        }
    }

    /// Points at a field of a list element
    pub const fn sub(self, sub_field: &'static str) -> Self {
        Self {
            sub_field: Some(sub_field),
            ..self
        }
    }

    /// The top-level field name, without index or sub-field
    pub fn root(&self) -> &'static str {
        self.field
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field)?;
        if let Some(index) = self.index {
            write!(f, "[{}]", index)?;
        }
        if let Some(sub_field) = self.sub_field {
            write!(f, ".{}", sub_field)?;
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: FieldPath,
    pub message: String,
}

impl Violation {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Either the record is valid, or the violations in the order the rules ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(violations) => violations,
        }
    }

    /// Messages reported for a rendered path such as `"jobs[0].from"`
    pub fn messages_for(&self, path: &str) -> Vec<&str> {
        self.violations()
            .iter()
            .filter(|v| v.field.to_string() == path)
            .map(|v| v.message.as_str())
            .collect()
    }

    /// Groups messages per rendered path, for display next to each input
    pub fn by_field(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for violation in self.violations() {
            grouped
                .entry(violation.field.to_string())
                .or_default()
                .push(violation.message.clone());
        }
        grouped
    }

    pub fn into_result(self) -> Result<(), Vec<Violation>> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(violations) => Err(violations),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("violations", self.violations())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_path_rendering() {
        let cases = vec![
            (FieldPath::field("email"), "email"),
            (FieldPath::field("resume").at(0), "resume[0]"),
            (FieldPath::field("jobs").at(1).sub("from"), "jobs[1].from"),
        ];

        for (path, expected) in cases {
            assert_eq!(path.to_string(), expected);
        }
    }

    #[test]
    fn test_empty_violations_are_valid() {
        assert_eq!(
            ValidationResult::from_violations(vec![]),
            ValidationResult::Valid
        );
        assert!(ValidationResult::Valid.violations().is_empty());
        assert!(ValidationResult::Valid.into_result().is_ok());
    }

    #[test]
    fn test_grouping_and_lookup() {
        let result = ValidationResult::from_violations(vec![
            Violation::new(FieldPath::field("email"), "Email should not contain '+' sign"),
            Violation::new(FieldPath::field("zip"), "ZIP code must be between 4 and 10 digits"),
            Violation::new(FieldPath::field("email"), "Email should not contain subdomains"),
        ]);

        assert!(!result.is_valid());
        assert_eq!(result.messages_for("email").len(), 2);
        assert!(result.messages_for("phone").is_empty());

        let grouped = result.by_field();
        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["email", "zip"]);
    }

    #[test]
    fn test_serialization() {
        let result = ValidationResult::from_violations(vec![Violation::new(
            FieldPath::field("jobs").at(0).sub("from"),
            "From date should be less than To date",
        )]);

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "valid": false,
                "violations": [
                    {"field": "jobs[0].from", "message": "From date should be less than To date"}
                ]
            })
        );

        assert_eq!(
            serde_json::to_value(ValidationResult::Valid).unwrap(),
            json!({"valid": true, "violations": []})
        );
    }
}
