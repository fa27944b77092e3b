//! Shared validation helpers for inbound HTTP adapters.
//!
//! Re-expresses the original framework-declared constraints as explicit
//! functions run before the service call. Failures produce an
//! `invalid_request` domain error whose details carry a structured list of
//! `{field, code, message}` violations.

use serde_json::{Value, json};

use crate::domain::Error;
use pagination::PageRequestError;

/// One field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Violation {
    field: &'static str,
    code: &'static str,
    message: String,
}

impl Violation {
    /// A required field was absent from the body.
    pub(crate) fn missing(field: &'static str) -> Self {
        Self {
            field,
            code: "missing_field",
            message: format!("missing required field: {field}"),
        }
    }

    /// A supplied field was empty once trimmed.
    pub(crate) fn blank(field: &'static str) -> Self {
        Self {
            field,
            code: "blank_field",
            message: format!("{field} must not be blank"),
        }
    }

    fn to_json(&self) -> Value {
        json!({
            "field": self.field,
            "code": self.code,
            "message": self.message,
        })
    }
}

/// Collapse violations into a single 400-class domain error.
pub(crate) fn violations_error(violations: Vec<Violation>) -> Error {
    let listed: Vec<Value> = violations.iter().map(Violation::to_json).collect();
    Error::invalid_request("restaurant body failed validation")
        .with_details(json!({ "violations": listed }))
}

/// Reject a sort key naming a column the store cannot order by.
pub(crate) fn unknown_sort_field_error(field: &str) -> Error {
    Error::invalid_request(format!("cannot sort by unknown field {field:?}")).with_details(json!({
        "field": "sort",
        "value": field,
        "code": "unknown_sort_field",
    }))
}

/// Reject malformed `page`/`size`/`sort` query parameters.
pub(crate) fn invalid_paging_error(error: &PageRequestError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({
        "code": "invalid_paging",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[test]
    fn violations_are_listed_in_the_error_details() {
        let error = violations_error(vec![Violation::missing("name"), Violation::blank("city")]);

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        let details = error.details().expect("details present");
        let violations = details["violations"].as_array().expect("violation list");
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0]["code"], "missing_field");
        assert_eq!(violations[1]["code"], "blank_field");
        assert_eq!(violations[1]["field"], "city");
    }

    #[test]
    fn unknown_sort_field_names_the_offending_value() {
        let error = unknown_sort_field_error("menus");
        let details = error.details().expect("details present");
        assert_eq!(details["value"], "menus");
        assert_eq!(details["code"], "unknown_sort_field");
    }
}
