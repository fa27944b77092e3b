//! Offset paging primitives shared by backend list endpoints.
//!
//! A [`PageRequest`] captures the caller's paging intent as a value object:
//! a 0-based page index, a page size, and an ordered list of [`SortKey`]s.
//! Requests are parsed from the conventional query-string form
//! `?page=1&size=10&sort=city,desc&sort=name,asc` where `sort` may repeat
//! and the direction defaults to ascending when omitted.
//!
//! The crate is transport and storage agnostic: adapters translate a
//! [`PageRequest`] into whatever offset/limit and ordering clauses their
//! backing store understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded;

/// Page size applied when the caller does not supply `size`.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Upper bound on the page size; larger requests are clamped to this value.
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Errors raised while building or parsing a [`PageRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// `page` was not a non-negative integer.
    #[error("page must be a non-negative integer, got {value:?}")]
    InvalidPage {
        /// The rejected raw value.
        value: String,
    },
    /// `size` was missing, zero, or not a positive integer.
    #[error("size must be a positive integer, got {value:?}")]
    InvalidSize {
        /// The rejected raw value.
        value: String,
    },
    /// A sort key had an empty field name.
    #[error("sort field must not be empty")]
    EmptySortField,
    /// A sort key carried a direction other than `asc` or `desc`.
    #[error("sort direction must be asc or desc, got {value:?}")]
    InvalidSortDirection {
        /// The rejected raw value.
        value: String,
    },
}

/// Direction applied to a single sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Non-decreasing order.
    #[default]
    Asc,
    /// Non-increasing order.
    Desc,
}

impl SortDirection {
    /// The lowercase wire form of the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = PageRequestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(PageRequestError::InvalidSortDirection {
                value: value.to_owned(),
            }),
        }
    }
}

/// One `(field, direction)` ordering criterion.
///
/// The wire form is `field,asc` or `field,desc`; a bare `field` sorts
/// ascending. Field names are kept verbatim so callers can validate them
/// against their own sortable-column whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortKey {
    field: String,
    direction: SortDirection,
}

impl SortKey {
    /// Build a sort key after checking the field name is non-blank.
    pub fn new(
        field: impl Into<String>,
        direction: SortDirection,
    ) -> Result<Self, PageRequestError> {
        let field = field.into();
        if field.trim().is_empty() {
            return Err(PageRequestError::EmptySortField);
        }
        Ok(Self { field, direction })
    }

    /// Shorthand for an ascending key.
    pub fn ascending(field: impl Into<String>) -> Result<Self, PageRequestError> {
        Self::new(field, SortDirection::Asc)
    }

    /// Shorthand for a descending key.
    pub fn descending(field: impl Into<String>) -> Result<Self, PageRequestError> {
        Self::new(field, SortDirection::Desc)
    }

    /// The field this key orders by.
    #[must_use]
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// The direction this key orders in.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl FromStr for SortKey {
    type Err = PageRequestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.split_once(',') {
            Some((field, direction)) => Self::new(field.trim(), direction.trim().parse()?),
            None => Self::new(value.trim(), SortDirection::Asc),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

/// Request for one bounded page of results plus its ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Vec<SortKey>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl PageRequest {
    /// Build a request for the given 0-based page index and page size.
    ///
    /// A zero size is rejected; sizes above [`MAX_PAGE_SIZE`] are clamped.
    pub fn new(page: u32, size: u32) -> Result<Self, PageRequestError> {
        if size == 0 {
            return Err(PageRequestError::InvalidSize {
                value: size.to_string(),
            });
        }
        Ok(Self {
            page,
            size: size.min(MAX_PAGE_SIZE),
            sort: Vec::new(),
        })
    }

    /// Replace the ordering criteria, keeping their relative order.
    #[must_use]
    pub fn with_sort(mut self, sort: Vec<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    /// Parse a request from a raw query string such as
    /// `page=1&size=10&sort=city,desc&sort=name,asc`.
    ///
    /// Missing parameters fall back to page 0 and [`DEFAULT_PAGE_SIZE`];
    /// repeated `page`/`size` parameters last-write-win while every `sort`
    /// parameter is kept in order. Unrecognised parameters are ignored.
    pub fn from_query(query: &str) -> Result<Self, PageRequestError> {
        let mut page: u32 = 0;
        let mut size: u32 = DEFAULT_PAGE_SIZE;
        let mut sort = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => {
                    page = value
                        .parse()
                        .map_err(|_| PageRequestError::InvalidPage {
                            value: value.to_string(),
                        })?;
                }
                "size" => {
                    size = value
                        .parse()
                        .ok()
                        .filter(|parsed| *parsed > 0)
                        .ok_or_else(|| PageRequestError::InvalidSize {
                            value: value.to_string(),
                        })?;
                }
                "sort" => sort.push(value.parse()?),
                _ => {}
            }
        }

        Self::new(page, size).map(|request| request.with_sort(sort))
    }

    /// The 0-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// The page size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Ordering criteria, outermost first.
    #[must_use]
    pub fn sort(&self) -> &[SortKey] {
        self.sort.as_slice()
    }

    /// Number of records to skip for this page.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.page as i64 * self.size as i64
    }

    /// Maximum number of records this page may hold.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.size as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_request_matches_documented_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), DEFAULT_PAGE_SIZE);
        assert!(request.sort().is_empty());
    }

    #[rstest]
    fn empty_query_yields_defaults() {
        let request = PageRequest::from_query("").expect("defaults parse");
        assert_eq!(request, PageRequest::default());
    }

    #[rstest]
    fn full_query_parses_every_parameter() {
        let request = PageRequest::from_query("page=1&size=10&sort=city,desc&sort=name,asc")
            .expect("valid query");
        assert_eq!(request.page(), 1);
        assert_eq!(request.size(), 10);
        assert_eq!(
            request.sort(),
            &[
                SortKey::descending("city").expect("valid key"),
                SortKey::ascending("name").expect("valid key"),
            ]
        );
    }

    #[rstest]
    fn bare_sort_field_defaults_to_ascending() {
        let request = PageRequest::from_query("sort=name").expect("valid query");
        assert_eq!(request.sort(), &[SortKey::ascending("name").expect("key")]);
    }

    #[rstest]
    fn unknown_parameters_are_ignored() {
        let request = PageRequest::from_query("page=2&flavour=umami").expect("valid query");
        assert_eq!(request.page(), 2);
        assert_eq!(request.size(), DEFAULT_PAGE_SIZE);
    }

    #[rstest]
    #[case("page=-1")]
    #[case("page=abc")]
    fn non_numeric_page_is_rejected(#[case] query: &str) {
        let err = PageRequest::from_query(query).expect_err("page rejected");
        assert!(matches!(err, PageRequestError::InvalidPage { .. }));
    }

    #[rstest]
    #[case("size=0")]
    #[case("size=five")]
    fn invalid_size_is_rejected(#[case] query: &str) {
        let err = PageRequest::from_query(query).expect_err("size rejected");
        assert!(matches!(err, PageRequestError::InvalidSize { .. }));
    }

    #[rstest]
    fn oversized_page_size_is_clamped() {
        let request = PageRequest::new(0, MAX_PAGE_SIZE + 1).expect("clamped");
        assert_eq!(request.size(), MAX_PAGE_SIZE);
    }

    #[rstest]
    fn blank_sort_field_is_rejected() {
        let err = PageRequest::from_query("sort=%20,asc").expect_err("field rejected");
        assert_eq!(err, PageRequestError::EmptySortField);
    }

    #[rstest]
    fn unknown_sort_direction_is_rejected() {
        let err = PageRequest::from_query("sort=name,sideways").expect_err("direction rejected");
        assert!(matches!(err, PageRequestError::InvalidSortDirection { .. }));
    }

    #[rstest]
    #[case(0, 5, 0)]
    #[case(1, 5, 5)]
    #[case(3, 7, 21)]
    fn offset_is_page_times_size(#[case] page: u32, #[case] size: u32, #[case] expected: i64) {
        let request = PageRequest::new(page, size).expect("valid request");
        assert_eq!(request.offset(), expected);
        assert_eq!(request.limit(), i64::from(size));
    }

    #[rstest]
    fn sort_key_round_trips_through_display() {
        let key: SortKey = "name,desc".parse().expect("valid key");
        assert_eq!(key.to_string(), "name,desc");
        assert_eq!(key.field(), "name");
        assert_eq!(key.direction(), SortDirection::Desc);
    }
}
