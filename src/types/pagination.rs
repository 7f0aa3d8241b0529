//! Pagination types for list endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination query parameters.
///
/// Malformed or zero values fall back to the defaults instead of failing the
/// request.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default = "default_page", deserialize_with = "lenient_page")]
    pub page: u64,
    /// Items per page, capped at 100
    #[serde(default = "default_per_page", deserialize_with = "lenient_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn lenient<'de, D>(deserializer: D, fallback: u64) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(fallback))
}

fn lenient_page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    lenient(deserializer, DEFAULT_PAGE_NUMBER)
}

fn lenient_per_page<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    lenient(deserializer, DEFAULT_PAGE_SIZE)
}

impl PaginationParams {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Page number, never below 1
    pub fn page(&self) -> u64 {
        self.page.max(1)
    }

    /// Page size clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> u64 {
        self.per_page.clamp(1, MAX_PAGE_SIZE)
    }

    /// Row offset for the store query, `None` when it does not fit a
    /// signed 64-bit SQL parameter
    pub fn offset(&self) -> Option<u64> {
        (self.page() - 1)
            .checked_mul(self.limit())
            .filter(|offset| i64::try_from(*offset).is_ok())
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, params: PaginationParams, total: u64) -> Self {
        let per_page = params.limit();
        Self {
            data,
            meta: PaginationMeta {
                page: params.page(),
                per_page,
                total,
                total_pages: total.div_ceil(per_page),
            },
        }
    }

    /// Convert every item, keeping the metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{extract::Query, http::Uri};

    fn parse(query: &str) -> PaginationParams {
        let uri: Uri = format!("/cars?{}", query).parse().unwrap();
        Query::<PaginationParams>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_defaults() {
        let params = parse("");
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 5);
        assert_eq!(params.offset(), Some(0));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let params = parse("page=abc&per_page=-3");
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 5);

        let params = parse("page=0");
        assert_eq!(params.page(), 1);
    }

    #[test]
    fn test_per_page_capped() {
        let params = parse("page=3&per_page=1000");
        assert_eq!(params.limit(), MAX_PAGE_SIZE);
        assert_eq!(params.offset(), Some(2 * MAX_PAGE_SIZE));
    }

    #[test]
    fn test_huge_page_has_no_offset() {
        let params = parse("page=4000000000000000000");
        assert_eq!(params.page(), 4_000_000_000_000_000_000);
        assert_eq!(params.offset(), None);

        assert_eq!(PaginationParams::new(u64::MAX, 100).offset(), None);
        assert_eq!(PaginationParams::new(u64::MAX / 8, 5).offset(), None);
    }

    #[test]
    fn test_total_pages() {
        let page: Paginated<u8> = Paginated::new(vec![], PaginationParams::new(4, 5), 11);
        assert_eq!(page.meta.total_pages, 3);
        assert!(page.data.is_empty());

        let empty: Paginated<u8> = Paginated::new(vec![], PaginationParams::default(), 0);
        assert_eq!(empty.meta.total_pages, 0);
    }
}
