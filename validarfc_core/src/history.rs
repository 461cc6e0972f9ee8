//! Pagination over the validation history.

use serde::{Deserialize, Serialize};

use crate::ValidationRecord;

/// Bounds applied to untrusted pagination input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLimits {
    /// Page size used when the caller gives none, or an unusable one
    pub default_per_page: u64,
    /// Upper bound on the page size
    pub max_per_page: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_per_page: 20,
            max_per_page: 100,
        }
    }
}

/// A resolved, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u64 = 1;

    /// Resolve raw query-string values.
    ///
    /// Missing, non-numeric, and non-positive values silently fall back to
    /// the defaults; `per_page` is capped at `limits.max_per_page`.
    #[must_use]
    pub fn from_query(page: Option<&str>, per_page: Option<&str>, limits: &PageLimits) -> Self {
        let page = parse_positive(page).unwrap_or(Self::DEFAULT_PAGE);
        let per_page = parse_positive(per_page)
            .unwrap_or(limits.default_per_page.max(1))
            .min(limits.max_per_page.max(1));
        Self { page, per_page }
    }

    /// Rows to skip before this page starts.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|n| *n > 0)
}

/// One page of history, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryPage {
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub items: Vec<ValidationRecord>,
}

impl HistoryPage {
    /// The page returned when storage cannot be read.
    #[must_use]
    pub const fn empty(request: PageRequest) -> Self {
        Self {
            total: 0,
            page: request.page,
            per_page: request.per_page,
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(page: Option<&str>, per_page: Option<&str>) -> PageRequest {
        PageRequest::from_query(page, per_page, &PageLimits::default())
    }

    #[test]
    fn defaults_when_absent() {
        assert_eq!(
            resolve(None, None),
            PageRequest {
                page: 1,
                per_page: 20
            }
        );
    }

    #[test]
    fn non_numeric_falls_back_to_defaults() {
        let req = resolve(Some("two"), Some("lots"));
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 20);
    }

    #[test]
    fn non_positive_falls_back_to_defaults() {
        let req = resolve(Some("0"), Some("-5"));
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 20);
    }

    #[test]
    fn numeric_values_are_used() {
        let req = resolve(Some("3"), Some("7"));
        assert_eq!(req.page, 3);
        assert_eq!(req.per_page, 7);
        assert_eq!(req.offset(), 14);
    }

    #[test]
    fn per_page_is_capped() {
        let req = resolve(None, Some("100000"));
        assert_eq!(req.per_page, 100);
    }

    #[test]
    fn zero_default_page_size_is_raised_to_one() {
        let limits = PageLimits {
            default_per_page: 0,
            max_per_page: 100,
        };
        let req = PageRequest::from_query(None, None, &limits);
        assert_eq!(req.per_page, 1);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn first_page_has_no_offset() {
        assert_eq!(resolve(Some("1"), Some("50")).offset(), 0);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let req = resolve(Some(&u64::MAX.to_string()), Some("100"));
        assert_eq!(req.offset(), u64::MAX);
    }

    #[test]
    fn empty_page_echoes_request() {
        let page = HistoryPage::empty(resolve(Some("2"), Some("5")));
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 2);
        assert_eq!(page.per_page, 5);
        assert!(page.items.is_empty());
    }
}
