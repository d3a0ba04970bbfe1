use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::response::Pagination;
use crate::api::emitter::calculate_pagination;

/// Pagination query parameters (`?page=2&page_size=50`)
#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number (starts at 1, default: 1)
    pub page: Option<i64>,
    /// Number of results per page (default: 20)
    pub page_size: Option<i64>,
}

impl PaginationParams {
    /// Missing values fall through to the clamping defaults
    pub fn into_pagination(self, total: i64) -> Pagination {
        calculate_pagination(self.page.unwrap_or(0), self.page_size.unwrap_or(0), total)
    }

    /// Zero-based offset of the first row on this page, saturating at `i64::MAX`
    pub fn offset(&self) -> i64 {
        let p = self.into_pagination(0);
        (p.page - 1).saturating_mul(p.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let p = PaginationParams::default().into_pagination(45);
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, 20);
        assert_eq!(p.total_pages, 3);
    }

    #[test]
    fn test_offset() {
        let params = PaginationParams {
            page: Some(3),
            page_size: Some(25),
        };
        assert_eq!(params.offset(), 50);
        assert_eq!(PaginationParams::default().offset(), 0);
    }

    #[test]
    fn test_offset_saturates_on_huge_page() {
        let params = PaginationParams {
            page: Some(i64::MAX),
            page_size: Some(20),
        };
        assert_eq!(params.offset(), i64::MAX);
    }
}
