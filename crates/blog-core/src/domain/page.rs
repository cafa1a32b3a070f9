use serde::Serialize;

/// A 1-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Number of rows to skip before this page starts.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// Pagination state exposed to the listing template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub num_pages: u64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Pagination {
    /// Resolve a page request against the total number of items.
    ///
    /// Returns `None` when the page lies outside the listing. Page 1 always
    /// exists, even for an empty listing.
    pub fn resolve(request: PageRequest, total: u64) -> Option<Self> {
        if request.page == 0 || request.per_page == 0 {
            return None;
        }

        let num_pages = total.div_ceil(request.per_page).max(1);
        if request.page > num_pages {
            return None;
        }

        Some(Self {
            page: request.page,
            num_pages,
            has_previous: request.page > 1,
            has_next: request.page < num_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn test_offset_saturates_for_huge_pages() {
        assert_eq!(PageRequest::new(u64::MAX, 10).offset(), u64::MAX);
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
    }

    #[test]
    fn test_resolve_middle_page() {
        let pagination = Pagination::resolve(PageRequest::new(2, 2), 5).unwrap();
        assert_eq!(pagination.num_pages, 3);
        assert!(pagination.has_previous);
        assert!(pagination.has_next);
    }

    #[test]
    fn test_first_page_of_empty_listing_exists() {
        let pagination = Pagination::resolve(PageRequest::new(1, 5), 0).unwrap();
        assert_eq!(pagination.num_pages, 1);
        assert!(!pagination.has_next);
    }

    #[test]
    fn test_out_of_range_pages() {
        assert!(Pagination::resolve(PageRequest::new(0, 5), 10).is_none());
        assert!(Pagination::resolve(PageRequest::new(3, 5), 10).is_none());
    }
}
