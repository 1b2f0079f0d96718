use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl PageQuery {
    /// Creates a new PageQuery for the given page number and page size.
    ///
    /// # Arguments
    /// * `page` - The 1-based page number to request
    /// * `limit` - The maximum number of items per page
    ///
    /// # Returns
    /// * `Self` - A new PageQuery instance
    pub fn new(page: u32, limit: u32) -> Self {
        PageQuery { page, limit }
    }

    /// Creates a query for the first page with the given page size.
    pub fn first(limit: u32) -> Self {
        PageQuery { page: 1, limit }
    }

    /// Creates the next page query based on the current result length.
    ///
    /// Returns None if there are no more results (result_length is 0).
    ///
    /// # Arguments
    /// * `result_length` - The number of items in the current result set
    ///
    /// # Returns
    /// * `Some(Self)` - The next page query if more results may exist
    /// * `None` - If no more results are available
    pub fn next(&self, result_length: usize) -> Option<Self> {
        if result_length == 0 {
            return None;
        }

        Some(PageQuery { page: self.page + 1, limit: self.limit })
    }

    /// Creates the previous page query.
    ///
    /// Returns None if already at the first page.
    pub fn previous(&self) -> Option<Self> {
        if self.page <= 1 {
            return None;
        }

        Some(PageQuery { page: self.page - 1, limit: self.limit })
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        PageQuery { page: 1, limit: 10 }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageInfo {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: Option<u32>,
}

/// A single page of results as returned by the admin list endpoints:
/// `{ "data": [...], "pagination": { ... } }`.
#[derive(Debug, Deserialize, Serialize)]
pub struct Paginated<TResult> {
    pub data: Vec<TResult>,
    pub pagination: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_stops_on_empty_result() {
        let query = PageQuery::new(3, 10);
        assert!(query.next(0).is_none());

        let next = query.next(10).unwrap();
        assert_eq!(next.page, 4);
        assert_eq!(next.limit, 10);
    }

    #[test]
    fn previous_stops_at_first_page() {
        assert!(PageQuery::first(10).previous().is_none());

        let previous = PageQuery::new(2, 25).previous().unwrap();
        assert_eq!(previous.page, 1);
        assert_eq!(previous.limit, 25);
    }
}
