//! Offset pagination over an already-loaded result set.

use posts_shared::dto::DEFAULT_PAGE_SIZE;

/// Requested page, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Build a request, replacing out-of-range values with defaults.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: if page_size < 1 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    pub fn offset(&self) -> usize {
        (self.page as usize)
            .saturating_sub(1)
            .saturating_mul(self.page_size as usize)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus the totals needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Cut the requested window out of `all`.
    ///
    /// A window past the end yields an empty page, never an error.
    pub fn paginate(all: Vec<T>, total_count: u64, request: PageRequest) -> Self {
        let request = PageRequest::new(request.page, request.page_size);
        let offset = request.offset();

        let items = if offset >= all.len() {
            Vec::new()
        } else {
            all.into_iter()
                .skip(offset)
                .take(request.page_size as usize)
                .collect()
        };

        Self {
            items,
            total_count,
            page: request.page,
            page_size: request.page_size,
            total_pages: total_count.div_ceil(u64::from(request.page_size)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: u64) -> Vec<u64> {
        (0..n).collect()
    }

    #[test]
    fn test_first_page() {
        let page = Page::paginate(numbers(25), 25, PageRequest::new(1, 10));

        assert_eq!(page.items, (0..10).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let page = Page::paginate(numbers(25), 25, PageRequest::new(3, 10));

        assert_eq!(page.items, vec![20, 21, 22, 23, 24]);
        assert_eq!(page.total_count, 25);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = Page::paginate(numbers(5), 5, PageRequest::new(4, 10));

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_empty_set() {
        let page = Page::paginate(Vec::<u64>::new(), 0, PageRequest::default());

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_offset_of_zero_page_literal() {
        let raw = PageRequest {
            page: 0,
            page_size: 10,
        };
        assert_eq!(raw.offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn test_normalizes_request() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);

        let raw = PageRequest {
            page: 0,
            page_size: 0,
        };
        let page = Page::paginate(numbers(3), 3, raw);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_slice_length_matches_formula() {
        for total in 0..40u64 {
            for page_size in 1..=12u32 {
                for page in 1..=6u32 {
                    let result =
                        Page::paginate(numbers(total), total, PageRequest::new(page, page_size));

                    let start = u64::from(page - 1) * u64::from(page_size);
                    let expected = total.saturating_sub(start).min(u64::from(page_size));

                    assert_eq!(result.items.len() as u64, expected);
                    assert_eq!(
                        result.total_pages,
                        (total + u64::from(page_size) - 1) / u64::from(page_size)
                    );
                }
            }
        }
    }
}
