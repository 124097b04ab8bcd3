use serde::Serialize;

/// One page of a collection. `page` is 1-indexed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    /// 1-based position of the first item shown, 0 when empty.
    pub fn first_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn last_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + self.items.len()
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Slices `items` into pages. Out-of-range page numbers are clamped to
/// `[1, total_pages]`; a zero page size is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page_number: i64) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let last = total_pages.max(1) as i64;
    let page = page_number.clamp(1, last) as usize;

    let start = ((page - 1) * page_size).min(total_items);
    let end = (start + page_size).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total_pages,
        total_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_first_page() {
        let page = paginate(&numbers(23), 10, 1);
        assert_eq!(page.items, numbers(10));
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.first_position(), 1);
        assert_eq!(page.last_position(), 10);
        assert!(page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate(&numbers(23), 10, 3);
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.first_position(), 21);
        assert_eq!(page.last_position(), 23);
        assert!(!page.has_next());
    }

    #[test]
    fn test_out_of_range_pages_are_clamped() {
        let items = numbers(23);
        for requested in [i64::MIN, -5, 0] {
            let page = paginate(&items, 10, requested);
            assert_eq!(page.page, 1);
            assert_eq!(page.items.first(), Some(&1));
        }
        for requested in [4, 99, i64::MAX] {
            let page = paginate(&items, 10, requested);
            assert_eq!(page.page, 3);
            assert_eq!(page.items, vec![21, 22, 23]);
        }
    }

    #[test]
    fn test_page_never_exceeds_page_size() {
        let items = numbers(57);
        for size in 1..=12 {
            for requested in -2..=70 {
                let page = paginate(&items, size, requested);
                assert!(page.items.len() <= size);
                assert!(page.page >= 1 && page.page <= page.total_pages.max(1));
            }
        }
    }

    #[test]
    fn test_empty_collection() {
        let page = paginate::<u8>(&[], 10, 7);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.first_position(), 0);
        assert!(!page.has_next());
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let page = paginate(&numbers(3), 0, 2);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.items, vec![2]);
        assert_eq!(page.total_pages, 3);
    }
}
