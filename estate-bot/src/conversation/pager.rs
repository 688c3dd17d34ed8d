//! Fixed-size pages over a slice.

/// One page of items, 0-based `index` out of `count` pages.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub index: usize,
    pub count: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.count
    }
}

/// Number of pages for `len` items; at least one so an empty list still renders.
pub fn page_count(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// The page at `index`, clamped to the last page.
pub fn page<T>(items: &[T], index: usize, page_size: usize) -> Page<'_, T> {
    let size = page_size.max(1);
    let count = page_count(items.len(), size);
    let index = index.min(count - 1);
    let start = (index * size).min(items.len());
    let end = (start + size).min(items.len());
    Page {
        items: &items[start..end],
        index,
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(3, 0), 3);
    }

    #[test]
    fn test_pages() {
        let items: Vec<u32> = (1..=12).collect();

        let first = page(&items, 0, 5);
        assert_eq!(first.items, &[1, 2, 3, 4, 5]);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = page(&items, 2, 5);
        assert_eq!(last.items, &[11, 12]);
        assert!(last.has_prev());
        assert!(!last.has_next());

        let clamped = page(&items, 9, 5);
        assert_eq!(clamped.index, 2);
    }

    #[test]
    fn test_empty_page() {
        let items: Vec<u32> = Vec::new();
        let only = page(&items, 3, 5);
        assert!(only.items.is_empty());
        assert_eq!((only.index, only.count), (0, 1));
    }
}
