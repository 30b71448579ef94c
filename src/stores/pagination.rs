//! Page slicing over an ordered collection.
//!
//! Pages are 1-based. A page past the end is walked back one page at a time
//! until its start offset no longer exceeds the collection length, so high
//! page numbers clamp to the last page instead of coming back empty. The walk
//! is computed in closed form: the largest page whose start offset is within
//! bounds is `len / size + 1`.

use std::ops::Range;

/// Returns the index range of `page` (1-based) when `len` items are split into
/// pages of `size` items.
///
/// - `size == 0` always yields an empty range.
/// - `page == 0` is treated as the first page.
/// - A short final page runs to `len`.
/// - When `len` is an exact multiple of `size`, clamping stops at the page
///   starting at `len`, which is empty.
pub fn page_range(len: usize, page: usize, size: usize) -> Range<usize> {
    if size == 0 {
        return 0..0;
    }
    let index = page.saturating_sub(1).min(len / size);
    // index * size <= len, so this cannot overflow
    let start = index * size;
    let end = start.saturating_add(size).min(len);
    start..end
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Walks the page number down one step at a time, the literal form of the
    /// clamping rule.
    fn walk_pages(len: usize, mut page: usize, size: usize) -> Range<usize> {
        if size == 0 {
            return 0..0;
        }
        while (page - 1) * size > len {
            page -= 1;
        }
        let start = (page - 1) * size;
        let end = (page * size).min(len);
        start..end
    }

    // Property: closed form matches the step-by-step walk
    proptest! {
        #[test]
        fn prop_matches_page_walk(len in 0usize..200, page in 1usize..100, size in 0usize..50) {
            prop_assert_eq!(page_range(len, page, size), walk_pages(len, page, size));
        }
    }

    // Property: a page never exceeds the requested size or the collection
    proptest! {
        #[test]
        fn prop_page_is_bounded(len in 0usize..500, page in 0usize..1000, size in 0usize..100) {
            let range = page_range(len, page, size);
            prop_assert!(range.start <= range.end);
            prop_assert!(range.end <= len);
            prop_assert!(range.len() <= size);
        }
    }
}
