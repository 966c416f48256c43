/// An entry of the page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Number of pages for `len` rows; an empty table still has one page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Page window around `current` (1-based).
///
/// The first and last page are always present, `siblings` pages are shown on
/// each side of the current one and gaps collapse into a single ellipsis.
/// Once the window would be as wide as the whole range, every page is listed.
pub fn page_window(current: usize, total: usize, siblings: usize) -> Vec<PageItem> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    // first + last + current + 2 * siblings + 2 ellipses
    let full_width = 2 * siblings + 5;

    if total <= full_width {
        return (1..=total).map(PageItem::Page).collect();
    }

    let left = current.saturating_sub(siblings).max(1);
    let right = (current + siblings).min(total);
    let show_left_gap = left > 2;
    let show_right_gap = right + 1 < total;
    let edge_width = 2 * siblings + 3;

    let mut items = Vec::with_capacity(full_width);
    match (show_left_gap, show_right_gap) {
        (false, _) => {
            items.extend((1..=edge_width).map(PageItem::Page));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        }
        (true, false) => {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            items.extend((total - edge_width + 1..=total).map(PageItem::Page));
        }
        (true, true) => {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            items.extend((left..=right).map(PageItem::Page));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use PageItem::{Ellipsis, Page};

    fn pages(items: &[PageItem]) -> Vec<usize> {
        items
            .iter()
            .filter_map(|i| match i {
                Page(p) => Some(*p),
                Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_short_range_lists_every_page() {
        assert_eq!(
            page_window(3, 5, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(page_window(1, 1, 1), vec![Page(1)]);
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(
            page_window(2, 20, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_window_in_the_middle() {
        assert_eq!(
            page_window(10, 20, 1),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(
            page_window(19, 20, 1),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(page_window(0, 3, 1), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(pages(&page_window(99, 20, 1)).last(), Some(&20));
    }

    proptest! {
        #[test]
        fn window_keeps_edges_and_current(total in 1usize..200, current in 1usize..200, siblings in 0usize..3) {
            let current = current.min(total);
            let window = page_window(current, total, siblings);
            let listed = pages(&window);

            prop_assert_eq!(listed.first().copied(), Some(1));
            prop_assert_eq!(listed.last().copied(), Some(total));
            prop_assert!(listed.contains(&current));
        }

        #[test]
        fn window_never_repeats_a_page(total in 1usize..200, current in 1usize..200, siblings in 0usize..3) {
            let listed = pages(&page_window(current, total, siblings));
            let mut sorted = listed.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted, listed);
        }

        #[test]
        fn ellipsis_only_marks_real_gaps(total in 1usize..200, current in 1usize..200) {
            let window = page_window(current, total, 1);
            for pair in window.windows(3) {
                if let [Page(a), Ellipsis, Page(b)] = pair {
                    prop_assert!(b - a > 1);
                }
            }
        }
    }
}
