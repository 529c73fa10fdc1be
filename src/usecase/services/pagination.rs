use crate::domain::entities::view::PageLabel;

const FULL_WINDOW_MAX_PAGES: usize = 5;
const EDGE_PAGES: usize = 3;

/// Page controls for the pagination row, at most seven labels.
///
/// The first and last pages are always present; long ranges collapse into
/// ellipsis markers around a three-page neighbourhood of `current`.
pub fn pagination_window(current: usize, total: usize) -> Vec<PageLabel> {
    let total = total.max(1);

    if total <= FULL_WINDOW_MAX_PAGES {
        return (1..=total).map(PageLabel::Page).collect();
    }

    if current <= EDGE_PAGES {
        vec![
            PageLabel::Page(1),
            PageLabel::Page(2),
            PageLabel::Page(3),
            PageLabel::Page(4),
            PageLabel::Ellipsis,
            PageLabel::Page(total),
        ]
    } else if current > total - EDGE_PAGES {
        vec![
            PageLabel::Page(1),
            PageLabel::Ellipsis,
            PageLabel::Page(total - 3),
            PageLabel::Page(total - 2),
            PageLabel::Page(total - 1),
            PageLabel::Page(total),
        ]
    } else {
        vec![
            PageLabel::Page(1),
            PageLabel::Ellipsis,
            PageLabel::Page(current - 1),
            PageLabel::Page(current),
            PageLabel::Page(current + 1),
            PageLabel::Ellipsis,
            PageLabel::Page(total),
        ]
    }
}
