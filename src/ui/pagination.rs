#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: i64, current: bool },
    Ellipsis,
}

/// Page-number list for a pagination bar.
///
/// Shows the first page, the neighbours of `effective_page` and the last page,
/// with an ellipsis standing in for every skipped run.
pub fn page_items(effective_page: i64, total_pages: usize) -> Vec<PageItem> {
    let total = i64::try_from(total_pages).unwrap_or(i64::MAX);
    if total == 0 {
        return Vec::new();
    }
    let current = effective_page.clamp(1, total);
    let page = |number: i64| PageItem::Page {
        number,
        current: number == current,
    };

    let mut items = vec![page(1)];
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }
    for number in (current - 1)..=(current + 1) {
        if number > 1 && number < total {
            items.push(page(number));
        }
    }
    if current < total - 2 {
        items.push(PageItem::Ellipsis);
    }
    if total > 1 {
        items.push(page(total));
    }
    items
}

pub fn prev_page(effective_page: i64) -> Option<i64> {
    (effective_page > 1).then(|| effective_page - 1)
}

pub fn next_page(effective_page: i64, total_pages: usize) -> Option<i64> {
    let total = i64::try_from(total_pages).unwrap_or(i64::MAX);
    (effective_page < total).then(|| effective_page + 1)
}

/// One-line rendering, e.g. `< 1 … 4 [5] 6 … 12 >`.
pub fn render_page_bar(effective_page: i64, total_pages: usize) -> String {
    let mut parts = Vec::new();
    if prev_page(effective_page).is_some() {
        parts.push("<".to_string());
    }
    for item in page_items(effective_page, total_pages) {
        parts.push(match item {
            PageItem::Page {
                number,
                current: true,
            } => format!("[{number}]"),
            PageItem::Page { number, .. } => number.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        });
    }
    if next_page(effective_page, total_pages).is_some() {
        parts.push(">".to_string());
    }
    parts.join(" ")
}
