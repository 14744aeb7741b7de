use log::warn;

use crate::domain::entities::view::{DerivedView, ViewParams};

/// Filters, searches, stable-sorts and slices `records` into one page.
///
/// The step order is fixed: predicate, then search, then sort, then slice.
/// `records` is only borrowed; the returned view points into it.
pub fn compute_view<'a, T>(records: &'a [T], params: &ViewParams<T>) -> DerivedView<'a, T> {
    let page_size = effective_page_size(params.page_size);

    let mut matching: Vec<&'a T> = records
        .iter()
        .filter(|&record| (params.filter_predicate)(record))
        .collect();

    // only empty text skips matching; surrounding spaces are part of the needle
    if !params.search_text.is_empty() {
        let needle = params.search_text.to_lowercase();
        matching.retain(|record| {
            (params.search_fields)(*record)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        });
    }

    // slice::sort_by is stable, equal records keep collection order
    matching.sort_by(|a, b| (params.sort_comparator)(*a, *b));

    let total_matching = matching.len();
    let total_pages = total_pages(total_matching, page_size);
    let effective_page = clamp_page(params.current_page, total_pages);

    let visible_records = if total_matching == 0 {
        Vec::new()
    } else {
        let start = (effective_page as usize - 1) * page_size;
        let end = (start + page_size).min(total_matching);
        matching.drain(start..end).collect()
    };

    DerivedView {
        visible_records,
        total_matching,
        total_pages,
        effective_page,
    }
}

/// Clamps a requested page against the most recent view.
pub fn go_to_page<T>(view: &DerivedView<'_, T>, requested_page: i64) -> i64 {
    clamp_page(requested_page, view.total_pages)
}

pub fn clamp_page(requested_page: i64, total_pages: usize) -> i64 {
    let last = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    requested_page.clamp(1, last)
}

/// Returns true when the result set may change shape, so the caller must go
/// back to page 1. A change of `current_page` alone never triggers a reset.
pub fn reset_page_on_param_change<T>(previous: &ViewParams<T>, next: &ViewParams<T>) -> bool {
    previous.search_text != next.search_text
        || previous.filter_key != next.filter_key
        || previous.sort_key != next.sort_key
}

fn total_pages(total_matching: usize, page_size: usize) -> usize {
    if total_matching == 0 {
        0
    } else {
        total_matching.div_ceil(page_size)
    }
}

fn effective_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        warn!("page_size must be greater than zero, falling back to 1");
        1
    } else {
        page_size
    }
}
