use chrono::Datelike;

use crate::domain::entities::notice::{Notice, NoticeCategory};
use crate::domain::entities::view::ViewParams;
use crate::usecase::services::view_engine::reset_page_on_param_change;

pub const NOTICE_PAGE_SIZE: usize = 6;

const NOTICE_SORT_KEY: &str = "pinned,published:desc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeControls {
    pub search: String,
    pub category: Option<NoticeCategory>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub page: i64,
}

impl Default for NoticeControls {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            year: None,
            month: None,
            page: 1,
        }
    }
}

impl NoticeControls {
    /// Pinned notices come first, then newest first.
    pub fn params(&self, page_size: usize) -> ViewParams<Notice> {
        let category = self.category;
        let year = self.year;
        let month = self.month;
        let filter_key = format!(
            "category={};year={};month={}",
            category.map(NoticeCategory::label).unwrap_or("*"),
            year.map(|y| y.to_string()).unwrap_or_else(|| "*".to_string()),
            month.map(|m| m.to_string()).unwrap_or_else(|| "*".to_string()),
        );

        ViewParams::new(page_size)
            .with_search(self.search.clone(), |notice: &Notice| {
                vec![notice.title.clone(), notice.body.clone()]
            })
            .with_filter(filter_key, move |notice: &Notice| {
                category.map_or(true, |c| notice.category == c)
                    && year.map_or(true, |y| notice.published.year() == y)
                    && month.map_or(true, |m| notice.published.month() == m)
            })
            .with_sort(NOTICE_SORT_KEY, |a: &Notice, b: &Notice| {
                b.pinned
                    .cmp(&a.pinned)
                    .then_with(|| b.published.cmp(&a.published))
            })
            .at_page(self.page)
    }

    pub fn apply(&mut self, next: NoticeControls) {
        let reset = reset_page_on_param_change(
            &self.params(NOTICE_PAGE_SIZE),
            &next.params(NOTICE_PAGE_SIZE),
        );
        *self = next;
        if reset {
            self.page = 1;
        }
    }
}
