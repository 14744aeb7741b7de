use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::entities::exam::{ExamEntry, ExamType};
use crate::domain::entities::view::{SortDirection, ViewParams};
use crate::usecase::services::view_engine::reset_page_on_param_change;

pub const EXAM_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExamSort {
    /// Date, then start time.
    #[default]
    Schedule,
    CourseCode,
    Room,
}

impl ExamSort {
    pub fn key(self) -> &'static str {
        match self {
            ExamSort::Schedule => "schedule",
            ExamSort::CourseCode => "course",
            ExamSort::Room => "room",
        }
    }
}

impl FromStr for ExamSort {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "schedule" | "date" => Ok(ExamSort::Schedule),
            "course" | "code" => Ok(ExamSort::CourseCode),
            "room" => Ok(ExamSort::Room),
            other => Err(format!("unknown exam sort: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamControls {
    pub search: String,
    pub exam_type: Option<ExamType>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub sort: ExamSort,
    pub direction: SortDirection,
    pub page: i64,
}

impl Default for ExamControls {
    fn default() -> Self {
        Self {
            search: String::new(),
            exam_type: None,
            from: None,
            to: None,
            sort: ExamSort::default(),
            direction: SortDirection::default(),
            page: 1,
        }
    }
}

impl ExamControls {
    pub fn params(&self, page_size: usize) -> ViewParams<ExamEntry> {
        let exam_type = self.exam_type;
        let from = self.from;
        let to = self.to;
        let filter_key = format!(
            "type={};from={};to={}",
            exam_type.map(ExamType::label).unwrap_or("*"),
            from.map(|d| d.to_string()).unwrap_or_else(|| "*".to_string()),
            to.map(|d| d.to_string()).unwrap_or_else(|| "*".to_string()),
        );

        let sort = self.sort;
        let direction = self.direction;

        ViewParams::new(page_size)
            .with_search(self.search.clone(), |exam: &ExamEntry| {
                vec![
                    exam.course_code.clone(),
                    exam.course_title.clone(),
                    exam.room.clone(),
                ]
            })
            .with_filter(filter_key, move |exam: &ExamEntry| {
                exam_type.map_or(true, |t| exam.exam_type == t)
                    && from.map_or(true, |d| exam.date >= d)
                    && to.map_or(true, |d| exam.date <= d)
            })
            .with_sort(
                format!("{}:{}", sort.key(), direction.label()),
                move |a: &ExamEntry, b: &ExamEntry| {
                    let ordering = match sort {
                        ExamSort::Schedule => a.date.cmp(&b.date).then_with(|| a.start.cmp(&b.start)),
                        ExamSort::CourseCode => a.course_code.cmp(&b.course_code),
                        ExamSort::Room => a.room.cmp(&b.room),
                    };
                    direction.apply(ordering)
                },
            )
            .at_page(self.page)
    }

    pub fn apply(&mut self, next: ExamControls) {
        let reset = reset_page_on_param_change(
            &self.params(EXAM_PAGE_SIZE),
            &next.params(EXAM_PAGE_SIZE),
        );
        *self = next;
        if reset {
            self.page = 1;
        }
    }
}
