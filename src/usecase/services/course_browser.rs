use std::str::FromStr;

use crate::domain::entities::course::Course;
use crate::domain::entities::view::{SortDirection, ViewParams};
use crate::usecase::services::view_engine::reset_page_on_param_change;

pub const COURSE_PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseSort {
    #[default]
    Code,
    Title,
    YearThenSemester,
    Credits,
}

impl CourseSort {
    pub fn key(self) -> &'static str {
        match self {
            CourseSort::Code => "code",
            CourseSort::Title => "title",
            CourseSort::YearThenSemester => "year-semester",
            CourseSort::Credits => "credits",
        }
    }
}

impl FromStr for CourseSort {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "code" => Ok(CourseSort::Code),
            "title" => Ok(CourseSort::Title),
            "year" | "year-semester" => Ok(CourseSort::YearThenSemester),
            "credits" => Ok(CourseSort::Credits),
            other => Err(format!("unknown course sort: {other}")),
        }
    }
}

/// Control state of the Programs course browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseControls {
    pub search: String,
    pub program: Option<String>,
    pub year: Option<u8>,
    pub semester: Option<u8>,
    pub sort: CourseSort,
    pub direction: SortDirection,
    pub page: i64,
}

impl Default for CourseControls {
    fn default() -> Self {
        Self {
            search: String::new(),
            program: None,
            year: None,
            semester: None,
            sort: CourseSort::default(),
            direction: SortDirection::default(),
            page: 1,
        }
    }
}

impl CourseControls {
    pub fn params(&self, page_size: usize) -> ViewParams<Course> {
        let program = self
            .program
            .as_ref()
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty());
        let year = self.year;
        let semester = self.semester;
        let filter_key = format!(
            "program={};year={};semester={}",
            program.as_deref().unwrap_or("*"),
            year.map(|y| y.to_string()).unwrap_or_else(|| "*".to_string()),
            semester
                .map(|s| s.to_string())
                .unwrap_or_else(|| "*".to_string()),
        );

        let sort = self.sort;
        let direction = self.direction;

        ViewParams::new(page_size)
            .with_search(self.search.clone(), |course: &Course| {
                vec![
                    course.code.clone(),
                    course.title.clone(),
                    course.instructor.clone(),
                ]
            })
            .with_filter(filter_key, move |course: &Course| {
                program
                    .as_ref()
                    .map_or(true, |p| course.program.to_lowercase() == *p)
                    && year.map_or(true, |y| course.year == y)
                    && semester.map_or(true, |s| course.semester == s)
            })
            .with_sort(
                format!("{}:{}", sort.key(), direction.label()),
                move |a: &Course, b: &Course| {
                    let ordering = match sort {
                        CourseSort::Code => a.code.to_lowercase().cmp(&b.code.to_lowercase()),
                        CourseSort::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
                        CourseSort::YearThenSemester => a
                            .year
                            .cmp(&b.year)
                            .then_with(|| a.semester.cmp(&b.semester)),
                        CourseSort::Credits => a.credits.cmp(&b.credits),
                    };
                    direction.apply(ordering)
                },
            )
            .at_page(self.page)
    }

    /// Adopts `next`, going back to page 1 when the result set changes shape.
    pub fn apply(&mut self, next: CourseControls) {
        let reset = reset_page_on_param_change(
            &self.params(COURSE_PAGE_SIZE),
            &next.params(COURSE_PAGE_SIZE),
        );
        *self = next;
        if reset {
            self.page = 1;
        }
    }
}
