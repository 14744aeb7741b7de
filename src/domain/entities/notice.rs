use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeCategory {
    General,
    Academic,
    Exam,
    Event,
    Scholarship,
}

impl NoticeCategory {
    pub fn label(self) -> &'static str {
        match self {
            NoticeCategory::General => "General",
            NoticeCategory::Academic => "Academic",
            NoticeCategory::Exam => "Exam",
            NoticeCategory::Event => "Event",
            NoticeCategory::Scholarship => "Scholarship",
        }
    }
}

impl fmt::Display for NoticeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NoticeCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "general" => Ok(NoticeCategory::General),
            "academic" => Ok(NoticeCategory::Academic),
            "exam" | "exams" => Ok(NoticeCategory::Exam),
            "event" | "events" => Ok(NoticeCategory::Event),
            "scholarship" | "scholarships" => Ok(NoticeCategory::Scholarship),
            other => Err(format!("unknown notice category: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub category: NoticeCategory,
    pub published: NaiveDate,
    pub pinned: bool,
}
