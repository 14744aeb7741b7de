use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExamType {
    Midterm,
    Final,
    Quiz,
    Makeup,
}

impl ExamType {
    pub fn label(self) -> &'static str {
        match self {
            ExamType::Midterm => "Midterm",
            ExamType::Final => "Final",
            ExamType::Quiz => "Quiz",
            ExamType::Makeup => "Makeup",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExamType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "midterm" | "mid" => Ok(ExamType::Midterm),
            "final" => Ok(ExamType::Final),
            "quiz" => Ok(ExamType::Quiz),
            "makeup" | "make-up" => Ok(ExamType::Makeup),
            other => Err(format!("unknown exam type: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamEntry {
    pub course_code: String,
    pub course_title: String,
    pub exam_type: ExamType,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub room: String,
}
