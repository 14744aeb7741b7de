use std::fmt;
use std::str::FromStr;

use crate::domain::entities::course::Course;
use crate::domain::entities::exam::ExamEntry;
use crate::domain::entities::notice::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Course,
    Exam,
    Notice,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Course, RecordKind::Exam, RecordKind::Notice];

    pub fn table_name(self) -> &'static str {
        match self {
            RecordKind::Course => "course",
            RecordKind::Exam => "exam",
            RecordKind::Notice => "notice",
        }
    }

    /// Sheet name looked up in imported workbooks.
    pub fn sheet_name(self) -> &'static str {
        match self {
            RecordKind::Course => "courses",
            RecordKind::Exam => "exams",
            RecordKind::Notice => "notices",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "course" | "courses" => Ok(RecordKind::Course),
            "exam" | "exams" => Ok(RecordKind::Exam),
            "notice" | "notices" => Ok(RecordKind::Notice),
            other => Err(format!("unknown record kind: {other}")),
        }
    }
}

/// One kind's worth of records, as read from a CSV file or a workbook sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRecords {
    Courses(Vec<Course>),
    Exams(Vec<ExamEntry>),
    Notices(Vec<Notice>),
}

impl ParsedRecords {
    pub fn kind(&self) -> RecordKind {
        match self {
            ParsedRecords::Courses(_) => RecordKind::Course,
            ParsedRecords::Exams(_) => RecordKind::Exam,
            ParsedRecords::Notices(_) => RecordKind::Notice,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ParsedRecords::Courses(items) => items.len(),
            ParsedRecords::Exams(items) => items.len(),
            ParsedRecords::Notices(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
