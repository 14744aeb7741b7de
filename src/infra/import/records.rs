use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Days, NaiveDate, NaiveTime};

use crate::domain::entities::course::Course;
use crate::domain::entities::exam::{ExamEntry, ExamType};
use crate::domain::entities::notice::{Notice, NoticeCategory};
pub use crate::domain::entities::record::ParsedRecords;
use crate::domain::entities::record::RecordKind;

/// Where a table was read from. Worksheet cells may carry dates as serial
/// day numbers; text sources may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableOrigin {
    #[default]
    Text,
    Worksheet,
}

/// Header row plus string cells, as read from a CSV file or a worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabularData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub origin: TableOrigin,
}

pub fn parse_records(kind: RecordKind, data: &TabularData) -> Result<ParsedRecords> {
    Ok(match kind {
        RecordKind::Course => ParsedRecords::Courses(parse_courses(data)?),
        RecordKind::Exam => ParsedRecords::Exams(parse_exams(data)?),
        RecordKind::Notice => ParsedRecords::Notices(parse_notices(data)?),
    })
}

struct Columns<'a> {
    names: Vec<String>,
    kind: &'a str,
}

impl<'a> Columns<'a> {
    fn new(columns: &[String], kind: &'a str) -> Self {
        Self {
            names: columns.iter().map(|c| normalize_header(c)).collect(),
            kind,
        }
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.find(name)
            .ok_or_else(|| anyhow!("{} data is missing required column: {name}", self.kind))
    }

    fn find(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|c| c == name)
    }
}

fn normalize_header(value: &str) -> String {
    value.trim().to_lowercase().replace([' ', '-'], "_")
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|v| v.trim()).unwrap_or("")
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|v| v.trim().is_empty())
}

fn parse_number<T: FromStr>(value: &str, what: &str) -> Result<T> {
    // worksheets hand numbers back as floats, e.g. "2" arrives as "2" or "2.0"
    let trimmed = value.trim();
    let integral = trimmed.strip_suffix(".0").unwrap_or(trimmed);
    integral
        .parse::<T>()
        .map_err(|_| anyhow!("invalid {what}: {value:?}"))
}

/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD` or `YYYY-MM-DD HH:MM:SS` text.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    // datetime text such as "2024-05-02 00:00:00"
    if let Some((date_part, _)) = trimmed.split_once(' ') {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
            return Ok(date);
        }
    }
    bail!("invalid date: {value:?}")
}

/// Like [`parse_date`], plus the Excel serial day numbers that date-formatted
/// worksheet cells are read back as.
pub fn parse_sheet_date(value: &str) -> Result<NaiveDate> {
    if let Ok(date) = parse_date(value) {
        return Ok(date);
    }
    let serial = value
        .trim()
        .parse::<f64>()
        .map_err(|_| anyhow!("invalid date: {value:?}"))?;
    let epoch =
        NaiveDate::from_ymd_opt(1899, 12, 30).ok_or_else(|| anyhow!("invalid spreadsheet epoch"))?;
    if serial < 1.0 {
        bail!("invalid date serial: {value:?}");
    }
    epoch
        .checked_add_days(Days::new(serial.trunc() as u64))
        .ok_or_else(|| anyhow!("date serial out of range: {value:?}"))
}

fn date_parser(origin: TableOrigin) -> fn(&str) -> Result<NaiveDate> {
    match origin {
        TableOrigin::Text => parse_date,
        TableOrigin::Worksheet => parse_sheet_date,
    }
}

/// Accepts `HH:MM`, `HH:MM:SS` or an Excel day fraction.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    for format in ["%H:%M", "%H:%M:%S"] {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
            return Ok(time);
        }
    }
    if let Ok(fraction) = trimmed.parse::<f64>() {
        if (0.0..1.0).contains(&fraction) {
            let seconds = (fraction * 86_400.0).round() as u32;
            if let Some(time) = NaiveTime::from_num_seconds_from_midnight_opt(seconds % 86_400, 0)
            {
                return Ok(time);
            }
        }
    }
    bail!("invalid time: {value:?}")
}

pub fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "" | "0" | "false" | "no" | "n" => Ok(false),
        "1" | "true" | "yes" | "y" => Ok(true),
        _ => bail!("invalid flag: {value:?}"),
    }
}

pub fn parse_courses(data: &TabularData) -> Result<Vec<Course>> {
    let columns = Columns::new(&data.columns, "course");
    let code = columns.require("code")?;
    let title = columns.require("title")?;
    let program = columns.require("program")?;
    let year = columns.require("year")?;
    let semester = columns.require("semester")?;
    let credits = columns.find("credits");
    let instructor = columns.find("instructor");

    let mut courses = Vec::new();
    for (row_idx, row) in data.rows.iter().enumerate() {
        if is_blank(row) {
            continue;
        }
        let line = row_idx + 2;
        let course = Course {
            code: cell(row, code).to_string(),
            title: cell(row, title).to_string(),
            program: cell(row, program).to_string(),
            year: parse_number(cell(row, year), "year")
                .with_context(|| format!("course row {line}"))?,
            semester: parse_number(cell(row, semester), "semester")
                .with_context(|| format!("course row {line}"))?,
            credits: match credits {
                Some(idx) if !cell(row, idx).is_empty() => {
                    parse_number(cell(row, idx), "credits")
                        .with_context(|| format!("course row {line}"))?
                }
                _ => 0,
            },
            instructor: instructor
                .map(|idx| cell(row, idx).to_string())
                .unwrap_or_default(),
        };
        if course.code.is_empty() {
            bail!("course row {line}: code is empty");
        }
        courses.push(course);
    }
    Ok(courses)
}

pub fn parse_exams(data: &TabularData) -> Result<Vec<ExamEntry>> {
    let columns = Columns::new(&data.columns, "exam");
    let course_code = columns.require("course_code")?;
    let course_title = columns.find("course_title");
    let exam_type = columns.require("exam_type")?;
    let date = columns.require("date")?;
    let start = columns.require("start")?;
    let room = columns.require("room")?;
    let parse_day = date_parser(data.origin);

    let mut exams = Vec::new();
    for (row_idx, row) in data.rows.iter().enumerate() {
        if is_blank(row) {
            continue;
        }
        let line = row_idx + 2;
        exams.push(ExamEntry {
            course_code: cell(row, course_code).to_string(),
            course_title: course_title
                .map(|idx| cell(row, idx).to_string())
                .unwrap_or_default(),
            exam_type: cell(row, exam_type)
                .parse::<ExamType>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("exam row {line}"))?,
            date: parse_day(cell(row, date)).with_context(|| format!("exam row {line}"))?,
            start: parse_time(cell(row, start)).with_context(|| format!("exam row {line}"))?,
            room: cell(row, room).to_string(),
        });
    }
    Ok(exams)
}

pub fn parse_notices(data: &TabularData) -> Result<Vec<Notice>> {
    let columns = Columns::new(&data.columns, "notice");
    let title = columns.require("title")?;
    let body = columns.find("body");
    let category = columns.require("category")?;
    let published = columns.require("published")?;
    let pinned = columns.find("pinned");
    let parse_day = date_parser(data.origin);

    let mut notices = Vec::new();
    for (row_idx, row) in data.rows.iter().enumerate() {
        if is_blank(row) {
            continue;
        }
        let line = row_idx + 2;
        notices.push(Notice {
            id: 0,
            title: cell(row, title).to_string(),
            body: body.map(|idx| cell(row, idx).to_string()).unwrap_or_default(),
            category: cell(row, category)
                .parse::<NoticeCategory>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("notice row {line}"))?,
            published: parse_day(cell(row, published))
                .with_context(|| format!("notice row {line}"))?,
            pinned: match pinned {
                Some(idx) => {
                    parse_flag(cell(row, idx)).with_context(|| format!("notice row {line}"))?
                }
                None => false,
            },
        });
    }
    Ok(notices)
}
