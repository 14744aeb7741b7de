use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection};

use crate::domain::entities::course::Course;
use crate::domain::entities::exam::{ExamEntry, ExamType};
use crate::domain::entities::notice::{Notice, NoticeCategory};
use crate::domain::entities::record::{ParsedRecords, RecordKind};
use crate::infra::sqlite::schema::{init_db, open_connection};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

pub fn insert_courses(db_path: &Path, courses: &[Course]) -> Result<usize> {
    in_transaction(db_path, |tx| write_courses(tx, courses))
}

/// Inserts every batch in one transaction; on error nothing is stored.
pub fn insert_batches(db_path: &Path, batches: &[ParsedRecords]) -> Result<Vec<usize>> {
    in_transaction(db_path, |tx| {
        batches
            .iter()
            .map(|batch| match batch {
                ParsedRecords::Courses(courses) => write_courses(tx, courses),
                ParsedRecords::Exams(exams) => write_exams(tx, exams),
                ParsedRecords::Notices(notices) => write_notices(tx, notices),
            })
            .collect()
    })
}

fn in_transaction<R>(db_path: &Path, write: impl FnOnce(&Connection) -> Result<R>) -> Result<R> {
    init_db(db_path)?;
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start record insert transaction")?;
    let written = write(&tx)?;
    tx.commit()
        .context("failed to commit record insert transaction")?;
    Ok(written)
}

fn write_courses(conn: &Connection, courses: &[Course]) -> Result<usize> {
    let mut insert_course = conn
        .prepare(
            "INSERT INTO course(code, title, program, year, semester, credits, instructor)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .context("failed to prepare course insert")?;
    for course in courses {
        insert_course
            .execute(params![
                course.code,
                course.title,
                course.program,
                course.year,
                course.semester,
                course.credits,
                course.instructor,
            ])
            .with_context(|| format!("failed to insert course {}", course.code))?;
    }
    Ok(courses.len())
}

pub fn list_courses(db_path: &Path) -> Result<Vec<Course>> {
    init_db(db_path)?;
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT code, title, program, year, semester, credits, instructor
             FROM course
             ORDER BY id ASC",
        )
        .context("failed to prepare courses query")?;

    let courses = stmt
        .query_map([], |row| {
            Ok(Course {
                code: row.get(0)?,
                title: row.get(1)?,
                program: row.get(2)?,
                year: row.get(3)?,
                semester: row.get(4)?,
                credits: row.get(5)?,
                instructor: row.get(6)?,
            })
        })
        .context("failed to query courses")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to collect courses")?;

    Ok(courses)
}

pub fn insert_exams(db_path: &Path, exams: &[ExamEntry]) -> Result<usize> {
    in_transaction(db_path, |tx| write_exams(tx, exams))
}

fn write_exams(conn: &Connection, exams: &[ExamEntry]) -> Result<usize> {
    let mut insert_exam = conn
        .prepare(
            "INSERT INTO exam(course_code, course_title, exam_type, exam_date, start_time, room)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .context("failed to prepare exam insert")?;
    for exam in exams {
        insert_exam
            .execute(params![
                exam.course_code,
                exam.course_title,
                exam.exam_type.label(),
                exam.date.format(DATE_FORMAT).to_string(),
                exam.start.format(TIME_FORMAT).to_string(),
                exam.room,
            ])
            .with_context(|| format!("failed to insert exam for {}", exam.course_code))?;
    }
    Ok(exams.len())
}

pub fn list_exams(db_path: &Path) -> Result<Vec<ExamEntry>> {
    init_db(db_path)?;
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT course_code, course_title, exam_type, exam_date, start_time, room
             FROM exam
             ORDER BY id ASC",
        )
        .context("failed to prepare exams query")?;

    let raw_rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })
        .context("failed to query exams")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to collect exams")?;

    raw_rows
        .into_iter()
        .map(|(course_code, course_title, exam_type, date, start, room)| -> Result<ExamEntry> {
            Ok(ExamEntry {
                exam_type: exam_type
                    .parse::<ExamType>()
                    .map_err(anyhow::Error::msg)
                    .with_context(|| format!("bad stored exam type for {course_code}"))?,
                date: NaiveDate::parse_from_str(&date, DATE_FORMAT)
                    .with_context(|| format!("bad stored exam date: {date}"))?,
                start: NaiveTime::parse_from_str(&start, TIME_FORMAT)
                    .with_context(|| format!("bad stored exam start time: {start}"))?,
                course_code,
                course_title,
                room,
            })
        })
        .collect()
}

/// Notice ids are assigned by the store; the `id` of each input is ignored.
pub fn insert_notices(db_path: &Path, notices: &[Notice]) -> Result<usize> {
    in_transaction(db_path, |tx| write_notices(tx, notices))
}

fn write_notices(conn: &Connection, notices: &[Notice]) -> Result<usize> {
    let mut insert_notice = conn
        .prepare(
            "INSERT INTO notice(title, body, category, published, pinned)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .context("failed to prepare notice insert")?;
    for notice in notices {
        insert_notice
            .execute(params![
                notice.title,
                notice.body,
                notice.category.label(),
                notice.published.format(DATE_FORMAT).to_string(),
                notice.pinned,
            ])
            .with_context(|| format!("failed to insert notice: {}", notice.title))?;
    }
    Ok(notices.len())
}

pub fn list_notices(db_path: &Path) -> Result<Vec<Notice>> {
    init_db(db_path)?;
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT id, title, body, category, published, pinned
             FROM notice
             ORDER BY id ASC",
        )
        .context("failed to prepare notices query")?;

    let raw_rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, bool>(5)?,
            ))
        })
        .context("failed to query notices")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to collect notices")?;

    raw_rows
        .into_iter()
        .map(|(id, title, body, category, published, pinned)| -> Result<Notice> {
            Ok(Notice {
                id,
                category: category
                    .parse::<NoticeCategory>()
                    .map_err(anyhow::Error::msg)
                    .with_context(|| format!("bad stored category for notice #{id}"))?,
                published: NaiveDate::parse_from_str(&published, DATE_FORMAT)
                    .with_context(|| format!("bad stored publish date for notice #{id}"))?,
                title,
                body,
                pinned,
            })
        })
        .collect()
}

pub fn clear_records(db_path: &Path, kind: RecordKind) -> Result<()> {
    init_db(db_path)?;
    let conn = open_connection(db_path)?;
    conn.execute(&format!("DELETE FROM {}", kind.table_name()), [])
        .with_context(|| format!("failed to clear {kind}"))?;
    Ok(())
}

pub fn count_records(db_path: &Path, kind: RecordKind) -> Result<i64> {
    init_db(db_path)?;
    let conn = open_connection(db_path)?;
    conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", kind.table_name()),
        [],
        |row| row.get(0),
    )
    .with_context(|| format!("failed to count {kind}"))
}
