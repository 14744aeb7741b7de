use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open db: {}", db_path.display()))?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign key enforcement")?;
    Ok(conn)
}

pub fn init_db(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let conn = open_connection(db_path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS course (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            code        TEXT NOT NULL,
            title       TEXT NOT NULL,
            program     TEXT NOT NULL,
            year        INTEGER NOT NULL,
            semester    INTEGER NOT NULL,
            credits     INTEGER NOT NULL,
            instructor  TEXT NOT NULL,
            imported_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS exam (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            course_code  TEXT NOT NULL,
            course_title TEXT NOT NULL,
            exam_type    TEXT NOT NULL,
            exam_date    TEXT NOT NULL,
            start_time   TEXT NOT NULL,
            room         TEXT NOT NULL,
            imported_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS notice (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            body        TEXT NOT NULL,
            category    TEXT NOT NULL,
            published   TEXT NOT NULL,
            pinned      INTEGER NOT NULL DEFAULT 0,
            imported_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_course_program
            ON course(program);

        CREATE INDEX IF NOT EXISTS idx_exam_date
            ON exam(exam_date);
        ",
    )
    .context("failed to initialize schema")?;

    Ok(())
}
