use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use directories::ProjectDirs;

use crate::usecase::services::course_browser::COURSE_PAGE_SIZE;
use crate::usecase::services::exam_schedule::EXAM_PAGE_SIZE;
use crate::usecase::services::notice_board::NOTICE_PAGE_SIZE;

pub const DB_PATH_ENV: &str = "DEPT_PORTAL_DB";
pub const COURSE_PAGE_SIZE_ENV: &str = "DEPT_PORTAL_COURSE_PAGE_SIZE";
pub const EXAM_PAGE_SIZE_ENV: &str = "DEPT_PORTAL_EXAM_PAGE_SIZE";
pub const NOTICE_PAGE_SIZE_ENV: &str = "DEPT_PORTAL_NOTICE_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub course_page_size: usize,
    pub exam_page_size: usize,
    pub notice_page_size: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match lookup(DB_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_db_path()?,
        };

        Ok(Self {
            db_path,
            course_page_size: page_size(&lookup, COURSE_PAGE_SIZE_ENV, COURSE_PAGE_SIZE)?,
            exam_page_size: page_size(&lookup, EXAM_PAGE_SIZE_ENV, EXAM_PAGE_SIZE)?,
            notice_page_size: page_size(&lookup, NOTICE_PAGE_SIZE_ENV, NOTICE_PAGE_SIZE)?,
        })
    }
}

pub fn default_db_path() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("edu", "dept", "portal")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().join("portal.sqlite"))
}

fn page_size<F>(lookup: &F, key: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("{key} must be a positive integer, got {raw:?}"))?;
    if value == 0 {
        bail!("{key} must be greater than zero")
    }
    Ok(value)
}
