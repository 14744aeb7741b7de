use std::path::PathBuf;

use crate::domain::entities::course::Course;
use crate::domain::entities::exam::ExamEntry;
use crate::domain::entities::notice::Notice;
use crate::domain::entities::record::{ParsedRecords, RecordKind};
use crate::infra::sqlite::queries::{
    clear_records, insert_batches, insert_courses, insert_exams, insert_notices, list_courses,
    list_exams, list_notices,
};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{RecordRepository, RepoError};

pub struct SqliteRepo {
    pub db_path: PathBuf,
}

impl SqliteRepo {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

impl RecordRepository for SqliteRepo {
    fn init(&self) -> Result<(), RepoError> {
        Ok(init_db(&self.db_path)?)
    }

    fn list_courses(&self) -> Result<Vec<Course>, RepoError> {
        Ok(list_courses(&self.db_path)?)
    }

    fn list_exams(&self) -> Result<Vec<ExamEntry>, RepoError> {
        Ok(list_exams(&self.db_path)?)
    }

    fn list_notices(&self) -> Result<Vec<Notice>, RepoError> {
        Ok(list_notices(&self.db_path)?)
    }

    fn insert_courses(&self, courses: &[Course]) -> Result<usize, RepoError> {
        Ok(insert_courses(&self.db_path, courses)?)
    }

    fn insert_exams(&self, exams: &[ExamEntry]) -> Result<usize, RepoError> {
        Ok(insert_exams(&self.db_path, exams)?)
    }

    fn insert_notices(&self, notices: &[Notice]) -> Result<usize, RepoError> {
        Ok(insert_notices(&self.db_path, notices)?)
    }

    fn insert_batches(&self, batches: &[ParsedRecords]) -> Result<Vec<usize>, RepoError> {
        Ok(insert_batches(&self.db_path, batches)?)
    }

    fn clear(&self, kind: RecordKind) -> Result<(), RepoError> {
        Ok(clear_records(&self.db_path, kind)?)
    }
}
