use crate::domain::entities::course::Course;
use crate::domain::entities::exam::ExamEntry;
use crate::domain::entities::notice::Notice;
use crate::domain::entities::record::{ParsedRecords, RecordKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Message(String),
}

impl std::fmt::Display for RepoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepoError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RepoError {}

impl From<anyhow::Error> for RepoError {
    fn from(err: anyhow::Error) -> Self {
        RepoError::Message(format!("{err:#}"))
    }
}

/// Source of fully materialized record collections. Listings come back in
/// insertion order.
pub trait RecordRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    fn list_courses(&self) -> Result<Vec<Course>, RepoError>;
    fn list_exams(&self) -> Result<Vec<ExamEntry>, RepoError>;
    fn list_notices(&self) -> Result<Vec<Notice>, RepoError>;

    fn insert_courses(&self, courses: &[Course]) -> Result<usize, RepoError>;
    fn insert_exams(&self, exams: &[ExamEntry]) -> Result<usize, RepoError>;
    fn insert_notices(&self, notices: &[Notice]) -> Result<usize, RepoError>;
    /// Stores all batches or none of them; returns one count per batch.
    fn insert_batches(&self, batches: &[ParsedRecords]) -> Result<Vec<usize>, RepoError>;

    fn clear(&self, kind: RecordKind) -> Result<(), RepoError>;
}
