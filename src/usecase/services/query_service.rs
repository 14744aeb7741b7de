use std::sync::Arc;

use log::debug;

use crate::domain::entities::course::Course;
use crate::domain::entities::exam::ExamEntry;
use crate::domain::entities::notice::Notice;
use crate::domain::entities::view::{PageResult, ViewParams};
use crate::usecase::ports::repo::{RecordRepository, RepoError};
use crate::usecase::services::course_browser::CourseControls;
use crate::usecase::services::exam_schedule::ExamControls;
use crate::usecase::services::notice_board::NoticeControls;
use crate::usecase::services::view_engine::compute_view;

/// Loads whole collections from the repository and pages them locally.
pub struct QueryService {
    repo: Arc<dyn RecordRepository>,
}

impl QueryService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    pub fn course_page(
        &self,
        controls: &CourseControls,
        page_size: usize,
    ) -> Result<PageResult<Course>, RepoError> {
        let courses = self.repo.list_courses()?;
        Ok(page_of("courses", &courses, &controls.params(page_size)))
    }

    pub fn exam_page(
        &self,
        controls: &ExamControls,
        page_size: usize,
    ) -> Result<PageResult<ExamEntry>, RepoError> {
        let exams = self.repo.list_exams()?;
        Ok(page_of("exams", &exams, &controls.params(page_size)))
    }

    pub fn notice_page(
        &self,
        controls: &NoticeControls,
        page_size: usize,
    ) -> Result<PageResult<Notice>, RepoError> {
        let notices = self.repo.list_notices()?;
        Ok(page_of("notices", &notices, &controls.params(page_size)))
    }
}

fn page_of<T: Clone>(label: &str, records: &[T], params: &ViewParams<T>) -> PageResult<T> {
    let view = compute_view(records, params);
    debug!(
        "{label}: {} loaded, {} matching, page {} of {} ({params:?})",
        records.len(),
        view.total_matching,
        view.effective_page,
        view.total_pages
    );
    PageResult::from(view)
}
