#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub program: String,
    pub year: u8,
    pub semester: u8,
    pub credits: u8,
    pub instructor: String,
}
