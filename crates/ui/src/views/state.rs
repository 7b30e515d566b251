/// Why a view cannot render its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    LessonNotFound,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::LessonNotFound => "No such lesson. Pick another one from the list.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
