use thiserror::Error;

use crate::model::ExerciseError;
use crate::model::LessonError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
}
