mod practice_vm;

pub use practice_vm::{CaptureState, Feedback, PracticeOutcome, PracticeVm};
