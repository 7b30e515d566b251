mod progress;
mod session;
mod workflow;

// Public API of the practice subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use session::{PracticeSession, SessionAdvance};
pub use workflow::{ADVANCE_AFTER_CORRECT, AttemptResult, PracticeService, RETURN_AFTER_COMPLETE};
