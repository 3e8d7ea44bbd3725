mod controller;
mod progress;
mod session;
mod workflow;

// Public API of the practice subsystem.
pub use crate::error::PracticeError;
pub use controller::{LoadOutcome, LoadTicket, PracticeController, PracticeNotice, PracticePhase};
pub use progress::PracticeProgress;
pub use session::{Advance, Feedback, PracticeSession};
pub use workflow::PracticeLoopService;
