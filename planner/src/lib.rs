//! Vow Planner - seating and website-draft models of the wedding planner
//!
//! - [`seating`]: guest-to-seat assignment with conflict detection
//! - [`draft`]: pending/saved website edits with confirmed commits
//!
//! Both models are plain owned values. Construct one per screen and pass it
//! by reference; nothing here is global.

pub mod config;
pub mod draft;
pub mod seating;

pub use config::PlannerConfig;
pub use draft::{
    DraftError, DraftHalf, DraftResult, DraftState, DraftStore, SaveOutcome, WebsiteSaver,
};
pub use seating::{Assignment, AssignmentCheck, SeatingError, SeatingPlanner, SeatingResult};
