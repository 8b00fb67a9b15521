//! Delivery lifecycle: state, transitions, and the phase guard.

pub mod entities;
pub mod guard;

pub use entities::{DeliveryState, PhaseRecord, PhaseStatus, TransitionError};
pub use guard::phase_alignment_warning;
