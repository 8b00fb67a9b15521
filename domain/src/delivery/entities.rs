//! Delivery domain entities.
//!
//! A [`DeliveryState`] is the persisted record of one tracked unit of work.
//! The pure phase transitions live here; reading and writing the state
//! document is the coordinator's job in the application layer.

use crate::workflow::{Mode, Phase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transition attempted against a state that cannot accept it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("no delivery is active")]
    NotActive,

    #[error("a skip requires a non-empty reason")]
    EmptyReason,
}

/// Status of one phase-history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    /// The phase the delivery currently sits in
    Active,
    /// Passed by an advance
    Completed,
    /// Passed by a skip, with a recorded reason
    Skipped,
}

impl PhaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseStatus::Active => "active",
            PhaseStatus::Completed => "completed",
            PhaseStatus::Skipped => "skipped",
        }
    }
}

/// One audit entry in the phase history.
///
/// The timestamp records when the entry reached its current status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseRecord {
    pub phase: Phase,
    pub status: PhaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl PhaseRecord {
    fn active(phase: Phase, at: DateTime<Utc>) -> Self {
        Self {
            phase,
            status: PhaseStatus::Active,
            reason: None,
            timestamp: at,
        }
    }
}

/// Persisted state of one delivery (Entity).
///
/// The phase order is resolved from the mode exactly once, at start time,
/// and never changes afterwards. The delivery is terminal once the final
/// phase of that order has been passed; `current_phase` then stays at the
/// final phase for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryState {
    /// Human identifier chosen at start
    pub slug: String,
    /// Operating mode; fixes the phase order for the whole lifetime
    pub mode: Mode,
    /// Optional reference to a plan document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_path: Option<String>,
    /// The phase the cursor sits in (or ended in, once terminal)
    pub current_phase: Phase,
    /// Ordered audit trail, one entry per visited phase
    pub phase_history: Vec<PhaseRecord>,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeliveryState {
    /// Open a new delivery at the first phase of the mode's order.
    pub fn new(slug: impl Into<String>, mode: Mode, plan_path: Option<String>) -> Self {
        let now = Utc::now();
        let first = mode.phase_order()[0];
        Self {
            slug: slug.into(),
            mode,
            plan_path,
            current_phase: first,
            phase_history: vec![PhaseRecord::active(first, now)],
            started_at: now,
            updated_at: now,
        }
    }

    /// The fixed phase order of this delivery.
    pub fn phase_order(&self) -> &'static [Phase] {
        self.mode.phase_order()
    }

    /// Whether the delivery has passed its final phase.
    pub fn is_complete(&self) -> bool {
        // Phase orders are static and non-empty.
        let Some(&last) = self.phase_order().last() else {
            return false;
        };
        self.phase_history.iter().any(|r| {
            r.phase == last
                && matches!(r.status, PhaseStatus::Completed | PhaseStatus::Skipped)
        })
    }

    /// Complete the current phase and move to the next, if any.
    pub fn advance(&mut self) -> Result<(), TransitionError> {
        self.pass_current(PhaseStatus::Completed, None)
    }

    /// Skip the current phase with a reason, then move exactly as
    /// [`advance`](Self::advance) does.
    pub fn skip(&mut self, reason: &str) -> Result<(), TransitionError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(TransitionError::EmptyReason);
        }
        self.pass_current(PhaseStatus::Skipped, Some(reason.to_string()))
    }

    fn pass_current(
        &mut self,
        status: PhaseStatus,
        reason: Option<String>,
    ) -> Result<(), TransitionError> {
        if self.is_complete() {
            return Err(TransitionError::NotActive);
        }

        let now = Utc::now();
        let current = self.current_phase;
        let record = self
            .phase_history
            .last_mut()
            .filter(|r| r.phase == current && r.status == PhaseStatus::Active)
            .ok_or(TransitionError::NotActive)?;
        record.status = status;
        record.reason = reason;
        record.timestamp = now;

        let order = self.phase_order();
        let position = order
            .iter()
            .position(|p| *p == current)
            .ok_or(TransitionError::NotActive)?;
        if let Some(next) = order.get(position + 1) {
            self.current_phase = *next;
            self.phase_history.push(PhaseRecord::active(*next, now));
        }
        self.updated_at = now;
        Ok(())
    }
}
