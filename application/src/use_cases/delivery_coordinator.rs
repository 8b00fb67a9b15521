//! Delivery Coordinator use case.
//!
//! Drives one delivery per session through its phase order. Every mutating
//! operation is a read-modify-write of the session's single state
//! document; the store replaces it atomically, so a crash between
//! invocations leaves either the prior or the new state, never a torn one.
//! Cross-process mutual exclusion is not provided: callers must progress
//! a delivery from one control flow at a time.

use crate::ports::session_store::{SessionStore, SessionStoreError};
use foreman_domain::{DeliveryState, Mode, SessionId, TransitionError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced by coordinator operations.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("delivery '{0}' is already in progress for this session")]
    AlreadyActive(String),

    #[error("no delivery is active for this session")]
    NoActiveDelivery,

    #[error("a skip requires a non-empty reason")]
    EmptySkipReason,

    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

impl From<TransitionError> for DeliveryError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::NotActive => DeliveryError::NoActiveDelivery,
            TransitionError::EmptyReason => DeliveryError::EmptySkipReason,
        }
    }
}

/// Sequences the phases of one delivery, persisting progress between
/// independent invocations.
pub struct DeliveryCoordinator {
    store: Arc<dyn SessionStore>,
    session: SessionId,
}

impl DeliveryCoordinator {
    pub fn new(store: Arc<dyn SessionStore>, session: SessionId) -> Self {
        Self { store, session }
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Read-only view of the session's delivery state.
    ///
    /// Absent, unreadable, and corrupt documents all answer `None`.
    pub fn status(&self) -> Option<DeliveryState> {
        self.store.load(&self.session)
    }

    /// Open a new delivery at the first phase of the mode's order.
    ///
    /// Fails while a non-terminal delivery exists; a completed one is
    /// replaced.
    pub fn start(
        &self,
        slug: impl Into<String>,
        mode: Mode,
        plan_path: Option<String>,
    ) -> Result<DeliveryState, DeliveryError> {
        if let Some(existing) = self.store.load(&self.session)
            && !existing.is_complete()
        {
            return Err(DeliveryError::AlreadyActive(existing.slug));
        }

        let state = DeliveryState::new(slug, mode, plan_path);
        self.store.save(&self.session, &state)?;
        info!(
            session = %self.session,
            slug = %state.slug,
            mode = %state.mode,
            phase = %state.current_phase,
            "delivery started"
        );
        Ok(state)
    }

    /// Complete the current phase and activate the next, or finish the
    /// delivery at the last phase.
    pub fn advance(&self) -> Result<DeliveryState, DeliveryError> {
        self.mutate(|state| state.advance())
    }

    /// Skip the current phase with a reason, then move like `advance`.
    pub fn skip(&self, reason: &str) -> Result<DeliveryState, DeliveryError> {
        self.mutate(|state| state.skip(reason))
    }

    fn mutate(
        &self,
        transition: impl FnOnce(&mut DeliveryState) -> Result<(), TransitionError>,
    ) -> Result<DeliveryState, DeliveryError> {
        let mut state = self
            .store
            .load(&self.session)
            .ok_or(DeliveryError::NoActiveDelivery)?;
        transition(&mut state)?;
        self.store.save(&self.session, &state)?;
        debug!(
            session = %self.session,
            phase = %state.current_phase,
            complete = state.is_complete(),
            "delivery state persisted"
        );
        Ok(state)
    }
}
