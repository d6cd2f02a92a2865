use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::envelope::{AssessmentEnvelope, FieldChange};
use super::persistence::PersistenceSlot;
use super::{AssessmentEngine, AssessmentOutcome};

/// Result of a field-level edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOutcome {
    Applied,
    /// The envelope is locked; nothing changed.
    Ignored,
}

/// Owner of the session's envelope and its persistence slot.
///
/// Every derived output is recomputed on [`evaluate`](Self::evaluate); the envelope is the
/// only state held between calls.
pub struct AssessmentController<S> {
    envelope: AssessmentEnvelope,
    engine: AssessmentEngine,
    slot: Arc<S>,
    unsaved: bool,
}

impl<S> AssessmentController<S>
where
    S: PersistenceSlot + 'static,
{
    /// Open the controller, restoring the last saved envelope when one is readable.
    ///
    /// An empty slot, a slot failure, or an unparseable blob all start from the empty
    /// envelope without surfacing an error.
    pub fn open(slot: Arc<S>, engine: AssessmentEngine) -> Self {
        let envelope = restore(slot.as_ref());
        Self {
            envelope,
            engine,
            slot,
            unsaved: false,
        }
    }

    pub fn envelope(&self) -> &AssessmentEnvelope {
        &self.envelope
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    pub fn is_locked(&self) -> bool {
        self.envelope.is_locked
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn lock(&mut self) {
        self.envelope.is_locked = true;
        info!(client = %self.envelope.client.client_name, "assessment locked");
    }

    pub fn unlock(&mut self) {
        self.envelope.is_locked = false;
        info!(client = %self.envelope.client.client_name, "assessment unlocked");
    }

    /// Flip the lock, returning the new state.
    pub fn toggle_lock(&mut self) -> bool {
        if self.is_locked() {
            self.unlock();
        } else {
            self.lock();
        }
        self.is_locked()
    }

    /// Apply one edit. While locked this is a silent no-op.
    pub fn apply(&mut self, change: FieldChange) -> MutationOutcome {
        if self.envelope.is_locked {
            debug!(?change, "assessment locked; ignoring change");
            return MutationOutcome::Ignored;
        }

        self.envelope.apply(change);
        self.unsaved = true;
        MutationOutcome::Applied
    }

    /// Apply a batch of edits in order.
    pub fn apply_all<I>(&mut self, changes: I) -> Vec<MutationOutcome>
    where
        I: IntoIterator<Item = FieldChange>,
    {
        changes
            .into_iter()
            .map(|change| self.apply(change))
            .collect()
    }

    pub fn evaluate(&self) -> AssessmentOutcome {
        let outcome = self.engine.evaluate(&self.envelope);
        debug!(
            score = outcome.score,
            retainer = outcome.displayed_retainer,
            override_active = outcome.override_active,
            "assessment evaluated"
        );
        outcome
    }

    /// Persist the envelope. Failures are logged, never returned.
    pub fn save(&mut self) {
        match self.envelope.to_blob() {
            Ok(blob) => match self.slot.write(&blob) {
                Ok(()) => info!(bytes = blob.len(), "assessment saved"),
                Err(err) => warn!(error = %err, "failed to write assessment slot"),
            },
            Err(err) => warn!(error = %err, "failed to serialize assessment"),
        }
        self.unsaved = false;
    }

    /// Replace the envelope with an empty one and clear the slot, but only when the caller
    /// has confirmed and the envelope is unlocked. Returns whether the reset ran.
    pub fn reset(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            debug!("assessment reset declined");
            return false;
        }
        if self.envelope.is_locked {
            debug!("assessment locked; ignoring reset");
            return false;
        }

        self.envelope = AssessmentEnvelope::default();
        self.unsaved = false;
        if let Err(err) = self.slot.clear() {
            warn!(error = %err, "failed to clear assessment slot");
        }
        info!("assessment reset");
        true
    }
}

fn restore<S: PersistenceSlot + ?Sized>(slot: &S) -> AssessmentEnvelope {
    let blob = match slot.read() {
        Ok(Some(blob)) => blob,
        Ok(None) => return AssessmentEnvelope::default(),
        Err(err) => {
            warn!(error = %err, "assessment slot unreadable; starting empty");
            return AssessmentEnvelope::default();
        }
    };

    match AssessmentEnvelope::from_blob(&blob) {
        Ok(envelope) => {
            info!(locked = envelope.is_locked, "restored saved assessment");
            envelope
        }
        Err(err) => {
            warn!(error = %err, "saved assessment is malformed; starting empty");
            AssessmentEnvelope::default()
        }
    }
}
