use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::workflows::assessment::controller::AssessmentController;
use crate::workflows::assessment::domain::{
    AssessmentInputs, AssetCountBand, AvailabilityLevel, FailureImpact, PrimaryAssetType,
    ReportingLevel,
};
use crate::workflows::assessment::envelope::{
    AssessmentEnvelope, AssessmentStatus, ClientProfile, EngagementType, OverrideRecord,
};
use crate::workflows::assessment::persistence::{MemorySlot, PersistenceSlot, SlotError};
use crate::workflows::assessment::AssessmentEngine;

pub(super) fn portfolio_inputs() -> AssessmentInputs {
    AssessmentInputs {
        asset_count_band: Some(AssetCountBand::FourToFive),
        primary_asset_type: Some(PrimaryAssetType::MixedResidential),
        availability: Some(AvailabilityLevel::AfterHours),
        reporting: Some(ReportingLevel::Summary),
        vendor_entity_count: Some(8),
        failure_impact: Some(FailureImpact::FinancialLoss),
    }
}

pub(super) fn portfolio_envelope() -> AssessmentEnvelope {
    AssessmentEnvelope {
        client: ClientProfile {
            client_name: "Ashcombe Family Office".to_string(),
            engagement_type: Some(EngagementType::EstatePortfolio),
            concierge_lead: "M. Okafor".to_string(),
            date_initiated: NaiveDate::from_ymd_opt(2025, 4, 2),
            status: AssessmentStatus::Reviewed,
        },
        inputs: portfolio_inputs(),
        notes: "Boathouse access via north gate only.".to_string(),
        override_record: OverrideRecord {
            enabled: true,
            proposed_price: "36000".to_string(),
            reason: "Multi-year commitment".to_string(),
            founder_approval: false,
        },
        is_locked: false,
    }
}

pub(super) fn open_controller(slot: Arc<MemorySlot>) -> AssessmentController<MemorySlot> {
    AssessmentController::open(slot, AssessmentEngine::default())
}

/// Slot whose every operation fails, counting the attempts.
#[derive(Default)]
pub(super) struct BrokenSlot {
    pub(super) attempts: AtomicUsize,
}

impl BrokenSlot {
    pub(super) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::Relaxed)
    }

    fn fail(&self) -> SlotError {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        SlotError::Unavailable("disk offline".to_string())
    }
}

impl PersistenceSlot for BrokenSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        Err(self.fail())
    }

    fn write(&self, _blob: &str) -> Result<(), SlotError> {
        Err(self.fail())
    }

    fn clear(&self) -> Result<(), SlotError> {
        Err(self.fail())
    }
}

/// Slot that records every blob written to it.
#[derive(Default)]
pub(super) struct RecordingSlot {
    pub(super) writes: Mutex<Vec<String>>,
}

impl PersistenceSlot for RecordingSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        Ok(self.writes.lock().expect("slot mutex poisoned").last().cloned())
    }

    fn write(&self, blob: &str) -> Result<(), SlotError> {
        self.writes
            .lock()
            .expect("slot mutex poisoned")
            .push(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SlotError> {
        self.writes.lock().expect("slot mutex poisoned").clear();
        Ok(())
    }
}
