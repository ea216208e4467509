//! Phases: exclusive-choice campaign selection.

use crate::shared::{Phase, PhaseDraft};

use super::ProgressStore;

impl ProgressStore {
    /// Adds a phase (inactive) and returns its id.
    pub fn add_phase(&mut self, draft: PhaseDraft) -> String {
        let phase = Phase {
            id: crate::shared::new_record_id(),
            name: draft.name,
            description: draft.description,
            goal: draft.goal,
            is_active: false,
            start_date: draft.start_date,
            end_date: None,
            created_at: self.clock().now(),
        };
        let id = phase.id.clone();
        self.phases.push(phase);
        id
    }

    /// Flips the named phase's active state and deactivates every other
    /// phase in the same operation, so at most one phase is ever active.
    /// Toggling the active phase itself leaves none active.
    pub fn toggle_phase(&mut self, phase_id: &str) {
        for phase in &mut self.phases {
            phase.is_active = phase.id == phase_id && !phase.is_active;
        }
        if let Some(active) = self.phases.iter().find(|p| p.is_active) {
            tracing::info!(target: "habitos::phases", phase = %active.name, "phase activated");
        }
    }
}
