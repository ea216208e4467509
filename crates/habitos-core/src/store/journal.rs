//! Append-only logs: shadow entries, artifacts, journal, decisions, mission.

use crate::shared::{
    Artifact, ArtifactDraft, DailyMission, Decision, JournalEntry, ShadowEntry, ShadowReport,
};

use super::{ProgressStore, ARTIFACT_XP_REWARD, SHADOW_RESOLVED_XP_REWARD};

impl ProgressStore {
    /// Logs a shadow pattern instance (newest first). An entry logged
    /// already resolved grants the resolution reward.
    pub fn add_shadow_entry(&mut self, report: ShadowReport) -> String {
        let resolved = report.resolved;
        let entry = ShadowEntry {
            id: crate::shared::new_record_id(),
            pattern_name: report.pattern_name,
            trigger: report.trigger,
            intensity: report.intensity.clamp(1, 10),
            intervention: report.intervention,
            resolved,
            date: self.clock().today(),
            created_at: self.clock().now(),
        };
        let id = entry.id.clone();
        tracing::debug!(
            target: "habitos::shadow",
            pattern = %entry.pattern_name,
            intensity = entry.intensity,
            resolved,
            "shadow entry logged"
        );
        self.shadow_entries.insert(0, entry);
        if resolved {
            self.award_xp(SHADOW_RESOLVED_XP_REWARD);
        }
        id
    }

    /// Records a shipped artifact (newest first) and grants the flat
    /// artifact reward.
    pub fn add_artifact(&mut self, draft: ArtifactDraft) -> String {
        let artifact = Artifact {
            id: crate::shared::new_record_id(),
            name: draft.name,
            description: draft.description,
            domain: draft.domain,
            xp_earned: ARTIFACT_XP_REWARD,
            date: self.clock().today(),
            created_at: self.clock().now(),
        };
        let id = artifact.id.clone();
        tracing::info!(target: "habitos::artifacts", name = %artifact.name, "artifact shipped");
        self.artifacts.insert(0, artifact);
        self.award_xp(ARTIFACT_XP_REWARD);
        id
    }

    /// Appends a dated journal entry (newest first).
    pub fn add_journal_entry(&mut self, content: impl Into<String>) -> String {
        let entry = JournalEntry {
            id: crate::shared::new_record_id(),
            content: content.into(),
            date: self.clock().today(),
            created_at: self.clock().now(),
        };
        let id = entry.id.clone();
        self.journal_entries.insert(0, entry);
        id
    }

    /// Records a decision with its reasoning (newest first).
    pub fn add_decision(
        &mut self,
        title: impl Into<String>,
        reasoning: impl Into<String>,
    ) -> String {
        let decision = Decision {
            id: crate::shared::new_record_id(),
            title: title.into(),
            reasoning: reasoning.into(),
            date: self.clock().today(),
            created_at: self.clock().now(),
        };
        let id = decision.id.clone();
        self.decisions.insert(0, decision);
        id
    }

    /// Sets today's mission statement, replacing any earlier one.
    pub fn set_today_mission(&mut self, statement: impl Into<String>) {
        self.today_mission = Some(DailyMission {
            id: crate::shared::new_record_id(),
            date: self.clock().today(),
            statement: statement.into(),
            is_ai_generated: false,
            created_at: self.clock().now(),
        });
    }
}
