//! Execution block lifecycle: `Idle -> Active -> Idle`, one block at a time.

use crate::error::ProgressError;
use crate::shared::{ActiveBlock, BlockCategory, ExecutionBlock};

use super::{ProgressStore, BLOCK_XP_REWARD};

impl ProgressStore {
    /// Starts a focus block in `category`, recording the start instant.
    /// Fails with [`ProgressError::BlockAlreadyActive`] while a block runs.
    pub fn start_block(&mut self, category: BlockCategory) -> Result<&ActiveBlock, ProgressError> {
        if self.active_block.is_some() {
            return Err(ProgressError::BlockAlreadyActive);
        }
        let block = ActiveBlock {
            id: crate::shared::new_record_id(),
            category,
            started_at: self.clock().now(),
        };
        tracing::info!(
            target: "habitos::execution",
            category = category.as_str(),
            "block started"
        );
        Ok(self.active_block.insert(block))
    }

    /// Stops the running block: the elapsed time is rounded to whole
    /// minutes, `note` is attached, the flat completion reward is granted,
    /// and the finished block joins the history (newest first). Fails with
    /// [`ProgressError::NoActiveBlock`] when nothing runs.
    pub fn stop_block(&mut self, note: impl Into<String>) -> Result<ExecutionBlock, ProgressError> {
        let active = self
            .active_block
            .take()
            .ok_or(ProgressError::NoActiveBlock)?;
        let ended_at = self.clock().now();
        let elapsed_secs = (ended_at - active.started_at).num_seconds().max(0);
        let duration_minutes = (elapsed_secs as f64 / 60.0).round() as i64;
        let finished = ExecutionBlock {
            id: active.id,
            category: active.category,
            started_at: active.started_at,
            ended_at,
            duration_minutes,
            note: note.into(),
            xp_earned: BLOCK_XP_REWARD,
            created_at: ended_at,
        };
        tracing::info!(
            target: "habitos::execution",
            category = finished.category.as_str(),
            minutes = duration_minutes,
            "block finished"
        );
        self.blocks.insert(0, finished.clone());
        self.award_xp(BLOCK_XP_REWARD);
        Ok(finished)
    }
}
