//! Roadmap projection
//!
//! Pure function of (status, stage track) to the per-stage progress state
//! shown on the complaint detail pane. Nothing here is remembered between
//! calls; a roadmap is recomputed from the current status every time.

use serde::{Deserialize, Serialize};

use super::status::{ComplaintStatus, StageTrack};

/// Display state of a single stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    Completed,
    Active,
    Upcoming,
}

/// One stage of a projected roadmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStage {
    /// 1-based position shown in the stage marker
    pub position: usize,
    pub stage: ComplaintStatus,
    pub state: StageState,
}

/// Projected roadmap for one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub track: StageTrack,
    pub status: ComplaintStatus,
    /// Index of the active stage, `None` when the status is not on the track
    pub current_index: Option<usize>,
    pub stages: Vec<RoadmapStage>,
    pub progress_percent: u8,
    pub next_stage: Option<ComplaintStatus>,
}

impl Roadmap {
    /// Project `status` onto `track`
    ///
    /// A status that is not a stage of the track marks every stage upcoming
    /// and reports 0% progress.
    pub fn project(status: &ComplaintStatus, track: StageTrack) -> Self {
        let stages = track.stages();
        let current_index = track.index_of(status);

        let projected = stages
            .iter()
            .enumerate()
            .map(|(index, stage)| RoadmapStage {
                position: index + 1,
                stage: stage.clone(),
                state: match current_index {
                    Some(current) if index == current => StageState::Active,
                    Some(current) if index < current => StageState::Completed,
                    _ => StageState::Upcoming,
                },
            })
            .collect();

        let progress_percent = current_index
            .map(|current| ((current + 1) * 100 / stages.len()) as u8)
            .unwrap_or(0);

        Self {
            track,
            status: status.clone(),
            current_index,
            stages: projected,
            progress_percent,
            next_stage: current_index.and_then(|_| status.next()),
        }
    }

    pub fn active_count(&self) -> usize {
        self.count(StageState::Active)
    }

    pub fn completed_count(&self) -> usize {
        self.count(StageState::Completed)
    }

    fn count(&self, state: StageState) -> usize {
        self.stages.iter().filter(|s| s.state == state).count()
    }
}
