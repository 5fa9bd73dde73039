//! Selection controller
//!
//! Tracks which complaint the detail pane shows. Selection is a plain id:
//! selecting an id that has no record is allowed and leaves the pane in the
//! loading state until a matching record appears.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use shared::models::{Complaint, ComplaintId, Roadmap, StageTrack};

use super::store::ComplaintRepository;

pub const PROMPT_MESSAGE: &str = "Select a complaint from the list to view its status.";
pub const LOADING_MESSAGE: &str = "Loading status...";

/// What the detail pane shows for the current selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailPane {
    /// Nothing selected
    Prompt { message: String },
    /// Selected id has no matching record
    Loading {
        complaint_id: ComplaintId,
        message: String,
    },
    Roadmap {
        complaint: Complaint,
        roadmap: Roadmap,
    },
}

impl DetailPane {
    pub fn prompt() -> Self {
        Self::Prompt {
            message: PROMPT_MESSAGE.to_string(),
        }
    }

    pub fn loading(complaint_id: ComplaintId) -> Self {
        Self::Loading {
            complaint_id,
            message: LOADING_MESSAGE.to_string(),
        }
    }

    /// Project the pane for `selected` against the store
    pub fn project(
        selected: Option<ComplaintId>,
        repo: &dyn ComplaintRepository,
        track: StageTrack,
    ) -> Self {
        let Some(id) = selected else {
            return Self::prompt();
        };
        match repo.find(id) {
            Some(complaint) => {
                let roadmap = Roadmap::project(&complaint.status, track);
                Self::Roadmap { complaint, roadmap }
            }
            None => Self::loading(id),
        }
    }
}

/// Single selected complaint id
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Arc<RwLock<Option<ComplaintId>>>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`. Existence is not checked.
    pub fn select(&self, id: ComplaintId) {
        *self.selected.write() = Some(id);
    }

    pub fn clear(&self) {
        *self.selected.write() = None;
    }

    pub fn current(&self) -> Option<ComplaintId> {
        *self.selected.read()
    }

    /// Detail pane for the current selection
    pub fn detail(&self, repo: &dyn ComplaintRepository, track: StageTrack) -> DetailPane {
        DetailPane::project(self.current(), repo, track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complaints::InMemoryComplaintStore;
    use shared::models::{ComplaintStatus, NewComplaint, StageState};

    #[test]
    fn test_nothing_selected_shows_prompt() {
        let store = InMemoryComplaintStore::seeded();
        let selection = SelectionController::new();
        assert_eq!(selection.current(), None);
        assert_eq!(
            selection.detail(&store, StageTrack::Full),
            DetailPane::prompt()
        );
    }

    #[test]
    fn test_selected_record_shows_roadmap() {
        let store = InMemoryComplaintStore::seeded();
        let selection = SelectionController::new();
        selection.select(2);

        match selection.detail(&store, StageTrack::Full) {
            DetailPane::Roadmap { complaint, roadmap } => {
                assert_eq!(complaint.id, 2);
                assert_eq!(roadmap.status, ComplaintStatus::Assigned);
                assert_eq!(roadmap.stages[0].state, StageState::Completed);
                assert_eq!(roadmap.stages[1].state, StageState::Active);
            }
            other => panic!("expected roadmap, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_record_stays_loading() {
        let store = InMemoryComplaintStore::seeded();
        let selection = SelectionController::new();
        selection.select(999);

        assert_eq!(selection.current(), Some(999));
        assert_eq!(
            selection.detail(&store, StageTrack::Full),
            DetailPane::loading(999)
        );
    }

    #[test]
    fn test_loading_resolves_once_record_exists() {
        let store = InMemoryComplaintStore::seeded();
        let selection = SelectionController::new();
        selection.select(5);
        assert!(matches!(
            selection.detail(&store, StageTrack::Standard),
            DetailPane::Loading { complaint_id: 5, .. }
        ));

        store.add(NewComplaint {
            title: "Water leak".into(),
            description: None,
        });
        assert!(matches!(
            selection.detail(&store, StageTrack::Standard),
            DetailPane::Roadmap { .. }
        ));
    }

    #[test]
    fn test_clear_returns_to_prompt() {
        let store = InMemoryComplaintStore::seeded();
        let selection = SelectionController::new();
        selection.select(1);
        selection.clear();
        assert_eq!(
            selection.detail(&store, StageTrack::Full),
            DetailPane::prompt()
        );
    }

    #[test]
    fn test_pane_serializes_with_state_tag() {
        let json = serde_json::to_value(DetailPane::loading(7)).unwrap();
        assert_eq!(json["state"], "loading");
        assert_eq!(json["complaint_id"], 7);
        assert_eq!(json["message"], LOADING_MESSAGE);
    }
}
