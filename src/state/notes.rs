use crate::models::{Note, NoteId};

/// The request kinds that move the store through pending -> fulfilled/rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NotesOp {
    FetchAll,
    FetchOne,
    Create,
    Update,
    Delete,
    Generate,
}

impl NotesOp {
    /// Shown when a rejected request carries no message of its own.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::FetchAll => "Failed to fetch notes",
            Self::FetchOne => "Failed to fetch note",
            Self::Create => "Failed to create note",
            Self::Update => "Failed to update note",
            Self::Delete => "Failed to delete note",
            Self::Generate => "Failed to generate note",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum NotesAction {
    Pending(NotesOp),
    Rejected(NotesOp, String),

    NotesLoaded(Vec<Note>),
    NoteLoaded(Note),
    NoteCreated(Note),
    NoteUpdated(Note),
    NoteDeleted(NoteId),
    DraftGenerated,

    SetSelected(Option<Note>),
    ClearError,
}

/// Snapshot read by every view.
///
/// `loading` and `error` are shared by all request kinds: whichever request
/// settles last decides what they show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NotesState {
    pub notes: Vec<Note>,
    pub selected_note: Option<Note>,
    pub loading: bool,
    pub error: Option<String>,
}

impl NotesState {
    pub fn apply(&mut self, action: NotesAction) {
        match action {
            NotesAction::Pending(_) => {
                self.loading = true;
                self.error = None;
            }
            NotesAction::Rejected(op, message) => {
                self.loading = false;
                self.error = Some(if message.trim().is_empty() {
                    op.fallback_message().to_string()
                } else {
                    message
                });
            }
            NotesAction::NotesLoaded(notes) => {
                self.loading = false;
                self.notes = notes;
            }
            NotesAction::NoteLoaded(note) => {
                self.loading = false;
                self.selected_note = Some(note);
            }
            NotesAction::NoteCreated(note) => {
                self.loading = false;
                self.notes.push(note);
            }
            NotesAction::NoteUpdated(note) => {
                self.loading = false;
                if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
                    *slot = note.clone();
                }
                if self.selected_id() == Some(note.id) {
                    self.selected_note = Some(note);
                }
            }
            NotesAction::NoteDeleted(id) => {
                self.loading = false;
                self.notes.retain(|n| n.id != id);
                if self.selected_id() == Some(id) {
                    self.selected_note = None;
                }
            }
            NotesAction::DraftGenerated => {
                // The draft lives in the generate form until saved.
                self.loading = false;
            }
            NotesAction::SetSelected(note) => {
                self.selected_note = note;
            }
            NotesAction::ClearError => {
                self.error = None;
            }
        }
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected_note.as_ref().map(|n| n.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn note(id: NoteId, title: &str, content: &str) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    fn loaded(notes: Vec<Note>) -> NotesState {
        let mut state = NotesState::default();
        state.apply(NotesAction::NotesLoaded(notes));
        state
    }

    #[test]
    fn test_pending_sets_loading_and_clears_error() {
        let mut state = NotesState {
            error: Some("old".to_string()),
            ..Default::default()
        };
        state.apply(NotesAction::Pending(NotesOp::FetchAll));
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_rejected_keeps_notes_and_records_message() {
        let mut state = loaded(vec![note(1, "A", "x")]);
        state.apply(NotesAction::Pending(NotesOp::FetchAll));
        state.apply(NotesAction::Rejected(
            NotesOp::FetchAll,
            "Request failed with status code 500".to_string(),
        ));

        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Request failed with status code 500")
        );
        assert_eq!(state.notes, vec![note(1, "A", "x")]);
    }

    #[test]
    fn test_rejected_without_message_uses_fallback() {
        let mut state = NotesState::default();
        state.apply(NotesAction::Rejected(NotesOp::Delete, "  ".to_string()));
        assert_eq!(state.error.as_deref(), Some("Failed to delete note"));
    }

    #[test]
    fn test_created_note_is_appended() {
        let mut state = loaded(vec![note(1, "A", "x")]);
        state.apply(NotesAction::Pending(NotesOp::Create));
        state.apply(NotesAction::NoteCreated(note(5, "T", "C")));

        assert_eq!(state.notes, vec![note(1, "A", "x"), note(5, "T", "C")]);
        assert!(!state.loading);
    }

    #[test]
    fn test_update_replaces_by_id_only() {
        let mut state = loaded(vec![note(1, "A", "x"), note(2, "B", "y"), note(3, "C", "z")]);
        state.apply(NotesAction::NoteUpdated(note(2, "B2", "y2")));

        assert_eq!(
            state.notes,
            vec![note(1, "A", "x"), note(2, "B2", "y2"), note(3, "C", "z")]
        );
    }

    #[test]
    fn test_update_of_unknown_id_changes_nothing() {
        let mut state = loaded(vec![note(1, "A", "x")]);
        state.apply(NotesAction::NoteUpdated(note(9, "Z", "z")));
        assert_eq!(state.notes, vec![note(1, "A", "x")]);
    }

    #[test]
    fn test_update_refreshes_matching_selection() {
        let mut state = loaded(vec![note(1, "A", "x"), note(2, "B", "y")]);
        state.apply(NotesAction::SetSelected(Some(note(1, "A", "x"))));

        state.apply(NotesAction::NoteUpdated(note(2, "B2", "y2")));
        assert_eq!(state.selected_note, Some(note(1, "A", "x")));

        state.apply(NotesAction::NoteUpdated(note(1, "A2", "x2")));
        assert_eq!(state.selected_note, Some(note(1, "A2", "x2")));
    }

    #[test]
    fn test_delete_removes_note_and_clears_matching_selection() {
        let mut state = loaded(vec![note(1, "A", "x")]);
        state.apply(NotesAction::SetSelected(Some(note(1, "A", "x"))));
        state.apply(NotesAction::Pending(NotesOp::Delete));
        state.apply(NotesAction::NoteDeleted(1));

        assert_eq!(state.notes, vec![]);
        assert_eq!(state.selected_note, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_delete_keeps_other_selection() {
        let mut state = loaded(vec![note(1, "A", "x"), note(2, "B", "y")]);
        state.apply(NotesAction::SetSelected(Some(note(2, "B", "y"))));
        state.apply(NotesAction::NoteDeleted(1));

        assert_eq!(state.notes, vec![note(2, "B", "y")]);
        assert_eq!(state.selected_id(), Some(2));
    }

    #[test]
    fn test_fetch_one_sets_selection() {
        let mut state = NotesState::default();
        state.apply(NotesAction::Pending(NotesOp::FetchOne));
        state.apply(NotesAction::NoteLoaded(note(4, "D", "w")));
        assert_eq!(state.selected_id(), Some(4));
        assert!(!state.loading);
    }

    #[test]
    fn test_generated_draft_leaves_snapshot_alone() {
        let mut state = loaded(vec![note(1, "A", "x")]);
        let before = state.clone();
        state.apply(NotesAction::Pending(NotesOp::Generate));
        state.apply(NotesAction::DraftGenerated);
        assert_eq!(state, before);
    }

    #[test]
    fn test_selection_and_clear_error_do_not_touch_loading() {
        let mut state = NotesState::default();
        state.apply(NotesAction::Pending(NotesOp::FetchAll));
        state.apply(NotesAction::SetSelected(Some(note(1, "A", "x"))));
        state.apply(NotesAction::ClearError);
        assert!(state.loading);

        state.apply(NotesAction::SetSelected(None));
        assert_eq!(state.selected_note, None);
    }

    #[test]
    fn test_overlapping_requests_last_settle_wins() {
        let mut state = loaded(vec![note(1, "A", "x"), note(2, "B", "y")]);

        // A refresh and a delete are in flight together.
        state.apply(NotesAction::Pending(NotesOp::FetchAll));
        state.apply(NotesAction::Pending(NotesOp::Delete));

        // The delete settles first and drops the shared flag while the fetch
        // is still running.
        state.apply(NotesAction::NoteDeleted(2));
        assert!(!state.loading);
        assert_eq!(state.error, None);

        // The fetch then fails and owns the error slot.
        state.apply(NotesAction::Rejected(NotesOp::FetchAll, String::new()));
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch notes"));
        assert_eq!(state.notes, vec![note(1, "A", "x")]);

        // A new request wipes the earlier error.
        state.apply(NotesAction::Pending(NotesOp::Create));
        assert!(state.loading);
        assert_eq!(state.error, None);
    }
}
