mod notes;
mod operations;

#[allow(unused_imports)]
pub(crate) use notes::{NotesAction, NotesOp, NotesState};

use crate::api::{ApiClient, ApiResult};
use crate::models::{GenerateNoteRequest, GeneratedDraft, Note, NoteId, NoteInput};
use leptos::prelude::*;

/// Reactive handle over the notes snapshot, shared with every view through
/// context.
///
/// Only the operations below write to `state`; views read it.
#[derive(Clone, Copy)]
pub(crate) struct NotesStore {
    state: RwSignal<NotesState>,
    api: StoredValue<ApiClient, LocalStorage>,
}

impl NotesStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: RwSignal::new(NotesState::default()),
            api: StoredValue::new_local(api),
        }
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state.with(|s| s.notes.clone())
    }

    pub fn selected_note(&self) -> Option<Note> {
        self.state.with(|s| s.selected_note.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    #[allow(dead_code)]
    pub fn snapshot_untracked(&self) -> NotesState {
        self.state.get_untracked()
    }

    pub fn dispatch(&self, action: NotesAction) {
        self.state.update(|s| s.apply(action));
    }

    pub fn set_selected_note(&self, note: Option<Note>) {
        self.dispatch(NotesAction::SetSelected(note));
    }

    pub fn clear_error(&self) {
        self.dispatch(NotesAction::ClearError);
    }

    pub async fn fetch_notes(self) -> ApiResult<Vec<Note>> {
        let api = self.api.get_value();
        operations::fetch_notes(&api, &|a| self.dispatch(a)).await
    }

    #[allow(dead_code)]
    pub async fn fetch_note(self, id: NoteId) -> ApiResult<Note> {
        let api = self.api.get_value();
        operations::fetch_note(&api, &|a| self.dispatch(a), id).await
    }

    pub async fn create_note(self, input: NoteInput) -> ApiResult<Note> {
        let api = self.api.get_value();
        operations::create_note(&api, &|a| self.dispatch(a), input).await
    }

    pub async fn update_note(self, id: NoteId, input: NoteInput) -> ApiResult<Note> {
        let api = self.api.get_value();
        operations::update_note(&api, &|a| self.dispatch(a), id, input).await
    }

    pub async fn delete_note(self, id: NoteId) -> ApiResult<NoteId> {
        let api = self.api.get_value();
        operations::delete_note(&api, &|a| self.dispatch(a), id).await
    }

    pub async fn generate_note(self, req: GenerateNoteRequest) -> ApiResult<GeneratedDraft> {
        let api = self.api.get_value();
        operations::generate_note(&api, &|a| self.dispatch(a), req).await
    }
}
