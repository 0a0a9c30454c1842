use super::notes::{NotesAction, NotesOp};
use crate::api::{ApiError, ApiResult, NotesBackend};
use crate::models::{GenerateNoteRequest, GeneratedDraft, Note, NoteId, NoteInput};
use std::future::Future;

/// Drive one request through pending -> fulfilled/rejected.
///
/// The outcome is handed back to the caller too, so a form can reset itself
/// only after success.
async fn settle<T>(
    op: NotesOp,
    dispatch: &impl Fn(NotesAction),
    request: impl Future<Output = ApiResult<T>>,
    fulfilled: impl FnOnce(&T) -> NotesAction,
) -> ApiResult<T> {
    dispatch(NotesAction::Pending(op));

    match request.await {
        Ok(value) => {
            dispatch(fulfilled(&value));
            Ok(value)
        }
        Err(e) => {
            tracing::warn!(?op, error = %e, "notes request rejected");
            dispatch(NotesAction::Rejected(op, e.to_string()));
            Err(e)
        }
    }
}

pub(crate) async fn fetch_notes(
    backend: &impl NotesBackend,
    dispatch: &impl Fn(NotesAction),
) -> ApiResult<Vec<Note>> {
    settle(NotesOp::FetchAll, dispatch, backend.list_notes(), |notes| {
        NotesAction::NotesLoaded(notes.clone())
    })
    .await
}

pub(crate) async fn fetch_note(
    backend: &impl NotesBackend,
    dispatch: &impl Fn(NotesAction),
    id: NoteId,
) -> ApiResult<Note> {
    settle(NotesOp::FetchOne, dispatch, backend.get_note(id), |note| {
        NotesAction::NoteLoaded(note.clone())
    })
    .await
}

pub(crate) async fn create_note(
    backend: &impl NotesBackend,
    dispatch: &impl Fn(NotesAction),
    input: NoteInput,
) -> ApiResult<Note> {
    settle(NotesOp::Create, dispatch, backend.create_note(&input), |note| {
        NotesAction::NoteCreated(note.clone())
    })
    .await
}

pub(crate) async fn update_note(
    backend: &impl NotesBackend,
    dispatch: &impl Fn(NotesAction),
    id: NoteId,
    input: NoteInput,
) -> ApiResult<Note> {
    settle(
        NotesOp::Update,
        dispatch,
        backend.update_note(id, &input),
        |note| NotesAction::NoteUpdated(note.clone()),
    )
    .await
}

pub(crate) async fn delete_note(
    backend: &impl NotesBackend,
    dispatch: &impl Fn(NotesAction),
    id: NoteId,
) -> ApiResult<NoteId> {
    let request = async {
        backend.delete_note(id).await?;
        Ok::<_, ApiError>(id)
    };
    settle(NotesOp::Delete, dispatch, request, |id| {
        NotesAction::NoteDeleted(*id)
    })
    .await
}

pub(crate) async fn generate_note(
    backend: &impl NotesBackend,
    dispatch: &impl Fn(NotesAction),
    req: GenerateNoteRequest,
) -> ApiResult<GeneratedDraft> {
    let request = async {
        let res = backend.generate_note(&req).await?;
        if !res.success {
            return Err(ApiError::GenerationFailed);
        }
        Ok::<_, ApiError>(res.generated_note)
    };
    settle(NotesOp::Generate, dispatch, request, |_| {
        NotesAction::DraftGenerated
    })
    .await
}
