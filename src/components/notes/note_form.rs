use crate::components::ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ErrorAlert, Input, Label,
    Spinner, Textarea,
};
use crate::models::{Note, NoteId, NoteInput};
use crate::state::NotesStore;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Field signals of the note form.
#[derive(Clone, Copy)]
struct NoteFormFields {
    title: RwSignal<String>,
    content: RwSignal<String>,
    editing: RwSignal<Option<NoteId>>,
    form_error: RwSignal<Option<String>>,
}

impl NoteFormFields {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            editing: RwSignal::new(None),
            form_error: RwSignal::new(None),
        }
    }

    /// Fill the fields from the selected note, or empty them. Any local
    /// validation message belongs to the previous contents and is dropped.
    fn load(&self, selected: Option<Note>) {
        self.form_error.set(None);
        match selected {
            Some(note) => {
                self.title.set(note.title);
                self.content.set(note.content);
                self.editing.set(Some(note.id));
            }
            None => self.reset(),
        }
    }

    fn reset(&self) {
        self.title.set(String::new());
        self.content.set(String::new());
        self.editing.set(None);
        self.form_error.set(None);
    }
}

/// Create form, switching to edit mode while a note is selected.
#[component]
pub fn NoteForm() -> impl IntoView {
    let store = expect_context::<NotesStore>();

    let fields = NoteFormFields::new();
    let NoteFormFields {
        title,
        content,
        editing,
        form_error,
    } = fields;

    // Memo so that loading/error churn does not wipe what the user typed.
    let selected = Memo::new(move |_| store.selected_note());

    Effect::new(move |_| fields.load(selected.get()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let input = match NoteInput::validated(&title.get_untracked(), &content.get_untracked()) {
            Ok(input) => input,
            Err(e) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };
        form_error.set(None);

        let editing_id = editing.get_untracked();
        spawn_local(async move {
            let saved = match editing_id {
                Some(id) => store
                    .update_note(id, input)
                    .await
                    .map(|_| store.set_selected_note(None)),
                None => store.create_note(input).await.map(|_| {
                    title.set(String::new());
                    content.set(String::new());
                }),
            };

            if saved.is_ok() {
                store.clear_error();
            }
        });
    };

    let on_cancel = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        store.set_selected_note(None);
        fields.reset();
    };

    let is_editing = move || editing.get().is_some();

    view! {
        <Card>
            <CardHeader>
                <CardTitle>{move || if is_editing() { "Edit Note" } else { "Create New Note" }}</CardTitle>
            </CardHeader>

            <CardContent>
                {move || form_error.get().or_else(|| store.error()).map(|e| view! { <ErrorAlert message=e /> })}

                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <Label html_for="title">"Title"</Label>
                        <Input id="title" placeholder="Enter note title" bind_value=title required=true />
                    </div>

                    <div>
                        <Label html_for="content">"Content"</Label>
                        <Textarea
                            id="content"
                            rows=6
                            placeholder="Enter note content"
                            bind_value=content
                            required=true
                        />
                    </div>

                    <div class="flex gap-2">
                        <Button attr:disabled=move || store.loading()>
                            <span class="inline-flex items-center gap-2">
                                <Show when=move || store.loading() fallback=|| ().into_view()>
                                    <Spinner />
                                </Show>
                                {move || {
                                    if store.loading() {
                                        "Saving..."
                                    } else if is_editing() {
                                        "Update Note"
                                    } else {
                                        "Create Note"
                                    }
                                }}
                            </span>
                        </Button>

                        <Show when=is_editing fallback=|| ().into_view()>
                            <Button variant=ButtonVariant::Secondary on:click=on_cancel>
                                "Cancel"
                            </Button>
                        </Show>
                    </div>
                </form>
            </CardContent>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: NoteId, title: &str, content: &str) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_selecting_note_fills_fields_and_drops_validation_message() {
        let owner = Owner::new();
        owner.with(|| {
            let fields = NoteFormFields::new();
            fields
                .form_error
                .set(Some("Title is required".to_string()));

            fields.load(Some(note(4, "Groceries", "milk")));

            assert_eq!(fields.title.get_untracked(), "Groceries");
            assert_eq!(fields.content.get_untracked(), "milk");
            assert_eq!(fields.editing.get_untracked(), Some(4));
            assert!(fields.form_error.get_untracked().is_none());
        });
    }

    #[test]
    fn test_clearing_selection_empties_fields() {
        let owner = Owner::new();
        owner.with(|| {
            let fields = NoteFormFields::new();
            fields.load(Some(note(4, "Groceries", "milk")));
            fields
                .form_error
                .set(Some("Content is required".to_string()));

            fields.load(None);

            assert_eq!(fields.title.get_untracked(), "");
            assert_eq!(fields.content.get_untracked(), "");
            assert!(fields.editing.get_untracked().is_none());
            assert!(fields.form_error.get_untracked().is_none());
        });
    }
}
