use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, NoteTile, NoteTileBody, NoteTileTitle, Spinner,
};
use crate::models::NoteId;
use crate::state::NotesStore;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn NoteList() -> impl IntoView {
    let store = expect_context::<NotesStore>();

    // Initial load.
    Effect::new(move |_| {
        spawn_local(async move {
            let _ = store.fetch_notes().await;
        });
    });

    let on_delete = move |id: NoteId| {
        let confirmed = window()
            .confirm_with_message("Are you sure you want to delete this note?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            let _ = store.delete_note(id).await;
        });
    };

    view! {
        <div class="space-y-4">
            <h2 class="text-2xl font-bold">"Notes"</h2>

            {move || {
                if store.loading() {
                    return view! {
                        <div class="flex items-center justify-center gap-2 py-4 text-sm text-muted-foreground">
                            <Spinner />
                            "Loading notes..."
                        </div>
                    }
                    .into_any();
                }

                if let Some(e) = store.error() {
                    return view! {
                        <div class="py-4 text-center text-destructive">{format!("Error: {e}")}</div>
                    }
                    .into_any();
                }

                let notes = store.notes();
                if notes.is_empty() {
                    return view! {
                        <p class="text-muted-foreground">"No notes found. Create your first note!"</p>
                    }
                    .into_any();
                }

                view! {
                    <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                        {notes
                            .into_iter()
                            .map(move |note| {
                                let id = note.id;
                                let selected = note.clone();
                                view! {
                                    <NoteTile>
                                        <NoteTileTitle>{note.title}</NoteTileTitle>
                                        <NoteTileBody>{note.content}</NoteTileBody>
                                        <div class="flex gap-2">
                                            <Button
                                                size=ButtonSize::Sm
                                                on:click=move |_| store.set_selected_note(Some(selected.clone()))
                                            >
                                                "View"
                                            </Button>
                                            <Button
                                                size=ButtonSize::Sm
                                                variant=ButtonVariant::Destructive
                                                on:click=move |_| on_delete(id)
                                            >
                                                "Delete"
                                            </Button>
                                        </div>
                                    </NoteTile>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
