use crate::api::ApiClient;
use crate::components::notes::{GenerateNoteForm, NoteForm, NoteList};
use crate::state::NotesStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let api = ApiClient::from_env();
    tracing::info!(api_url = %api.base_url, "notes client starting");
    provide_context(NotesStore::new(api));

    view! {
        <div class="min-h-screen bg-muted/40 py-8">
            <div class="mx-auto max-w-6xl px-4">
                <h1 class="mb-8 text-center text-4xl font-bold text-foreground">"AI Notes App"</h1>

                <div class="grid gap-8 lg:grid-cols-2">
                    <div class="space-y-8">
                        <NoteForm />
                        <GenerateNoteForm />
                    </div>

                    <div>
                        <NoteList />
                    </div>
                </div>
            </div>
        </div>
    }
}
