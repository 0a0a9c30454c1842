use crate::components::ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ErrorAlert, Label, Spinner,
    Textarea,
};
use crate::models::{GenerateNoteRequest, GeneratedDraft, NoteInput};
use crate::state::NotesStore;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Asks the backend for a draft, previews it, then saves or discards it.
///
/// The draft only lives here until it is saved; saving goes through the
/// regular create path.
#[component]
pub fn GenerateNoteForm() -> impl IntoView {
    let store = expect_context::<NotesStore>();

    let description: RwSignal<String> = RwSignal::new(String::new());
    let draft: RwSignal<Option<GeneratedDraft>> = RwSignal::new(None);
    let form_error: RwSignal<Option<String>> = RwSignal::new(None);

    let on_generate = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let req = match GenerateNoteRequest::validated(&description.get_untracked()) {
            Ok(req) => req,
            Err(e) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };
        form_error.set(None);

        spawn_local(async move {
            if let Ok(generated) = store.generate_note(req).await {
                draft.set(Some(generated));
                store.clear_error();
            }
        });
    };

    let on_save = move |_: web_sys::MouseEvent| {
        let Some(generated) = draft.get_untracked() else {
            return;
        };

        spawn_local(async move {
            if store.create_note(NoteInput::from(&generated)).await.is_ok() {
                description.set(String::new());
                draft.set(None);
                store.clear_error();
            }
        });
    };

    let on_discard = move |_: web_sys::MouseEvent| {
        description.set(String::new());
        draft.set(None);
    };

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Generate Note with AI"</CardTitle>
            </CardHeader>

            <CardContent>
                {move || form_error.get().or_else(|| store.error()).map(|e| view! { <ErrorAlert message=e /> })}

                <Show
                    when=move || draft.get().is_none()
                    fallback=move || view! {
                        <div class="space-y-4">
                            {move || draft.get().map(|d| view! { <DraftPreview draft=d /> })}

                            <div class="flex gap-2">
                                <Button attr:disabled=move || store.loading() on:click=on_save>
                                    {move || if store.loading() { "Saving..." } else { "Save Note" }}
                                </Button>
                                <Button variant=ButtonVariant::Secondary on:click=on_discard>
                                    "Discard"
                                </Button>
                            </div>
                        </div>
                    }
                >
                    <form class="space-y-4" on:submit=on_generate>
                        <div>
                            <Label html_for="description">"Description"</Label>
                            <Textarea
                                id="description"
                                rows=4
                                placeholder="Describe what you want to generate a note about..."
                                bind_value=description
                                required=true
                            />
                        </div>

                        <Button variant=ButtonVariant::Success attr:disabled=move || store.loading()>
                            <span class="inline-flex items-center gap-2">
                                <Show when=move || store.loading() fallback=|| ().into_view()>
                                    <Spinner />
                                </Show>
                                {move || if store.loading() { "Generating..." } else { "Generate Note" }}
                            </span>
                        </Button>
                    </form>
                </Show>
            </CardContent>
        </Card>
    }
}

#[component]
fn DraftPreview(draft: GeneratedDraft) -> impl IntoView {
    let GeneratedDraft {
        title,
        content,
        key_points,
        category,
    } = draft;

    view! {
        <div class="space-y-2 rounded-lg border bg-muted/40 p-4">
            <div class="flex items-start justify-between gap-2">
                <h3 class="text-lg font-semibold">{title}</h3>
                {category.map(|c| view! {
                    <span class="rounded-full border px-2.5 py-0.5 text-xs text-muted-foreground">{c}</span>
                })}
            </div>
            <p class="whitespace-pre-wrap text-sm text-foreground/80">{content}</p>
            {(!key_points.is_empty()).then(|| view! {
                <ul class="list-disc space-y-1 pl-5 text-sm text-muted-foreground">
                    {key_points.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
                </ul>
            })}
        </div>
    }
}
