use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-4 rounded-lg border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col gap-1.5 px-6"}
    clx! {CardTitle, h2, "text-2xl leading-none font-bold"}
    clx! {CardContent, div, "flex flex-col gap-4 px-6"}

    // A single note in the list grid.
    clx! {NoteTile, div, "flex flex-col gap-2 rounded-lg border p-4 shadow-sm transition-shadow hover:shadow-md"}
    clx! {NoteTileTitle, h3, "text-lg font-semibold"}
    clx! {NoteTileBody, p, "text-sm text-muted-foreground line-clamp-3"}
}

pub use components::*;
