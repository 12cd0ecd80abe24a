use leptos::{prelude::*, text_prop::TextProp};
use leptos_meta::*;

/// Shared `<head>` tags for a marketing page: document title plus the
/// matching OpenGraph/Twitter tags and description.
#[component]
pub fn PageMeta(
    #[prop(into)] title: TextProp,
    #[prop(into)] description: TextProp,
) -> impl IntoView {
    view! {
        <Title text=title.clone() />
        <Meta name="og:title" content=title.clone() />
        <Meta name="twitter:title" content=title />
        <Meta name="description" content=description.clone() />
        <Meta name="og:description" property="og:description" content=description.clone() />
        <Meta name="twitter:description" content=description />
    }
}
