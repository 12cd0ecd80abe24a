use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Nimbus" />
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center space-y-6 p-4">
            <div class="text-6xl font-bold tracking-widest bg-clip-text text-transparent bg-gradient-to-br from-white to-gray-400 animate-pulse">
                "404"
            </div>
            <p class="text-lg text-[color:var(--color-text)] leading-relaxed">
                "The page you are looking for does not exist."
            </p>
            <A href="/about" attr:class="btn btn-primary px-8 py-3">
                "Back to Nimbus"
            </A>
        </div>
    }
}
