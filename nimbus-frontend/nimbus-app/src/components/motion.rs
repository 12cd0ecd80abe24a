use leptos::prelude::*;

/// Decorative entrance animation.
///
/// Purely cosmetic: the children are always part of the DOM and every link
/// inside stays activatable before the animation finishes. `main.css` turns
/// the keyframes off entirely under `prefers-reduced-motion`, which must not
/// change the rendered content.
#[component]
pub fn FadeIn(
    /// Stagger offset in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    #[prop(into, optional)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let style = (delay_ms > 0).then(|| format!("animation-delay: {delay_ms}ms;"));
    let class = match class {
        Some(class) => format!("fade-in {class}"),
        None => "fade-in".to_string(),
    };
    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

/// Small pulsing dot used next to "live" headings.
#[component]
pub fn PulseDot() -> impl IntoView {
    view! {
        <span class="relative flex h-3 w-3" aria-hidden="true">
            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-[color:var(--decor-spot)] opacity-75"></span>
            <span class="relative inline-flex rounded-full h-3 w-3 bg-[color:var(--decor-spot)]"></span>
        </span>
    }
}
