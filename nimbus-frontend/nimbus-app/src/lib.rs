pub mod components;
pub mod routes;

use crate::routes::about::AboutUs;
use crate::routes::legal::privacy_policy::PrivacyPolicy;
use crate::routes::not_found::NotFound;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/nimbus.css" />
        <Title text="Nimbus" />
        <div class="min-h-screen bg-[color:var(--color-bg)] text-[color:var(--color-text)]">
            <div class="gradient-outer">
                <div class="gradient"></div>
            </div>
            <Router>
                <nav class="header flex flex-wrap items-center gap-6 px-6 py-4">
                    <A href="/about" attr:class="font-medium hover:text-[color:var(--brand-fg)]">
                        "About"
                    </A>
                    <A
                        href="/privacy-policy"
                        attr:class="font-medium hover:text-[color:var(--brand-fg)]"
                    >
                        "Privacy Policy"
                    </A>
                </nav>
                <main class="px-4 pb-16">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("") view=|| view! { <Redirect path="/about" /> } />
                        <Route path=path!("about") view=AboutUs />
                        <Route path=path!("privacy-policy") view=PrivacyPolicy />
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
