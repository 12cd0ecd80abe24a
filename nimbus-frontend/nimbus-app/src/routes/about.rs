use crate::components::icon::Icon;
use crate::components::meta::PageMeta;
use crate::components::motion::FadeIn;
use icondata as i;
use leptos::prelude::*;

struct CoreValue {
    title: &'static str,
    description: &'static str,
}

// Render order = array order.
static CORE_VALUES: [CoreValue; 4] = [
    CoreValue {
        title: "Innovation",
        description: "We keep pushing what a personal workspace can do, shipping small \
                      improvements every week instead of waiting for big releases.",
    },
    CoreValue {
        title: "Privacy",
        description: "Your data belongs to you. We collect the minimum we need to run the \
                      service and never sell or rent it to anyone.",
    },
    CoreValue {
        title: "Excellence",
        description: "Every screen, shortcut, and interaction is tuned until it feels fast \
                      and obvious. Good enough is not good enough.",
    },
    CoreValue {
        title: "Adaptability",
        description: "Nimbus works the way you do, on any device, and grows with your \
                      workflow rather than forcing one on you.",
    },
];

struct DeveloperLink {
    icon: icondata::Icon,
    url: &'static str,
    label: &'static str,
    /// Per-link hover accent, keyed off the brand palette in main.css.
    hover: &'static str,
}

static DEVELOPER_LINKS: [DeveloperLink; 4] = [
    DeveloperLink {
        icon: i::BsGlobe,
        url: "https://cyberboyayush.in/",
        label: "Portfolio",
        hover: "hover:text-purple-400",
    },
    DeveloperLink {
        icon: i::BsGithub,
        url: "https://github.com/cyberboyayush",
        label: "GitHub",
        hover: "hover:text-gray-300",
    },
    DeveloperLink {
        icon: i::BsLinkedin,
        url: "https://www.linkedin.com/in/cyberboyayush",
        label: "LinkedIn",
        hover: "hover:text-blue-400",
    },
    DeveloperLink {
        icon: i::BsEnvelope,
        url: "mailto:connect@ayush-sharma.in",
        label: "Email",
        hover: "hover:text-emerald-400",
    },
];

const AVATAR_URL: &str = "https://github.com/cyberboyayush.png";

#[component]
pub fn AboutUs() -> impl IntoView {
    view! {
        <div class="container mx-auto space-y-6 max-w-5xl">
            <PageMeta
                title="About - Nimbus"
                description="Who builds Nimbus and the values behind it."
            />

            // Hero
            <FadeIn>
                <div class="panel p-8 rounded-xl flex flex-col items-center text-center space-y-4">
                    <h1 class="text-4xl font-bold text-[color:var(--brand-fg)]">"About Nimbus"</h1>
                    <p class="text-lg text-[color:var(--color-text)] max-w-3xl leading-relaxed">
                        "Nimbus is a personal workspace that keeps your notes, tasks, and ideas in
                        one calm place. It is built by a single developer who believes software
                        should be fast, private, and a little bit delightful."
                    </p>
                </div>
            </FadeIn>

            // Mission / Vision
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <FadeIn delay_ms=100>
                    <div class="panel p-6 rounded-xl h-full space-y-3">
                        <h2 class="text-2xl font-bold text-[color:var(--brand-fg)]">"Our Mission"</h2>
                        <p class="text-[color:var(--color-text)] leading-relaxed">
                            "To give everyone a focused, private home for their thinking, with no
                            ads, no tracking, and no noise getting between you and your work."
                        </p>
                    </div>
                </FadeIn>
                <FadeIn delay_ms=200>
                    <div class="panel p-6 rounded-xl h-full space-y-3">
                        <h2 class="text-2xl font-bold text-[color:var(--brand-fg)]">"Our Vision"</h2>
                        <p class="text-[color:var(--color-text)] leading-relaxed">
                            "A web where personal tools respect the person using them. Nimbus
                            should feel like it is on your side, today and ten years from now."
                        </p>
                    </div>
                </FadeIn>
            </div>

            // Core values
            <div class="panel p-6 rounded-xl">
                <h2 class="text-2xl font-bold mb-4 text-[color:var(--brand-fg)]">"Our Core Values"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    {CORE_VALUES
                        .iter()
                        .map(|value| view! { <ValueCard value /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            // Developer
            <div class="panel p-6 rounded-xl">
                <h2 class="text-2xl font-bold mb-4 text-[color:var(--brand-fg)]">"Meet the Developer"</h2>
                <div class="flex flex-col sm:flex-row items-center gap-6">
                    <img
                        src=AVATAR_URL
                        alt="Ayush Sharma"
                        class="w-28 h-28 rounded-full border-2 border-[color:var(--brand-ring)] object-cover"
                    />
                    <div class="space-y-3 text-center sm:text-left">
                        <h3 class="text-xl font-bold text-[color:var(--color-text)]">"Ayush Sharma"</h3>
                        <p class="text-[color:var(--color-text)] leading-relaxed max-w-2xl">
                            "Full-stack developer and the one-person team behind Nimbus. Ayush
                            designs, builds, and runs the whole service, and answers every
                            support email personally."
                        </p>
                        <div class="flex flex-wrap justify-center sm:justify-start gap-4">
                            {DEVELOPER_LINKS
                                .iter()
                                .map(|link| view! { <DeveloperLinkButton link /> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>

            // Call to action
            <FadeIn delay_ms=100>
                <div class="panel p-8 rounded-xl flex flex-col items-center text-center space-y-4">
                    <h2 class="text-2xl font-bold text-[color:var(--brand-fg)]">"Ready to get started?"</h2>
                    <p class="text-[color:var(--color-text)]">
                        "Join Nimbus today. Setting up an account takes less than a minute."
                    </p>
                    <a href="/signup" class="btn btn-primary px-8 py-3 text-lg">
                        "Create your account"
                    </a>
                </div>
            </FadeIn>
        </div>
    }
}

#[component]
fn ValueCard(value: &'static CoreValue) -> impl IntoView {
    view! {
        <div class="value-card p-4 rounded-lg border border-[color:var(--color-outline)] hover:border-[color:var(--brand-fg)] transition-colors h-full">
            <h3 class="font-bold text-lg text-[color:var(--brand-fg)]">{value.title}</h3>
            <p class="text-sm text-[color:var(--color-text-muted)] leading-relaxed">
                {value.description}
            </p>
        </div>
    }
}

#[component]
fn DeveloperLinkButton(link: &'static DeveloperLink) -> impl IntoView {
    view! {
        <a
            href=link.url
            target="_blank"
            rel="noopener noreferrer"
            class=format!(
                "dev-link flex items-center gap-2 text-[color:var(--color-text)] transition-colors {}",
                link.hover,
            )
        >
            <Icon icon=link.icon width="1.2em" height="1.2em" />
            {link.label}
        </a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_page() -> String {
        let owner = Owner::new();
        owner.set();
        let (meta_context, _meta_output) = leptos_meta::ServerMetaContext::new();
        provide_context(meta_context);
        leptos_meta::provide_meta_context();
        let html = view! { <AboutUs /> }.to_html();
        drop(owner);
        html
    }

    #[test]
    fn renders_all_copy() {
        let html = render_page();
        for needle in [
            "About Nimbus",
            "Our Mission",
            "Our Vision",
            "Our Core Values",
            "Meet the Developer",
            "Ayush Sharma",
            "Ready to get started?",
        ] {
            assert!(html.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn renders_all_body_paragraphs() {
        let html = render_page();
        // One distinctive substring per paragraph.
        for needle in [
            "a personal workspace that keeps your notes",
            "built by a single developer",
            "a focused, private home for their thinking",
            "personal tools respect the person using them",
            "the one-person team behind Nimbus",
            "Setting up an account takes less than a minute.",
        ] {
            assert!(html.contains(needle), "missing paragraph copy {needle:?}");
        }
        for value in &CORE_VALUES {
            assert!(
                html.contains(value.description),
                "missing description for {}",
                value.title
            );
        }
    }

    #[test]
    fn renders_four_core_values_in_order() {
        let html = render_page();
        assert_eq!(html.matches("value-card").count(), 4);

        let mut cursor = 0;
        for value in ["Innovation", "Privacy", "Excellence", "Adaptability"] {
            let at = html[cursor..]
                .find(value)
                .unwrap_or_else(|| panic!("{value} missing or out of order"));
            cursor += at + value.len();
        }
    }

    #[test]
    fn renders_four_developer_links_with_exact_hrefs() {
        let html = render_page();
        assert_eq!(html.matches("dev-link").count(), 4);

        let mut cursor = 0;
        for href in [
            "href=\"https://cyberboyayush.in/\"",
            "href=\"https://github.com/cyberboyayush\"",
            "href=\"https://www.linkedin.com/in/cyberboyayush\"",
            "href=\"mailto:connect@ayush-sharma.in\"",
        ] {
            let at = html[cursor..]
                .find(href)
                .unwrap_or_else(|| panic!("{href} missing or out of order"));
            cursor += at + href.len();
        }

        for label in ["Portfolio", "GitHub", "LinkedIn", "Email"] {
            assert!(html.contains(label), "missing link label {label:?}");
        }
    }

    #[test]
    fn outbound_links_open_safely() {
        let html = render_page();
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 4);
    }

    #[test]
    fn cta_targets_signup_route() {
        let html = render_page();
        assert!(html.contains("href=\"/signup\""));
    }

    #[test]
    fn avatar_degrades_to_alt_text() {
        let html = render_page();
        assert!(html.contains(&format!("src=\"{AVATAR_URL}\"")));
        assert!(html.contains("alt=\"Ayush Sharma\""));
    }

    #[test]
    fn rerender_is_idempotent() {
        assert_eq!(render_page(), render_page());
    }
}
