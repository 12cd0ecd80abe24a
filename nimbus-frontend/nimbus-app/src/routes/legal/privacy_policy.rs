use crate::components::icon::Icon;
use crate::components::meta::PageMeta;
use crate::components::motion::{FadeIn, PulseDot};
use icondata as i;
use leptos::prelude::*;

const PRIVACY_CONTACT: &str = "mailto:connect@ayush-sharma.in?subject=Privacy%20Policy%20Query";
const PRIVACY_EMAIL: &str = "mailto:connect@ayush-sharma.in";

struct PolicyKeyPointGroup {
    icon: icondata::Icon,
    title: &'static str,
    points: &'static [&'static str],
}

static KEY_POINT_GROUPS: [PolicyKeyPointGroup; 2] = [
    PolicyKeyPointGroup {
        icon: i::BsFileEarmarkText,
        title: "What we collect",
        points: &[
            "Your name and email address when you create an account",
            "Workspace content you choose to store in Nimbus",
            "Basic usage signals that keep the service reliable",
        ],
    },
    PolicyKeyPointGroup {
        icon: i::BsShieldLock,
        title: "What we never do",
        points: &[
            "Sell or rent your personal information",
            "Read your workspace content for advertising",
            "Share data with third parties beyond the providers listed below",
        ],
    },
];

struct SecurityFeature {
    icon: icondata::Icon,
    title: &'static str,
    description: &'static str,
}

static SECURITY_FEATURES: [SecurityFeature; 3] = [
    SecurityFeature {
        icon: i::BsLock,
        title: "Encryption in transit and at rest",
        description: "Every request uses TLS, and stored content is encrypted on disk.",
    },
    SecurityFeature {
        icon: i::BsKey,
        title: "OAuth sign-in",
        description: "Sign in with Google or GitHub; Nimbus never sees or stores your password.",
    },
    SecurityFeature {
        icon: i::BsEyeSlash,
        title: "No tracking pixels",
        description: "No third-party analytics or advertising scripts run on any Nimbus page.",
    },
];

struct QuickAction {
    icon: icondata::Icon,
    label: &'static str,
}

// Placeholder controls with no bound behavior yet.
static QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        icon: i::BsDownload,
        label: "Download Data",
    },
    QuickAction {
        icon: i::BsGear,
        label: "Privacy Settings",
    },
    QuickAction {
        icon: i::BsShieldCheck,
        label: "Security Check",
    },
    QuickAction {
        icon: i::BsChatDots,
        label: "Contact Support",
    },
];

#[component]
pub fn PrivacyPolicy() -> impl IntoView {
    view! {
        <div class="container mx-auto space-y-6 max-w-4xl">
            <PageMeta
                title="Privacy Policy - Nimbus"
                description="How Nimbus collects, uses, and protects your data."
            />

            <FadeIn>
                <div class="panel p-8 rounded-xl text-center space-y-2">
                    <h1 class="text-4xl font-bold text-[color:var(--brand-fg)]">"Privacy Policy"</h1>
                    <p class="text-sm text-[color:var(--color-text-muted)]">
                        "Last updated: June 2025"
                    </p>
                </div>
            </FadeIn>

            // Key points
            <div class="panel p-6 rounded-xl space-y-4">
                <div class="flex items-center gap-3">
                    <PulseDot />
                    <h2 class="text-2xl font-bold text-[color:var(--brand-fg)]">"The Short Version"</h2>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {KEY_POINT_GROUPS
                        .iter()
                        .map(|group| view! { <KeyPointCard group /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <PolicySection heading="Information We Collect">
                <p>
                    "When you create a Nimbus account we ask for your name and email address.
                    These identify your account and let us reach you about it. The content you
                    put into your workspace is stored so we can show it back to you; it is
                    yours, and we make no other use of it."
                </p>
                <p>
                    "We also keep minimal operational logs, such as the time of your last
                    sign-in and coarse error reports, so that we can keep the service
                    healthy. These logs never include your workspace content."
                </p>
            </PolicySection>

            <PolicySection heading="Third-Party Services">
                <p>
                    "Nimbus runs on a small set of infrastructure providers. Authentication
                    and data storage are handled by " <strong>"Appwrite"</strong>
                    ", which processes your sign-in and stores your encrypted content on our
                    behalf. If you sign in with Google or GitHub, those providers handle the
                    OAuth flow and only confirm your identity to us; Nimbus never receives
                    your password."
                </p>
                <p>
                    "Each provider has its own privacy policy, and we only work with providers
                    whose commitments match the ones on this page."
                </p>
            </PolicySection>

            <div class="panel p-6 rounded-xl space-y-4">
                <h2 class="text-2xl font-bold text-[color:var(--brand-fg)]">"Security Features"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {SECURITY_FEATURES
                        .iter()
                        .map(|feature| view! { <SecurityFeatureCard feature /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <PolicySection heading="How We Use Your Information">
                <p>"We use the information above only to:"</p>
                <ul class="list-disc pl-6 space-y-1">
                    <li>"Provide and operate your Nimbus workspace"</li>
                    <li>"Notify you about changes that affect your account"</li>
                    <li>"Answer your support requests"</li>
                    <li>"Keep the service secure and reliable"</li>
                </ul>
            </PolicySection>

            <PolicySection heading="Data Sharing">
                <p>
                    "We do not sell, rent, or trade your personal information. Data leaves our
                    providers only if the law requires it, and we will tell you when that
                    happens unless we are legally prevented from doing so."
                </p>
            </PolicySection>

            <PolicySection heading="Data Retention">
                <p>
                    "Your data stays in your workspace for as long as you keep your account.
                    When you delete your account, your content and personal information are
                    removed from our systems within 30 days, after which only anonymized
                    operational logs remain."
                </p>
            </PolicySection>

            <PolicySection heading="How We Protect Your Data">
                <p>
                    "Beyond the features listed above, access to production systems is limited
                    to the developer, protected by hardware security keys, and every access is
                    logged. No security measure is perfect, but we treat your data with the
                    same care we want for our own."
                </p>
            </PolicySection>

            <PolicySection heading="Your Rights">
                <p>
                    "You can ask us at any time to export the data we hold about you, correct
                    it, or delete it entirely. Email us and we will respond within a few
                    days, no forms and no hoops."
                </p>
            </PolicySection>

            <PolicySection heading="Changes to This Policy">
                <p>
                    "If this policy changes in a way that matters, we will email every account
                    holder before the change takes effect and keep the previous version
                    available on request."
                </p>
            </PolicySection>

            // Quick actions
            <div class="panel p-6 rounded-xl space-y-4">
                <h2 class="text-2xl font-bold text-[color:var(--brand-fg)]">"Quick Actions"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|action| view! { <QuickActionButton action /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            // Contact
            <FadeIn delay_ms=100>
                <div class="panel p-8 rounded-xl flex flex-col items-center text-center space-y-4">
                    <h2 class="text-2xl font-bold text-[color:var(--brand-fg)]">"Questions?"</h2>
                    <p class="text-[color:var(--color-text)]">
                        "We answer every privacy question personally, usually within a day."
                    </p>
                    <a href=PRIVACY_CONTACT class="btn btn-primary gap-2 px-8 py-3">
                        <Icon icon=i::BsEnvelope width="1.2em" height="1.2em" />
                        "Contact Privacy Team"
                    </a>
                    <a
                        href=PRIVACY_EMAIL
                        class="text-sm text-[color:var(--color-text-muted)] hover:underline"
                    >
                        "connect@ayush-sharma.in"
                    </a>
                </div>
            </FadeIn>
        </div>
    }
}

#[component]
fn PolicySection(heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="policy-section panel p-6 rounded-xl space-y-3">
            <h2 class="text-2xl font-bold text-[color:var(--brand-fg)]">{heading}</h2>
            <div class="space-y-3 text-[color:var(--color-text)] leading-relaxed">{children()}</div>
        </section>
    }
}

#[component]
fn KeyPointCard(group: &'static PolicyKeyPointGroup) -> impl IntoView {
    view! {
        <div class="key-points p-4 rounded-lg border border-[color:var(--color-outline)] space-y-2">
            <div class="flex items-center gap-2 text-[color:var(--brand-fg)]">
                <Icon icon=group.icon width="1.2em" height="1.2em" />
                <h3 class="font-bold text-lg">{group.title}</h3>
            </div>
            <ul class="list-disc pl-6 space-y-1 text-sm text-[color:var(--color-text-muted)]">
                {group
                    .points
                    .iter()
                    .map(|point| view! { <li>{*point}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[component]
fn SecurityFeatureCard(feature: &'static SecurityFeature) -> impl IntoView {
    view! {
        <div class="security-feature p-4 rounded-lg border border-[color:var(--color-outline)] space-y-2">
            <div class="flex items-center gap-2 text-[color:var(--brand-fg)]">
                <Icon icon=feature.icon width="1.2em" height="1.2em" />
                <h3 class="font-bold">{feature.title}</h3>
            </div>
            <p class="text-sm text-[color:var(--color-text-muted)] leading-relaxed">
                {feature.description}
            </p>
        </div>
    }
}

#[component]
fn QuickActionButton(action: &'static QuickAction) -> impl IntoView {
    view! {
        <button
            type="button"
            class="quick-action flex flex-col items-center gap-2 p-4 rounded-lg border border-[color:var(--color-outline)] hover:border-[color:var(--brand-fg)] transition-colors"
        >
            <Icon icon=action.icon width="1.5em" height="1.5em" />
            <span class="text-sm font-medium">{action.label}</span>
        </button>
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
        let html = view! { <PrivacyPolicy /> }.to_html();
        drop(owner);
        html
    }

    #[test]
    fn sections_render_in_document_order() {
        let html = render_page();
        let mut cursor = 0;
        for heading in [
            "The Short Version",
            "Information We Collect",
            "Third-Party Services",
            "Security Features",
            "How We Use Your Information",
            "Data Sharing",
            "Data Retention",
            "How We Protect Your Data",
            "Your Rights",
            "Changes to This Policy",
        ] {
            let at = html[cursor..]
                .find(heading)
                .unwrap_or_else(|| panic!("{heading:?} missing or out of order"));
            cursor += at + heading.len();
        }
    }

    #[test]
    fn renders_section_body_copy() {
        let html = render_page();
        // One distinctive substring per paragraph, in document order.
        for needle in [
            "Last updated: June 2025",
            "we ask for your name and email address.",
            "minimal operational logs",
            "a small set of infrastructure providers",
            "Appwrite",
            "has its own privacy policy",
            "We use the information above only to:",
            "Provide and operate your Nimbus workspace",
            "Notify you about changes that affect your account",
            "Answer your support requests",
            "Keep the service secure and reliable",
            "We do not sell, rent, or trade your personal information.",
            "for as long as you keep your account.",
            "removed from our systems within 30 days",
            "access to production systems is limited",
            "protected by hardware security keys",
            "export the data we hold about you",
            "before the change takes effect",
            "We answer every privacy question personally, usually within a day.",
        ] {
            assert!(html.contains(needle), "missing paragraph copy {needle:?}");
        }
    }

    #[test]
    fn renders_key_point_groups() {
        let html = render_page();
        assert_eq!(html.matches("key-points").count(), 2);
        for group in &KEY_POINT_GROUPS {
            assert!(html.contains(group.title));
            for point in group.points {
                assert!(html.contains(point), "missing key point {point:?}");
            }
        }
    }

    #[test]
    fn renders_three_security_features() {
        let html = render_page();
        assert_eq!(html.matches("security-feature").count(), 3);
        for feature in &SECURITY_FEATURES {
            assert!(html.contains(feature.title));
            assert!(html.contains(feature.description));
        }
    }

    #[test]
    fn renders_four_inert_quick_actions() {
        let html = render_page();
        assert_eq!(html.matches("quick-action").count(), 4);
        let mut cursor = 0;
        for label in [
            "Download Data",
            "Privacy Settings",
            "Security Check",
            "Contact Support",
        ] {
            let at = html[cursor..]
                .find(label)
                .unwrap_or_else(|| panic!("{label:?} missing or out of order"));
            cursor += at + label.len();
        }
    }

    #[test]
    fn contact_affordances_have_exact_hrefs() {
        let html = render_page();
        assert!(html.contains(
            "href=\"mailto:connect@ayush-sharma.in?subject=Privacy%20Policy%20Query\""
        ));
        assert!(html.contains("href=\"mailto:connect@ayush-sharma.in\""));
        assert!(html.contains("Contact Privacy Team"));
    }

    #[test]
    fn rerender_is_idempotent() {
        assert_eq!(render_page(), render_page());
    }
}
