use leptos::prelude::*;

use crate::{components::Footer, config::use_shell_config};

pub const COPYRIGHT_YEAR: u16 = 2024;
pub const ATTRIBUTION_NAME: &str = "FastAgency";
pub const ATTRIBUTION_URL: &str = "https://fastagency.ai/";

/// [`Footer`] plus the copyright and attribution lines.
#[component]
pub fn FooterWrapper() -> impl IntoView {
    let app_name = use_shell_config().app_name;

    view! {
        <div>
            <Footer />
            <div class="flex flex-col items-center h-20 bg-footer-copyrights">
                <p class="mt-5 w-full text-sm text-center text-white opacity-50">
                    "© " {COPYRIGHT_YEAR} " "
                    <a
                        href="#"
                        class="text-sm leading-6 text-white underline dark:text-white hover:opacity-80"
                    >
                        {app_name}
                    </a>
                    ". All rights reserved."
                </p>
                <p class="w-full text-sm text-center text-white opacity-50">
                    "Built with ❤️ using "
                    <a
                        target="_blank"
                        rel="noopener noreferrer"
                        href=ATTRIBUTION_URL
                        class="text-sm leading-6 text-white underline dark:text-white hover:opacity-80"
                    >
                        {ATTRIBUTION_NAME}
                    </a>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::config::{ShellConfig, provide_shell_config};

    fn render_with(app_name: Option<&str>) -> String {
        Owner::new().with(|| {
            provide_shell_config(ShellConfig::new(app_name));

            view! { <FooterWrapper /> }.to_html()
        })
    }

    #[test]
    fn unset_name_renders_default() {
        let html = render_with(None);

        assert!(html.contains("Your SaaS"));
        assert!(html.contains("All rights reserved"));
    }

    #[test]
    fn empty_name_renders_default() {
        assert!(render_with(Some("")).contains("Your SaaS"));
    }

    #[test]
    fn configured_name_is_rendered() {
        let html = render_with(Some("Acme Cloud"));

        assert!(html.contains("Acme Cloud"));
        assert!(!html.contains("Your SaaS"));
        assert!(html.contains(ATTRIBUTION_URL));
    }
}
