use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 3] = [("Home", "#home"), ("About", "#about"), ("Contact", "#contact")];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header
            data-zone="header"
            style="position: fixed; top: 0; left: 0; right: 0; z-index: 10; display: flex; align-items: center; justify-content: space-between; padding: 12px 24px; background: #319795; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.15);"
        >
            <span style="color: white; font-size: 18px; font-weight: bold;">"Kidopedia AI"</span>
            <nav style="display: flex; gap: 24px;">
                {NAV_LINKS
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <a href=href style="color: white; text-decoration: none;">
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
