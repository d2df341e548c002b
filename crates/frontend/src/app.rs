use crate::domain::a001_kido_chat::ui::widget::KidoChatWidget;
use crate::layout::header::Header;
use crate::layout::providers::Providers;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Providers>
            <Header />
            <KidoChatWidget />
        </Providers>
    }
}
