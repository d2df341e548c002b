//! Context providers wrapped around the whole app.

use crate::shared::config::load_config;
use leptos::prelude::*;
use thaw::{ConfigProvider, Theme};

/// Provides the thaw theme and the widget configuration to `children`.
#[component]
pub fn Providers(children: Children) -> impl IntoView {
    let theme = RwSignal::new(Theme::light());
    provide_context(load_config());

    view! {
        <ConfigProvider theme>
            {children()}
        </ConfigProvider>
    }
}
