//! Kido Chat Widget - View Component

use super::mascot::Mascot;
use super::model::{send_ask, send_reset};
use super::view_model::{KidoChatVm, SettleReport};
use crate::shared::api_utils::api_base;
use crate::shared::config::use_widget_config;
use leptos::prelude::*;
use thaw::*;

const NEW_CHAT_PROMPT: &str = "Start a new chat? This will clear the conversation.";

const WIDGET_CSS: &str = r#"
.kido-mascot {
    display: flex;
    justify-content: center;
    margin: -20px 0;
    animation: kido-bounce 3s ease-in-out infinite;
}
@keyframes kido-bounce {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-10px); }
}
.kido-button {
    width: 200px;
    border-radius: 50px !important;
    box-shadow: 3px 6px 0px rgba(0, 0, 0, 0.3);
    transition: all 0.25s ease-in-out;
}
.kido-button:hover {
    transform: translateY(-3px) scale(1.05);
    box-shadow: 0 0 25px rgba(72, 187, 120, 0.9);
}
"#;

#[component]
#[allow(non_snake_case)]
pub fn KidoChatWidget() -> impl IntoView {
    let config = use_widget_config();
    let vm = KidoChatVm::new(config.session_id());
    let base = api_base(&config);
    let keywords = config.image_keywords();
    let protocol = config.api.protocol;

    // Ask handler - using Callback to avoid move issues
    let handle_ask = Callback::new({
        let base = base.clone();
        move |_| {
            let text = vm.question.get_untracked();
            let pending = vm
                .state
                .try_update(|s| {
                    s.question = text;
                    s.begin_ask(&keywords, protocol)
                })
                .flatten();
            let Some(pending) = pending else {
                return;
            };
            vm.question.set(String::new());

            log::debug!(
                "Dispatching request #{} to {} (image: {})",
                pending.ticket.value(),
                pending.body.path(),
                pending.kind.is_image()
            );

            let base = base.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = send_ask(&base, &pending.body).await;
                if let Err(e) = &result {
                    log::error!("Request #{} failed: {}", pending.ticket.value(), e);
                }
                let report = vm.state.try_update(|s| s.settle_ask(pending.ticket, result));
                match SettleReport::from(report) {
                    SettleReport::Applied => {}
                    SettleReport::Stale => {
                        log::warn!("Dropped stale response for request #{}", pending.ticket.value())
                    }
                    SettleReport::Unmounted => log::debug!(
                        "Widget unmounted before request #{} settled",
                        pending.ticket.value()
                    ),
                }
            });
        }
    });

    let handle_new_chat = Callback::new(move |_| {
        let confirmed = {
            if let Some(win) = web_sys::window() {
                win.confirm_with_message(NEW_CHAT_PROMPT).unwrap_or(false)
            } else {
                false
            }
        };
        if !confirmed {
            return;
        }

        vm.question.set(String::new());
        let Some(pending) = vm.state.try_update(|s| s.begin_reset()) else {
            return;
        };
        log::info!("Resetting conversation for session {}", pending.body.session_id);

        let base = base.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = send_reset(&base, &pending.body).await;
            if let Err(e) = &result {
                log::error!("Reset failed: {}", e);
            }
            let report = vm.state.try_update(|s| s.settle_reset(pending.ticket, result));
            match SettleReport::from(report) {
                SettleReport::Applied => {}
                SettleReport::Stale => {
                    log::warn!("Dropped stale reset response #{}", pending.ticket.value())
                }
                SettleReport::Unmounted => log::debug!(
                    "Widget unmounted before reset #{} settled",
                    pending.ticket.value()
                ),
            }
        });
    });

    let is_loading = Signal::derive(move || vm.is_loading());

    view! {
        <main style="position: fixed; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; background-color: #5b78b4; text-align: center; overflow: auto;">
            <style>{WIDGET_CSS}</style>

            <Mascot />

            <h1 style="font-size: 3.4rem; font-weight: 700; color: white; letter-spacing: 1px; margin-bottom: 3.5rem;">
                "Kidopedia"
            </h1>

            <div style="display: flex; flex-direction: column; align-items: center; gap: 1.2rem; width: 100%;">
                <div style="width: 200px;">
                    <Input
                        value=vm.question
                        placeholder="Ask me anything"
                        attr:style="width: 100%; text-align: center; border-radius: 50px;"
                        disabled=is_loading
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !is_loading.get_untracked() {
                                ev.prevent_default();
                                handle_ask.run(());
                            }
                        }
                    />
                </div>

                <Button
                    class="kido-button"
                    appearance=ButtonAppearance::Primary
                    disabled=is_loading
                    on_click=move |_| handle_ask.run(())
                >
                    {move || vm.ask_label()}
                </Button>

                <Button
                    class="kido-button"
                    appearance=ButtonAppearance::Secondary
                    disabled=is_loading
                    on_click=move |_| handle_new_chat.run(())
                >
                    "New Chat"
                </Button>

                <Show when=move || vm.is_drawing()>
                    <div style="display: flex; align-items: center; gap: 8px; color: white;">
                        <Spinner />
                        "Drawing your picture..."
                    </div>
                </Show>

                {move || {
                    vm.answer()
                        .map(|answer| {
                            view! {
                                <p style="color: white; margin-top: 1rem; width: 70%; white-space: pre-wrap;">
                                    <strong>"Answer:"</strong>
                                    " "
                                    {answer}
                                </p>
                            }
                        })
                }}

                {move || {
                    vm.image_url()
                        .map(|url| {
                            view! {
                                <img
                                    src=url
                                    alt="Generated picture"
                                    style="max-width: 320px; width: 70%; border-radius: 16px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);"
                                />
                            }
                        })
                }}
            </div>
        </main>
    }
}
