//! Modal overlays layered over the dashboard: lab store, tool page, guide.
//!
//! All three close on the close button, a backdrop click, or Escape.

#[cfg(test)]
#[path = "overlays_test.rs"]
mod overlays_test;

use leptos::prelude::*;

use crate::components::catalog::{LABS, TOOLS, title_for};

/// Backdrop + dialog frame shared by the overlays.
#[component]
fn Modal(title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="modal"
                role="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="modal__header">
                    <h2>{title}</h2>
                    <button class="modal__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}

/// Practice store for the selected vulnerability lab.
#[component]
pub fn VulnerableStore(vulnerability_type: String, on_close: Callback<()>) -> impl IntoView {
    let title = format!("{} Lab", title_for(LABS, &vulnerability_type));
    view! {
        <Modal title on_close>
            <p class="modal__meta" data-lab=vulnerability_type.clone()>
                "Lab: " {vulnerability_type.clone()}
            </p>
        </Modal>
    }
}

/// Detail page for the selected security tool.
#[component]
pub fn ToolPage(tool_id: String, on_close: Callback<()>) -> impl IntoView {
    let title = title_for(TOOLS, &tool_id).to_owned();
    view! {
        <Modal title on_close>
            <p class="modal__meta" data-tool=tool_id.clone()>
                "Tool: " {tool_id.clone()}
            </p>
        </Modal>
    }
}

/// Welcome guide shown once per app session until dismissed.
#[component]
pub fn VoiceGuide(on_close: Callback<()>) -> impl IntoView {
    view! {
        <aside class="voice-guide">
            <p class="voice-guide__text">
                "Welcome to CyberSec Academy. Pick a lab to start exploiting, or open the tools tab."
            </p>
            <button class="voice-guide__close" on:click=move |_| on_close.run(()) title="Close guide">
                "✕"
            </button>
        </aside>
    }
}
