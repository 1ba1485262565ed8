//! Authenticated dashboard: navigation, the active tab's panel, and overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only rendered while the session holds a user. Every interaction is a
//! single `RouterState` transition; overlays sit above the active tab and
//! never change it.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::navigation::Navigation;
use crate::components::overlays::{ToolPage, VoiceGuide, VulnerableStore};
use crate::components::panels::{AiAssistant, Dashboard, LearningPath, Progress, SecurityTools, VulnerabilityLabs};
use crate::state::router::{Overlay, RouterState, Tab};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();

    let active_tab = Memo::new(move |_| router.with(|r| r.active_tab));
    let overlay = Memo::new(move |_| router.with(|r| r.overlay.clone()));
    let guide_visible = Memo::new(move |_| router.with(|r| r.guide_visible));

    let on_tab_change = Callback::new(move |tab: Tab| router.update(|r| r.select_tab(tab)));
    let on_lab_select = Callback::new(move |id: String| router.update(|r| r.select_lab(id)));
    let on_tool_select = Callback::new(move |id: String| router.update(|r| r.select_tool(id)));
    let on_lab_close = Callback::new(move |()| router.update(RouterState::close_lab));
    let on_tool_close = Callback::new(move |()| router.update(RouterState::close_tool));
    let on_guide_close = Callback::new(move |()| router.update(RouterState::close_guide));

    view! {
        <div class="academy">
            <Navigation active_tab on_tab_change/>

            <main class="academy__main">
                {move || match active_tab.get() {
                    Tab::Labs => {
                        view! {
                            <Dashboard/>
                            <div class="academy__labs">
                                <VulnerabilityLabs on_select=on_lab_select/>
                            </div>
                        }
                            .into_any()
                    }
                    Tab::Tools => view! { <SecurityTools on_select=on_tool_select/> }.into_any(),
                    Tab::Learn => view! { <LearningPath/> }.into_any(),
                    Tab::Progress => view! { <Progress/> }.into_any(),
                    Tab::Assistant => view! { <AiAssistant/> }.into_any(),
                }}
            </main>

            {move || match overlay.get() {
                Some(Overlay::Lab(id)) => {
                    view! { <VulnerableStore vulnerability_type=id on_close=on_lab_close/> }.into_any()
                }
                Some(Overlay::Tool(id)) => view! { <ToolPage tool_id=id on_close=on_tool_close/> }.into_any(),
                None => ().into_any(),
            }}

            <Show when=move || guide_visible.get()>
                <VoiceGuide on_close=on_guide_close/>
            </Show>
        </div>
    }
}
