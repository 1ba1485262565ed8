//! Content panels for each dashboard tab.
//!
//! Panel internals are placeholders; the contract with the shell is limited
//! to `on_select(id)` for the catalog panels.

use leptos::prelude::*;

use crate::components::catalog::{CatalogEntry, LABS, TOOLS};

#[component]
fn CatalogGrid(entries: &'static [CatalogEntry], on_select: Callback<String>) -> impl IntoView {
    view! {
        <div class="catalog">
            {entries
                .iter()
                .map(|entry| {
                    let id = entry.id;
                    view! {
                        <button class="catalog__card" data-id=id on:click=move |_| on_select.run(id.to_owned())>
                            <h3 class="catalog__title">{entry.title}</h3>
                            <p class="catalog__summary">{entry.summary}</p>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Summary header shown above the labs.
#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <section class="panel panel--dashboard">
            <h2>"Dashboard"</h2>
            <p>{format!("{} labs and {} tools available", LABS.len(), TOOLS.len())}</p>
        </section>
    }
}

#[component]
pub fn VulnerabilityLabs(on_select: Callback<String>) -> impl IntoView {
    view! {
        <section class="panel panel--labs">
            <h2>"Vulnerability Labs"</h2>
            <CatalogGrid entries=LABS on_select/>
        </section>
    }
}

#[component]
pub fn SecurityTools(on_select: Callback<String>) -> impl IntoView {
    view! {
        <section class="panel panel--tools">
            <h2>"Security Tools"</h2>
            <CatalogGrid entries=TOOLS on_select/>
        </section>
    }
}

#[component]
pub fn LearningPath() -> impl IntoView {
    view! {
        <section class="panel panel--learn">
            <h2>"Learning Path"</h2>
        </section>
    }
}

#[component]
pub fn Progress() -> impl IntoView {
    view! {
        <section class="panel panel--progress">
            <h2>"Progress"</h2>
        </section>
    }
}

#[component]
pub fn AiAssistant() -> impl IntoView {
    view! {
        <section class="panel panel--assistant">
            <h2>"AI Assistant"</h2>
        </section>
    }
}
