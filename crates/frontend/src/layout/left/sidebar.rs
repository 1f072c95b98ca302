//! Боковая панель: бренд и список стеков в порядке создания

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::domain::a001_stack::{StackId, StackStore};
use leptos::prelude::*;

/// Пункты меню: id и имя стека в порядке создания
fn sidebar_items(store: &StackStore) -> Vec<(StackId, String)> {
    store
        .stacks()
        .iter()
        .map(|s| (s.id, s.name.clone()))
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    let items = move || ctx.stacks.with(sidebar_items);

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Inspira"</div>
            <div class="sidebar__section-title">"Stacks"</div>
            <Show
                when=move || ctx.stacks.with(|s| !s.is_empty())
                fallback=|| view! { <div class="sidebar__empty">"No stacks yet"</div> }
            >
                <ul class="sidebar__list">
                    <For
                        each=items
                        key=|(id, _)| *id
                        children=move |(id, name)| {
                            let is_active = move || ctx.opened.get() == Some(id);
                            let title = name.clone();
                            view! {
                                <li
                                    class="sidebar__item"
                                    class:sidebar__item--active=is_active
                                    title=title
                                    on:click=move |_| ctx.open_stack(id)
                                >
                                    <span class="sidebar__icon">{icon("layers")}</span>
                                    <span class="sidebar__label">{name}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </nav>
    }
}
