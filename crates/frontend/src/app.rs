use crate::domain::a001_stack::ui::{MainView, StackDetailPage};
use crate::layout::global_context::{use_app_context, AppGlobalContext};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
fn CenterContent() -> impl IntoView {
    let ctx = use_app_context();
    // Страница стека пересоздаётся только при смене открытого id
    let opened = Memo::new(move |_| ctx.opened.get());

    move || {
        let stack = opened
            .get()
            .and_then(|id| ctx.stacks.with_untracked(|s| s.get(id).cloned()));
        match stack {
            Some(stack) => {
                let on_close = Callback::new(move |_| ctx.close_stack());
                view! { <StackDetailPage stack=stack on_close=on_close /> }.into_any()
            }
            None => view! { <MainView /> }.into_any(),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <CenterContent /> }.into_any()
        />
    }
}
