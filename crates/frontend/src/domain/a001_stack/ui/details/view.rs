//! Stack Detail - View Component
//!
//! Загрузка файлов (drag-and-drop и диалог выбора) и чат-заглушка.
//! Всё состояние локально и пропадает при закрытии страницы.

use super::file_tile::FileTile;
use super::view_model::StackDetailsVm;
use crate::shared::icons::icon;
use crate::shared::timers::ScopedTimeouts;
use contracts::domain::a001_stack::Stack;
use contracts::domain::a003_stack_chat::ChatRole;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn StackDetailPage(stack: Stack, on_close: Callback<()>) -> impl IntoView {
    let vm = StackDetailsVm::new();
    let replies = ScopedTimeouts::new();
    let file_input_ref = NodeRef::<html::Input>::new();
    let messages_container_ref = NodeRef::<html::Div>::new();

    let created = stack.created_at.format("%b %d, %Y %H:%M").to_string();

    let handle_send = move || {
        let text = vm.chat_input.get_untracked();
        if let Some(reply) = vm.transcript.try_update(|t| t.send(&text)).flatten() {
            vm.chat_input.set(String::new());
            let delay = reply.delay_ms;
            replies.schedule(delay, move || {
                vm.transcript.try_update(|t| t.deliver(reply));
            });
        }
    };

    // Прокрутка ленты к последнему сообщению
    Effect::new(move |_| {
        vm.transcript.with(|t| t.len());
        if let Some(container) = messages_container_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let on_drag_over = move |ev: ev::DragEvent| {
        ev.prevent_default();
        vm.is_dragging.set(true);
    };
    let on_drag_leave = move |_: ev::DragEvent| vm.is_dragging.set(false);
    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        vm.is_dragging.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            vm.add_files(&files);
        }
    };

    let open_picker = move |_| {
        if let Some(input) = file_input_ref.get_untracked() {
            input.click();
        }
    };
    let on_pick = move |ev: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(files) = input.files() {
            vm.add_files(&files);
        }
        // Повторный выбор тех же файлов снова вызовет change
        input.set_value("");
    };

    view! {
        <div class="stack-detail">
            <div class="stack-detail__header">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_close.run(())
                >
                    {icon("arrow-left")}
                    " Back"
                </Button>
                <div class="stack-detail__heading">
                    <h1 class="stack-detail__title">{stack.name.clone()}</h1>
                    <span class="stack-detail__meta">"Created on " {created}</span>
                </div>
            </div>

            <div class="stack-detail__body">
                <section class="stack-detail__files">
                    <div
                        class="drop-zone"
                        class:drop-zone--active=move || vm.is_dragging.get()
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                        on:click=open_picker
                    >
                        {icon("upload")}
                        <p>"Drag and drop files here, or click to browse"</p>
                        <input
                            type="file"
                            multiple=true
                            style="display: none;"
                            node_ref=file_input_ref
                            on:change=on_pick
                        />
                    </div>

                    <div class="file-grid">
                        <For
                            each=move || 0..vm.files.with(|f| f.len())
                            key=|index| *index
                            let:index
                        >
                            <FileTile index=index vm=vm />
                        </For>
                    </div>
                </section>

                <section class="stack-detail__chat">
                    <div class="chat__messages" node_ref=messages_container_ref>
                        <Show when=move || vm.transcript.with(|t| t.is_empty())>
                            <div class="chat__empty">"Ask anything about this stack."</div>
                        </Show>
                        <For
                            each=move || {
                                vm.transcript
                                    .with(|t| t.messages().iter().cloned().enumerate().collect::<Vec<_>>())
                            }
                            key=|(i, _)| *i
                            let:item
                        >
                            <div
                                class="chat__message"
                                class:chat__message--user=item.1.role == ChatRole::User
                                class:chat__message--ai=item.1.role == ChatRole::Ai
                            >
                                {item.1.content.clone()}
                            </div>
                        </For>
                    </div>
                    <Flex class="chat__composer" gap=FlexGap::Small align=FlexAlign::Center>
                        <input
                            class="chat__input"
                            placeholder="Ask AI a question..."
                            prop:value=move || vm.chat_input.get()
                            on:input=move |ev| vm.chat_input.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    handle_send();
                                }
                            }
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| handle_send()
                        >
                            {icon("send")}
                        </Button>
                    </Flex>
                </section>
            </div>
        </div>
    }
}
