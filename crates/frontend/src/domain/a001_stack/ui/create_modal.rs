use crate::layout::global_context::use_app_context;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Окно создания стека. Пустое имя отклоняет `StackStore`, ошибка
/// показывается под полем ввода.
#[component]
pub fn CreateStackModal() -> impl IntoView {
    let ctx = use_app_context();
    let name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let confirm = move || match ctx.create_stack(&name.get_untracked()) {
        Ok(_) => {
            name.set(String::new());
            error.set(None);
            ctx.close_create_modal();
        }
        Err(e) => error.set(Some(e.to_string())),
    };

    let on_close = Callback::new(move |_| ctx.close_create_modal());

    view! {
        <Modal title="Create New Stack".to_string() on_close=on_close>
            <div class="create-stack">
                <Input
                    value=name
                    placeholder="Stack name"
                    attr:autofocus=true
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            confirm();
                        }
                    }
                />
                <Show when=move || error.get().is_some()>
                    <div class="create-stack__error">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| confirm()
                    >
                        "Create"
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}
