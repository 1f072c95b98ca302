use super::view_model::StackDetailsVm;
use crate::shared::icons::file_icon;
use contracts::domain::a002_stack_file::{FileEditor, FileKind};
use leptos::html;
use leptos::prelude::*;

/// Плитка файла. Двойной клик открывает редактирование имени:
/// blur или Enter фиксируют ввод, Escape отменяет.
#[component]
pub fn FileTile(index: usize, vm: StackDetailsVm) -> impl IntoView {
    let editor = RwSignal::new(FileEditor::Idle);
    let input_ref = NodeRef::<html::Input>::new();

    let kind = vm
        .files
        .with_untracked(|list| list.get(index).map(|f| FileKind::from_file_name(&f.file.name())))
        .unwrap_or(FileKind::Other);
    let display_name = move || {
        vm.files
            .with(|list| list.get(index).map(|f| f.display_name.clone()))
            .unwrap_or_default()
    };
    let thumbnail = move || vm.thumbnails.with(|t| t.get(&index).cloned());

    let begin = move || editor.update(|e| e.begin(&display_name()));
    let commit = move || {
        if let Some(new_name) = editor.try_update(|e| e.commit()).flatten() {
            vm.rename(index, &new_name);
        }
    };

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    view! {
        <div class="file-tile" title=display_name>
            <div class="file-tile__preview">
                {move || match thumbnail() {
                    Some(url) if kind == FileKind::Image => {
                        view! { <img class="file-tile__thumb" src=url alt="" /> }.into_any()
                    }
                    _ => file_icon(kind),
                }}
            </div>
            <Show
                when=move || editor.with(|e| e.is_editing())
                fallback=move || {
                    view! {
                        <div class="file-tile__name" on:dblclick=move |_| begin()>
                            {display_name}
                        </div>
                    }
                }
            >
                <input
                    class="file-tile__input"
                    node_ref=input_ref
                    prop:value=move || editor.with(|e| e.draft().unwrap_or_default().to_string())
                    on:input=move |ev| editor.update(|e| e.set_draft(event_target_value(&ev)))
                    on:blur=move |_| commit()
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => {
                                ev.prevent_default();
                                commit();
                            }
                            "Escape" => editor.update(|e| e.cancel()),
                            _ => {}
                        }
                    }
                />
            </Show>
            <div class="file-tile__kind">{kind.as_str()}</div>
        </div>
    }
}
