//! Главный экран: заголовок, subtitle с эффектом scramble, кнопка создания
//! стека и дашборд ниже.

use super::create_modal::CreateStackModal;
use super::dashboard::StackDashboard;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::shared::scramble::{Scramble, SCRAMBLE_TICK_MS};
use crate::shared::timers::ScopedInterval;
use leptos::prelude::*;

const SUBTITLE: &str = "From chaos to clarity.";

fn random_index(len: usize) -> usize {
    (js_sys::Math::random() * len as f64) as usize
}

#[component]
pub fn MainView() -> impl IntoView {
    let ctx = use_app_context();
    let subtitle = RwSignal::new(SUBTITLE.to_string());
    let scramble = StoredValue::new(Scramble::new(SUBTITLE));
    let ticker = ScopedInterval::new();

    // Запуск при монтировании и повтор при наведении
    let run_scramble = move || {
        scramble.update_value(|s| s.restart());
        subtitle.set(scramble.with_value(|s| s.frame(random_index)));
        ticker.start(SCRAMBLE_TICK_MS, move || {
            let running = scramble.try_update_value(|s| s.advance()).unwrap_or(false);
            if let Some(frame) = scramble.try_with_value(|s| s.frame(random_index)) {
                subtitle.try_set(frame);
            }
            if !running {
                ticker.stop();
            }
        });
    };

    run_scramble();

    view! {
        <div class="main-view">
            <section class="hero">
                <h1 class="hero__title">
                    <span>"Scatter Now."</span>
                    <span class="hero__title--muted">"Think later."</span>
                </h1>
                <p class="hero__subtitle" on:mouseenter=move |_| run_scramble()>
                    {move || subtitle.get()}
                </p>
                <button
                    class="hero__add"
                    title="Create stack"
                    on:click=move |_| ctx.open_create_modal()
                >
                    {icon("plus")}
                </button>
                <div class="hero__scroll-hint">
                    <span>"Scroll"</span>
                    {icon("chevron-down")}
                </div>
            </section>

            <StackDashboard />

            <Show when=move || ctx.create_open.get()>
                <CreateStackModal />
            </Show>
        </div>
    }
}
