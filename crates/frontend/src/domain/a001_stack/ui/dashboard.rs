//! Дашборд "Management": карточки стеков, анимированные прокруткой.
//!
//! `Scene` считает кадры, `CssRenderLayer` переводит их в CSS-трансформации.

use crate::layout::global_context::use_app_context;
use crate::shared::scene::{scroll_pages, CardFrame, RenderLayer, Scene};
use crate::shared::timers::ScopedInterval;
use leptos::html;
use leptos::prelude::*;

/// Пикселей на единицу сцены
const ZOOM: f64 = 80.0;
const FRAME_MS: u32 = 16;
/// Ограничение шага после простоя вкладки
const MAX_DT: f64 = 0.1;

struct CssRenderLayer {
    frames: RwSignal<Vec<CardFrame>>,
}

impl RenderLayer for CssRenderLayer {
    fn draw(&mut self, frames: &[CardFrame]) {
        self.frames.try_set(frames.to_vec());
    }
}

/// Y сцены направлен вверх, в CSS вниз
fn card_transform(frame: &CardFrame) -> String {
    format!(
        "translate3d(calc(-50% + {:.2}px), calc(-50% + {:.2}px), 0) scale({:.4})",
        frame.x * ZOOM,
        -frame.y * ZOOM,
        frame.scale
    )
}

fn scroll_progress(el: &web_sys::Element) -> f64 {
    let max = (el.scroll_height() - el.client_height()) as f64;
    if max <= 0.0 {
        0.0
    } else {
        (el.scroll_top() as f64 / max).clamp(0.0, 1.0)
    }
}

#[component]
pub fn StackDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let scroll_ref = NodeRef::<html::Div>::new();
    let frames = RwSignal::new(Vec::<CardFrame>::new());
    let ticker = ScopedInterval::new();

    let mut scene = Scene::new();
    let mut layer = CssRenderLayer { frames };
    let mut last = js_sys::Date::now();
    ticker.start(FRAME_MS, move || {
        let now = js_sys::Date::now();
        let dt = ((now - last) / 1000.0).clamp(0.0, MAX_DT);
        last = now;

        let total = ctx.stacks.try_with_untracked(|s| s.len()).unwrap_or(0);
        let (progress, viewport_height) = scroll_ref
            .get_untracked()
            .map(|el| (scroll_progress(&el), el.client_height() as f64 / ZOOM))
            .unwrap_or((0.0, 0.0));
        scene.render(&mut layer, total, progress, dt, viewport_height);
    });

    let is_empty = move || ctx.stacks.with(|s| s.is_empty());
    let track_height = move || {
        let pages = scroll_pages(ctx.stacks.with(|s| s.len()));
        format!("{}%", pages * 100)
    };

    let open_card = move |index: usize| {
        if let Some(id) = ctx
            .stacks
            .with_untracked(|s| s.stacks().get(index).map(|stack| stack.id))
        {
            ctx.open_stack(id);
        }
    };

    view! {
        <section class="dashboard">
            <h2 class="dashboard__title">"Management"</h2>
            <div
                class="dashboard__scroll"
                class:dashboard__scroll--locked=is_empty
                node_ref=scroll_ref
            >
                <div class="dashboard__track" style:height=track_height>
                    <div class="dashboard__stage">
                        <Show when=is_empty>
                            <div class="dashboard__empty">"Create a stack to see it here"</div>
                        </Show>
                        <For
                            each=move || 0..frames.with(|f| f.len())
                            key=|index| *index
                            let:index
                        >
                            <div
                                class="stack-card"
                                style:transform=move || {
                                    frames.with(|f| f.get(index).map(card_transform).unwrap_or_default())
                                }
                                on:click=move |_| open_card(index)
                            >
                                <span class="stack-card__name">
                                    {move || {
                                        ctx.stacks.with(|s| {
                                            s.stacks().get(index).map(|stack| stack.name.clone())
                                        })
                                    }}
                                </span>
                            </div>
                        </For>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_transform_flips_y_axis() {
        let frame = CardFrame {
            index: 0,
            x: 2.4,
            y: -1.5,
            scale: 0.5,
        };
        assert_eq!(
            card_transform(&frame),
            "translate3d(calc(-50% + 192.00px), calc(-50% + 120.00px), 0) scale(0.5000)"
        );
    }
}
