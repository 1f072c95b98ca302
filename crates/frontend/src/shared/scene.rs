//! Математика сцены дашборда: раскладка карточек стеков и анимация,
//! управляемая прогрессом прокрутки.
//!
//! Отрисовка вынесена за трейт [`RenderLayer`], здесь нет зависимостей от DOM.

/// Расстояние между центрами карточек, в единицах сцены
pub const CARD_SPACING: f64 = 4.8;
/// Целевая позиция Y карточки после "подъёма"
pub const CARD_REST_Y: f64 = -1.5;
/// Начальная позиция Y новой карточки
pub const CARD_START_Y: f64 = -20.0;
/// Коэффициент затухания для масштаба и позиции
pub const CARD_LAMBDA: f64 = 4.0;
/// Коэффициент затухания смещения прокрутки
pub const SCROLL_LAMBDA: f64 = 2.0;

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Экспоненциальное сглаживание, не зависящее от частоты кадров
pub fn damp(current: f64, target: f64, lambda: f64, dt: f64) -> f64 {
    lerp(current, target, 1.0 - (-lambda * dt).exp())
}

/// Положение `offset` внутри отрезка `[from, from + distance]`, в `[0, 1]`
pub fn scroll_range(offset: f64, from: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return if offset >= from { 1.0 } else { 0.0 };
    }
    ((offset - from) / distance).clamp(0.0, 1.0)
}

/// Горизонтальная позиция карточки: равномерно, с центром в нуле
pub fn layout_x(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (index as f64 - (total as f64 - 1.0) / 2.0) * CARD_SPACING
}

/// Количество "страниц" прокрутки: без стеков прокручивать нечего
pub fn scroll_pages(total: usize) -> usize {
    if total > 0 {
        2
    } else {
        1
    }
}

/// Состояние одной карточки на текущем кадре
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

/// Потребитель кадров сцены
pub trait RenderLayer {
    fn draw(&mut self, frames: &[CardFrame]);
}

#[derive(Debug, Clone, Copy)]
struct CardState {
    y: f64,
    scale: f64,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            y: CARD_START_Y,
            scale: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    cards: Vec<CardState>,
    offset: f64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Продвинуть анимацию на `dt` секунд.
    ///
    /// `progress` - целевой прогресс прокрутки `[0, 1]`, `viewport_height` -
    /// высота видимой области в единицах сцены. Новые карточки стартуют
    /// из начального состояния, существующие сохраняют свои значения.
    pub fn advance(
        &mut self,
        total: usize,
        progress: f64,
        dt: f64,
        viewport_height: f64,
    ) -> Vec<CardFrame> {
        self.cards.resize_with(total, CardState::default);

        let target = if total == 0 { 0.0 } else { progress.clamp(0.0, 1.0) };
        self.offset = damp(self.offset, target, SCROLL_LAMBDA, dt);

        let target_scale = scroll_range(self.offset, 0.4, 0.4);
        let target_y = lerp(
            -viewport_height,
            CARD_REST_Y,
            scroll_range(self.offset, 0.3, 0.5),
        );

        self.cards
            .iter_mut()
            .enumerate()
            .map(|(index, card)| {
                card.scale = damp(card.scale, target_scale, CARD_LAMBDA, dt);
                card.y = damp(card.y, target_y, CARD_LAMBDA, dt);
                CardFrame {
                    index,
                    x: layout_x(index, total),
                    y: card.y,
                    scale: card.scale,
                }
            })
            .collect()
    }

    /// Продвинуть анимацию и передать кадр слою отрисовки
    pub fn render(
        &mut self,
        layer: &mut impl RenderLayer,
        total: usize,
        progress: f64,
        dt: f64,
        viewport_height: f64,
    ) {
        let frames = self.advance(total, progress, dt, viewport_height);
        layer.draw(&frames);
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}
