//! Таймеры, привязанные к времени жизни компонента.
//!
//! Хэндлы `gloo_timers` отменяют таймер при `drop`. Здесь они хранятся в
//! `StoredValue::new_local` текущего владельца, а `on_cleanup` очищает
//! хранилище, поэтому после размонтирования компонента ни один колбэк
//! не сработает.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Источник таймеров. Возвращаемый хэндл отменяет таймер при `drop`.
pub trait TimerBackend: 'static {
    type Interval: 'static;
    type Timeout: 'static;

    fn interval(millis: u32, tick: impl FnMut() + 'static) -> Self::Interval;
    fn timeout(millis: u32, callback: impl FnOnce() + 'static) -> Self::Timeout;
}

/// `setInterval` / `setTimeout` браузера
pub struct BrowserTimers;

impl TimerBackend for BrowserTimers {
    type Interval = Interval;
    type Timeout = Timeout;

    fn interval(millis: u32, tick: impl FnMut() + 'static) -> Interval {
        Interval::new(millis, tick)
    }

    fn timeout(millis: u32, callback: impl FnOnce() + 'static) -> Timeout {
        Timeout::new(millis, callback)
    }
}

/// Повторяющийся таймер. Повторный `start` отменяет предыдущий.
pub struct ScopedInterval<B: TimerBackend = BrowserTimers> {
    handle: StoredValue<Option<B::Interval>, LocalStorage>,
    _backend: PhantomData<fn() -> B>,
}

impl<B: TimerBackend> Clone for ScopedInterval<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: TimerBackend> Copy for ScopedInterval<B> {}

impl ScopedInterval {
    /// Создаётся внутри компонента-владельца
    pub fn new() -> Self {
        Self::with_backend()
    }
}

impl Default for ScopedInterval {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: TimerBackend> ScopedInterval<B> {
    pub fn with_backend() -> Self {
        let handle = StoredValue::new_local(None::<B::Interval>);
        on_cleanup(move || {
            handle.try_update_value(|slot| slot.take());
        });
        Self {
            handle,
            _backend: PhantomData,
        }
    }

    pub fn start(&self, millis: u32, tick: impl FnMut() + 'static) {
        let interval = B::interval(millis, tick);
        // Предыдущий таймер отменяется при drop
        self.handle.try_update_value(|slot| slot.replace(interval));
    }

    pub fn stop(&self) {
        self.handle.try_update_value(|slot| slot.take());
    }
}

struct PendingTimeouts<H> {
    next_id: u64,
    handles: HashMap<u64, H>,
}

impl<H> Default for PendingTimeouts<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            handles: HashMap::new(),
        }
    }
}

/// Набор отложенных одноразовых колбэков владельца.
///
/// Хранятся только ещё не сработавшие хэндлы.
pub struct ScopedTimeouts<B: TimerBackend = BrowserTimers> {
    pending: StoredValue<PendingTimeouts<B::Timeout>, LocalStorage>,
    _backend: PhantomData<fn() -> B>,
}

impl<B: TimerBackend> Clone for ScopedTimeouts<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: TimerBackend> Copy for ScopedTimeouts<B> {}

impl ScopedTimeouts {
    pub fn new() -> Self {
        Self::with_backend()
    }
}

impl Default for ScopedTimeouts {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: TimerBackend> ScopedTimeouts<B> {
    pub fn with_backend() -> Self {
        let pending = StoredValue::new_local(PendingTimeouts::<B::Timeout>::default());
        on_cleanup(move || {
            pending.try_update_value(|p| p.handles.clear());
        });
        Self {
            pending,
            _backend: PhantomData,
        }
    }

    pub fn schedule(&self, millis: u32, callback: impl FnOnce() + 'static) {
        let Some(id) = self.pending.try_update_value(|p| {
            p.next_id += 1;
            p.next_id
        }) else {
            return;
        };

        let pending = self.pending;
        let timeout = B::timeout(millis, move || {
            pending.try_update_value(|p| p.handles.remove(&id));
            callback();
        });
        self.pending
            .try_update_value(|p| p.handles.insert(id, timeout));
    }
}
