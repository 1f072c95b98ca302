//! Эффект "scramble": целевая строка проявляется слева направо, ещё не
//! зафиксированные символы заменяются случайными знаками.
//!
//! Один символ фиксируется за [`TICKS_PER_CHAR`] тиков по [`SCRAMBLE_TICK_MS`] мс.
//! Счётчик целочисленный, поэтому эффект гарантированно завершается.

pub const SCRAMBLE_SYMBOLS: &str = "!@#$%^&*()_+{}[]|;:,.<>?";
pub const SCRAMBLE_TICK_MS: u32 = 30;
pub const TICKS_PER_CHAR: usize = 3;

#[derive(Debug, Clone)]
pub struct Scramble {
    target: Vec<char>,
    symbols: Vec<char>,
    ticks: usize,
}

impl Scramble {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.chars().collect(),
            symbols: SCRAMBLE_SYMBOLS.chars().collect(),
            ticks: 0,
        }
    }

    /// Текущий кадр. `pick(n)` должен вернуть индекс в диапазоне `0..n`.
    pub fn frame(&self, mut pick: impl FnMut(usize) -> usize) -> String {
        let locked = self.locked();
        self.target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if i < locked {
                    c
                } else {
                    let idx = pick(self.symbols.len()).min(self.symbols.len() - 1);
                    self.symbols[idx]
                }
            })
            .collect()
    }

    /// Перейти к следующему тику. Возвращает `true`, пока эффект не завершён.
    pub fn advance(&mut self) -> bool {
        if !self.is_done() {
            self.ticks += 1;
        }
        !self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.ticks >= self.target.len() * TICKS_PER_CHAR
    }

    pub fn restart(&mut self) {
        self.ticks = 0;
    }

    /// Количество уже зафиксированных символов
    fn locked(&self) -> usize {
        // index < ticks / 3  <=>  3 * index < ticks
        self.ticks.div_ceil(TICKS_PER_CHAR).min(self.target.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_fully_scrambled() {
        let s = Scramble::new("abc");
        let frame = s.frame(|_| 0);
        assert_eq!(frame, "!!!");
    }

    #[test]
    fn test_reveals_left_to_right() {
        let mut s = Scramble::new("From");
        s.advance();
        assert_eq!(s.frame(|_| 1), "F@@@");
        s.advance();
        s.advance();
        assert_eq!(s.frame(|_| 1), "F@@@");
        s.advance();
        assert_eq!(s.frame(|_| 1), "Fr@@");
    }

    #[test]
    fn test_terminates_after_three_ticks_per_char() {
        let target = "From chaos to clarity.";
        let mut s = Scramble::new(target);
        let mut ticks = 0;
        while s.advance() {
            ticks += 1;
            assert!(ticks < 1000, "scramble did not terminate");
        }
        assert!(s.is_done());
        assert_eq!(ticks + 1, target.chars().count() * TICKS_PER_CHAR);
        assert_eq!(s.frame(|_| 0), target);
    }

    #[test]
    fn test_restart_scrambles_again() {
        let mut s = Scramble::new("hi");
        while s.advance() {}
        s.restart();
        assert!(!s.is_done());
        assert_eq!(s.frame(|_| 0), "!!");
    }

    #[test]
    fn test_restart_mid_run_starts_over() {
        let mut s = Scramble::new("clarity");
        for _ in 0..7 {
            s.advance();
        }
        assert_eq!(s.frame(|_| 0), "cla!!!!");
        s.restart();
        assert_eq!(s.frame(|_| 0), "!!!!!!!");
        let mut ticks = 0;
        while s.advance() {
            ticks += 1;
        }
        assert_eq!(ticks + 1, 7 * TICKS_PER_CHAR);
    }

    #[test]
    fn test_out_of_range_pick_is_clamped() {
        let s = Scramble::new("x");
        assert_eq!(s.frame(|n| n + 10), "?");
    }

    #[test]
    fn test_empty_target_is_done() {
        let mut s = Scramble::new("");
        assert!(s.is_done());
        assert!(!s.advance());
        assert_eq!(s.frame(|_| 0), "");
    }
}
