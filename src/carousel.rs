use std::rc::Rc;

use yew::Reducible;

/// Milliseconds between automatic advances.
pub const ADVANCE_INTERVAL_MS: u32 = 5000;

/// Index into a fixed, non-empty list of slides. Every operation wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// `len` is clamped to at least one slide so the modulo never divides by zero.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Jumps to `index`; out-of-range requests leave the carousel as is.
    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Prev,
    Select(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        let next = match action {
            CarouselAction::Next => (*self).next(),
            CarouselAction::Prev => (*self).prev(),
            CarouselAction::Select(index) => (*self).select(index),
        };
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_from_zero_wraps_to_last() {
        assert_eq!(Carousel::new(3).prev().index(), 2);
    }

    #[test]
    fn next_wraps_to_zero() {
        let c = Carousel::new(3).next().next().next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn index_stays_in_range_for_mixed_sequences() {
        let mut c = Carousel::new(3);
        let ops = "nnpppnpnnnppppnpnpppnnnn";
        for op in ops.chars() {
            c = match op {
                'n' => c.next(),
                _ => c.prev(),
            };
            assert!(c.index() < 3);
        }
    }

    #[test]
    fn auto_advance_visits_every_slide_in_order() {
        let mut c = Rc::new(Carousel::new(3));
        let mut visited = vec![c.index()];
        let mut elapsed_ms = 0;
        while elapsed_ms < 15_000 {
            elapsed_ms += ADVANCE_INTERVAL_MS;
            c = c.reduce(CarouselAction::Next);
            visited.push(c.index());
        }
        assert_eq!(visited, [0, 1, 2, 0]);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let c = Carousel::new(3).select(1);
        assert_eq!(c.index(), 1);
        assert_eq!(c.select(3).index(), 1);
    }

    #[test]
    fn empty_list_is_treated_as_single_slide() {
        let c = Carousel::new(0);
        assert_eq!(c.len(), 1);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.prev().index(), 0);
    }

    #[test]
    fn reducer_applies_actions() {
        let c = Rc::new(Carousel::new(3));
        let c = c.reduce(CarouselAction::Prev);
        assert_eq!(c.index(), 2);
        let c = c.reduce(CarouselAction::Next);
        assert_eq!(c.index(), 0);
        let c = c.reduce(CarouselAction::Select(1));
        assert_eq!(c.index(), 1);
    }
}
