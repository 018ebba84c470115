use std::time::Duration;

use uuid::Uuid;

/// How long a slide stays up before the carousel advances on its own.
pub const AUTO_ADVANCE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderImage {
    pub id: Uuid,
    pub image_url: String,
    pub position: i32,
}

impl HeaderImage {
    /// Slots without an uploaded image are not shown on the storefront.
    pub fn has_image(&self) -> bool {
        !self.image_url.trim().is_empty()
    }
}

/// One move of the slider: the arrows, or the auto-advance timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselStep {
    Next,
    Prev,
    Tick,
}

/// Display index of the header slider.
///
/// Only the index moves; the carousel never touches order data. With no
/// slides every operation leaves the index at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Carousel over `len` slides, resumed at `index` (if still in range)
    /// and then moved by `step`.
    pub fn resume(len: usize, index: Option<usize>, step: Option<CarouselStep>) -> Self {
        let mut carousel = Self::new(len);
        if let Some(index) = index {
            carousel.go_to(index);
        }
        if let Some(step) = step {
            carousel.step(step);
        }
        carousel
    }

    pub fn step(&mut self, step: CarouselStep) -> usize {
        match step {
            CarouselStep::Next => self.next(),
            CarouselStep::Prev => self.prev(),
            CarouselStep::Tick => self.tick(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jumps straight to a slide. Out of range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }

    /// Timer-driven advance, fired every [`AUTO_ADVANCE`].
    pub fn tick(&mut self) -> usize {
        self.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_forward() {
        let mut c = Carousel::new(3);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn prev_wraps_backward() {
        let mut c = Carousel::new(3);
        assert_eq!(c.prev(), 2);
        assert_eq!(c.prev(), 1);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut c = Carousel::new(2);
        assert_eq!(c.go_to(1), 1);
        assert_eq!(c.go_to(5), 1);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut c = Carousel::new(0);
        assert!(c.is_empty());
        assert_eq!(c.tick(), 0);
        assert_eq!(c.prev(), 0);
        assert_eq!(c.go_to(0), 0);
    }

    #[test]
    fn resume_then_step() {
        assert_eq!(Carousel::resume(3, Some(2), Some(CarouselStep::Next)).index(), 0);
        assert_eq!(Carousel::resume(3, Some(0), Some(CarouselStep::Prev)).index(), 2);
        assert_eq!(Carousel::resume(3, Some(1), None).index(), 1);
        // A stale index from a longer slider restarts at the first slide.
        assert_eq!(Carousel::resume(2, Some(4), Some(CarouselStep::Tick)).index(), 1);
    }

    #[test]
    fn blank_slots_have_no_image() {
        let slot = HeaderImage {
            id: Uuid::new_v4(),
            image_url: " ".into(),
            position: 1,
        };
        assert!(!slot.has_image());
    }
}
