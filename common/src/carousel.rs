//! Per-card image carousel state.
//!
//! A carousel owns a single index into a non-empty image sequence and wraps
//! around in both directions. The image count is a [`NonZeroUsize`], so an
//! empty carousel cannot be constructed; [`Carousel::for_images`] is the
//! checked entry point for slices.

use std::num::NonZeroUsize;

use thiserror::Error;

/// Delay between automatic advances while the carousel is not hovered.
pub const AUTO_ADVANCE_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one image")]
    Empty,
    #[error("image index {index} is out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: NonZeroUsize,
    current: usize,
}

impl Carousel {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { len, current: 0 }
    }

    pub fn for_images<T>(images: &[T]) -> Result<Self, CarouselError> {
        NonZeroUsize::new(images.len())
            .map(Self::new)
            .ok_or(CarouselError::Empty)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Navigation controls and indicators are only shown with two or more images.
    pub fn has_controls(&self) -> bool {
        self.len() > 1
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len();
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.len() - 1) % self.len();
        self.current
    }

    /// Jumps straight to `index`. Out-of-range indices leave the state untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<usize, CarouselError> {
        if index >= self.len() {
            return Err(CarouselError::IndexOutOfRange { index, len: self.len() });
        }
        self.current = index;
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::for_images(&vec![(); len]).unwrap()
    }

    #[test]
    fn empty_input_is_rejected() {
        let images: [&str; 0] = [];
        assert_eq!(Carousel::for_images(&images), Err(CarouselError::Empty));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut c = carousel(3);
        assert_eq!(c.prev(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn single_image_has_no_controls_and_stays_at_zero() {
        let mut c = carousel(1);
        assert!(!c.has_controls());
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert!(c.is_active(0));
    }

    #[test]
    fn jump_to_checks_range() {
        let mut c = carousel(4);
        assert_eq!(c.jump_to(3), Ok(3));
        assert_eq!(
            c.jump_to(4),
            Err(CarouselError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn exactly_one_active_index() {
        let mut c = carousel(5);
        c.jump_to(2).unwrap();
        let active: Vec<_> = (0..c.len()).filter(|&i| c.is_active(i)).collect();
        assert_eq!(active, vec![2]);
    }
}
