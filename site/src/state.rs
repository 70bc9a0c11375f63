//! UI toggles behind the interactive sections.
//!
//! These are plain values; the components keep them in Leptos signals and
//! call the methods from event handlers.

/// Scroll offset (px) past which the nav bar gets its solid background.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Whether the page has scrolled far enough to show the nav shadow.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Mobile menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Flip open/closed (hamburger button).
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close (any link in the drawer).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Current visibility.
    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Index of the testimonial on display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    /// A carousel over `len` items, starting at the first.
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    /// Show item `index`, wrapping past the end. An empty carousel stays at 0.
    pub fn select(&mut self, index: usize) {
        self.active = if self.len == 0 { 0 } else { index % self.len };
    }

    /// Advance by one, wrapping to the first item.
    pub fn next(&mut self) {
        self.select(self.active + 1);
    }

    /// Step back by one, wrapping to the last item.
    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.active = (self.active + self.len - 1) % self.len;
    }

    /// Index on display.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Whether `index` is the one on display.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_flag_flips_after_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(800.0));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());

        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn carousel_selects_clicked_index() {
        let mut carousel = Carousel::new(4);
        assert_eq!(carousel.active(), 0);

        carousel.select(2);
        assert_eq!(carousel.active(), 2);
        assert!(carousel.is_active(2));
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn carousel_wraps_out_of_range_selection() {
        let mut carousel = Carousel::new(4);
        carousel.select(5);
        assert_eq!(carousel.active(), 1);
        carousel.select(4);
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn carousel_next_and_prev_wrap() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.active(), 2);
        carousel.next();
        assert_eq!(carousel.active(), 0);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        carousel.select(3);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.active(), 0);
    }
}
