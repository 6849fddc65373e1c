//! Gallery navigation state machine.
//!
//! Owns the ordered image sequence for one product view: current index,
//! transition direction, and the gesture threshold for swipe paging. The
//! renderer only ever reads this state; all transitions are pure methods.

/// Minimum horizontal drag distance (pixels) required to page the gallery.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Which edge a transition animation enters from.
///
/// Purely presentational; carries no other semantic weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Per-view gallery state: `(images, active_index, direction)`.
///
/// Invariants after every transition: `images.len() >= 1` and
/// `active_index < images.len()`. A product without images gets a single
/// empty slot; rendering a generated placeholder for it is the caller's
/// concern.
#[derive(Debug, Clone)]
pub struct Gallery {
    images: Vec<String>,
    active_index: usize,
    direction: Direction,
}

impl Gallery {
    /// Build the gallery for a product view.
    ///
    /// The designated primary image comes first; every other distinct
    /// reference is appended in order, skipping duplicates of the primary
    /// (admin forms often repeat it in the images array). The index always
    /// starts at 0 — never carried over from a previous product.
    #[must_use]
    pub fn new(primary: Option<&str>, additional: &[String]) -> Self {
        let mut images: Vec<String> = Vec::with_capacity(additional.len() + 1);

        if let Some(primary) = primary.filter(|p| !p.is_empty()) {
            images.push(primary.to_string());
        }
        for image in additional {
            if !image.is_empty() && !images.iter().any(|seen| seen == image) {
                images.push(image.clone());
            }
        }

        if images.is_empty() {
            // Placeholder slot keeps the len >= 1 invariant structural.
            images.push(String::new());
        }

        Self {
            images,
            active_index: 0,
            direction: Direction::default(),
        }
    }

    /// The ordered image sequence.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Index of the image currently shown.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// The image currently shown (empty string for the placeholder slot).
    #[must_use]
    pub fn active_image(&self) -> &str {
        self.images
            .get(self.active_index)
            .map_or("", String::as_str)
    }

    /// Direction for the next transition animation.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the product has real images (vs. the placeholder slot).
    #[must_use]
    pub fn has_images(&self) -> bool {
        self.images.iter().any(|image| !image.is_empty())
    }

    /// Advance one image, wrapping at the end. No-op on a single image.
    pub fn next(&mut self) {
        if self.images.len() <= 1 {
            return;
        }
        self.active_index = (self.active_index + 1) % self.images.len();
        self.direction = Direction::Forward;
    }

    /// Retreat one image, wrapping at the start. No-op on a single image.
    pub fn previous(&mut self) {
        if self.images.len() <= 1 {
            return;
        }
        self.active_index = (self.active_index + self.images.len() - 1) % self.images.len();
        self.direction = Direction::Backward;
    }

    /// Jump straight to an index (thumbnail click). No wraparound; an
    /// out-of-range target is a programming error and clamps to the last
    /// valid index rather than panicking, since this state is presentational.
    pub fn go_to(&mut self, index: usize) {
        let clamped = index.min(self.images.len() - 1);
        self.direction = if clamped > self.active_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.active_index = clamped;
    }

    /// Apply a completed horizontal drag gesture.
    ///
    /// `delta = start - end`. Within the threshold nothing happens; past it
    /// the gallery pages exactly one step in the drag direction, however far
    /// the gesture traveled (no multi-page fling).
    pub fn swipe(&mut self, start_x: f64, end_x: f64) {
        let delta = start_x - end_x;
        if delta.abs() <= SWIPE_THRESHOLD_PX {
            return;
        }
        if delta > 0.0 {
            self.next();
        } else {
            self.previous();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    fn gallery_abc() -> Gallery {
        Gallery::new(Some("a.jpg"), &refs(&["b.jpg", "c.jpg"]))
    }

    #[test]
    fn test_init_primary_first_and_deduplicated() {
        let gallery = Gallery::new(Some("x.jpg"), &refs(&["y.jpg", "x.jpg", "z.jpg"]));
        assert_eq!(gallery.images(), refs(&["x.jpg", "y.jpg", "z.jpg"]));
        assert_eq!(gallery.active_index(), 0);
    }

    #[test]
    fn test_init_without_primary_keeps_order() {
        let gallery = Gallery::new(None, &refs(&["y.jpg", "z.jpg", "y.jpg"]));
        assert_eq!(gallery.images(), refs(&["y.jpg", "z.jpg"]));
    }

    #[test]
    fn test_init_no_images_yields_placeholder_slot() {
        let gallery = Gallery::new(None, &[]);
        assert_eq!(gallery.images().len(), 1);
        assert_eq!(gallery.active_image(), "");
        assert!(!gallery.has_images());
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut gallery = gallery_abc();
        gallery.next();
        gallery.next();
        gallery.next();
        assert_eq!(gallery.active_index(), 0);
        assert_eq!(gallery.direction(), Direction::Forward);
    }

    #[test]
    fn test_previous_from_zero_wraps_to_last() {
        let mut gallery = gallery_abc();
        gallery.previous();
        assert_eq!(gallery.active_index(), 2);
        assert_eq!(gallery.direction(), Direction::Backward);
    }

    #[test]
    fn test_single_image_steps_are_noops() {
        let mut gallery = Gallery::new(Some("a.jpg"), &[]);
        gallery.next();
        gallery.previous();
        assert_eq!(gallery.active_index(), 0);
        assert_eq!(gallery.direction(), Direction::Forward);
    }

    #[test]
    fn test_go_to_sets_direction_by_comparison() {
        let mut gallery = gallery_abc();
        gallery.go_to(2);
        assert_eq!(gallery.active_index(), 2);
        assert_eq!(gallery.direction(), Direction::Forward);

        gallery.go_to(1);
        assert_eq!(gallery.active_index(), 1);
        assert_eq!(gallery.direction(), Direction::Backward);
    }

    #[test]
    fn test_go_to_out_of_range_clamps() {
        let mut gallery = gallery_abc();
        gallery.go_to(99);
        assert_eq!(gallery.active_index(), 2);
    }

    #[test]
    fn test_swipe_within_threshold_is_noop() {
        let mut gallery = gallery_abc();
        gallery.swipe(100.0, 51.0); // delta = 49
        assert_eq!(gallery.active_index(), 0);
        gallery.swipe(100.0, 50.0); // delta = exactly 50, still within
        assert_eq!(gallery.active_index(), 0);
    }

    #[test]
    fn test_swipe_past_threshold_pages_one_step() {
        let mut gallery = gallery_abc();
        gallery.swipe(100.0, 49.0); // delta = 51, leftward drag -> next
        assert_eq!(gallery.active_index(), 1);
        assert_eq!(gallery.direction(), Direction::Forward);
    }

    #[test]
    fn test_swipe_far_past_threshold_still_one_step() {
        let mut gallery = gallery_abc();
        gallery.swipe(500.0, 0.0);
        assert_eq!(gallery.active_index(), 1);
    }

    #[test]
    fn test_swipe_negative_delta_pages_backward() {
        let mut gallery = gallery_abc();
        gallery.swipe(0.0, 80.0); // delta = -80, rightward drag -> previous
        assert_eq!(gallery.active_index(), 2);
        assert_eq!(gallery.direction(), Direction::Backward);
    }

    #[test]
    fn test_index_invariant_holds_through_transitions() {
        let mut gallery = gallery_abc();
        for step in 0..10 {
            if step % 3 == 0 {
                gallery.next();
            } else if step % 3 == 1 {
                gallery.previous();
            } else {
                gallery.go_to(step);
            }
            assert!(gallery.active_index() < gallery.images().len());
            assert!(!gallery.images().is_empty());
        }
    }
}
