//! Product discovery & inquiry core.
//!
//! Everything in this module is pure, synchronous state: no I/O, no
//! framework types. The route layer feeds it catalog records and site
//! settings and renders whatever it decides. This is the one part of the
//! storefront with real sequencing and edge-case policy, so it is kept
//! unit-testable in isolation.

pub mod description;
pub mod gallery;
pub mod inquiry;
pub mod settings;
pub mod variants;

pub use gallery::{Direction, Gallery, SWIPE_THRESHOLD_PX};
pub use settings::{ResolvedSettings, resolve};
pub use variants::SelectionState;
