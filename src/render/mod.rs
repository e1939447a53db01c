//! Markup rendering pipeline.
//!
//! Renderers aggregate bottom-up: element renderers produce fragments, the
//! side renderer sequences them in resolved order, the card renderer stacks
//! faces, and the collection renderer wraps the card sequence in the
//! container shell. Every stage is a pure function of (settings, cards); a
//! render pass holds no state and performs no I/O.

pub mod card;
pub mod collection;
pub mod element;
pub mod markup;
pub mod side;

// Re-export the pipeline entry points
pub use card::render_card;
pub use collection::render_collection;
pub use side::render_side;
