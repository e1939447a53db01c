//! Output adapters for the two consuming contexts.
//!
//! The editor preview and the page output are separate sinks on the host
//! side, but both funnel through the one collection renderer; each adapter is
//! only responsible for moving host data in and the markup string out.

pub mod editor;
pub mod page;

pub use editor::render_preview;
pub use page::render_page;
