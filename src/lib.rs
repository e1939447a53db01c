//! Flipdeck: flip-card widget markup renderer.
//!
//! This library turns a widget settings object and an ordered card list into
//! the markup for a flip-card content widget. Its core is the element-order
//! resolver (free text in, total permutation out) and a single rendering
//! pipeline shared by both consuming contexts (the editor live preview and
//! the real page output), so the two always produce identical markup.

// Module declarations
pub mod cli;
pub mod constants;
pub mod models;
pub mod output;
pub mod parser;
pub mod render;
