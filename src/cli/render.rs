//! Render command: payload file in, markup out.

use crate::parser::parse_payload;
use crate::render::render_collection;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Render a payload file to widget markup
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Path to the payload file (JSON or JSON5)
    #[arg(short, long, value_name = "FILE")]
    pub payload: PathBuf,

    /// Output path for the markup (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> Result<()> {
        let input = fs::read_to_string(&self.payload)
            .with_context(|| format!("Failed to read payload file: {}", self.payload.display()))?;

        let payload = parse_payload(&input)
            .with_context(|| format!("Failed to parse payload file: {}", self.payload.display()))?;

        tracing::info!(
            cards = payload.cards.len(),
            layout = payload.settings.layout_option.as_str(),
            "rendering widget"
        );

        let markup = render_collection(&payload.cards, &payload.settings);

        match &self.output {
            Some(path) => {
                fs::write(path, &markup)
                    .with_context(|| format!("Failed to write output file: {}", path.display()))?;
                println!("Rendered {} card(s) to: {}", payload.cards.len(), path.display());
            }
            None => println!("{markup}"),
        }

        Ok(())
    }
}
