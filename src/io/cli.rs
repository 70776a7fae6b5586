//! Command-line interface for rendering a knot lattice at a chosen depth and scale

use crate::algorithm::compositor::{KnotCompositor, RenderParams, Rendering};
use crate::algorithm::tiling::TilingStrategy;
use crate::io::configuration::{DEFAULT_DEPTH, DEFAULT_PREVIEW_COLUMNS, DEFAULT_SCALE};
use crate::io::error::Result;
use crate::io::preview::write_preview;
use crate::io::progress::RenderProgress;
use crate::spatial::palette::{ColorOverride, Palette};
use clap::Parser;
use log::info;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "knotwork")]
#[command(
    author,
    version,
    about = "Render endless-knot tiles stitched along a Hilbert curve"
)]
/// Command-line arguments for the knot renderer
pub struct Cli {
    /// Hilbert curve recursion depth (2^depth tiles per side)
    #[arg(short, long, default_value_t = DEFAULT_DEPTH, allow_negative_numbers = true)]
    pub depth: i64,

    /// Device pixels per motif cell
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// How tiles are put onto the board
    #[arg(long, value_enum, default_value_t = TilingStrategy::Auto)]
    pub strategy: TilingStrategy,

    /// Recolor a motif category, e.g. `~=#fc0` (repeatable)
    #[arg(long = "color", value_name = "GLYPH=HEX")]
    pub colors: Vec<ColorOverride>,

    /// Print a truecolor preview of the result to stdout
    #[arg(short, long)]
    pub preview: bool,

    /// Maximum preview width in terminal columns
    #[arg(short, long, default_value_t = DEFAULT_PREVIEW_COLUMNS)]
    pub columns: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default palette with any `--color` overrides applied
    pub fn palette(&self) -> Palette {
        Palette::default().with_overrides(&self.colors)
    }
}

/// Drives one render from parsed arguments
pub struct KnotRenderer {
    cli: Cli,
    progress: RenderProgress,
}

impl KnotRenderer {
    /// Create a renderer for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = RenderProgress::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Render, then optionally preview, according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameters fail validation, the render fails, or
    /// the preview cannot be written
    pub fn run(&self) -> Result<()> {
        let rendering = self.render()?;

        if self.cli.preview {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_preview(&rendering.image, self.cli.columns, &mut handle)?;
        }

        Ok(())
    }

    /// Render without previewing
    ///
    /// # Errors
    ///
    /// Returns an error if parameters fail validation or the render fails
    pub fn render(&self) -> Result<Rendering> {
        let start_time = Instant::now();
        let params = RenderParams::from_signed(self.cli.depth, self.cli.scale)?;
        let compositor = KnotCompositor::new(self.cli.palette())?.with_strategy(self.cli.strategy);

        let mut session = compositor.begin(params);
        self.progress.start(
            &format!("depth {} × {}", params.depth().get(), params.scale()),
            session.tile_rows(),
        );

        while session.stamp_next_row()? {
            self.progress.advance();
        }

        let rendering = session.finish();
        self.progress.finish();
        let rendering = rendering?;

        info!(
            "{side}x{side} px with {strategy:?} tiling in {elapsed:?}",
            side = rendering.image.width(),
            strategy = rendering.strategy,
            elapsed = start_time.elapsed(),
        );

        Ok(rendering)
    }
}
