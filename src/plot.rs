//! ASCII histogram rendering for distributions.

use crate::distribution::Distribution;
use std::io::{self, Write};

/// Default maximum bar width in glyphs. Leaves room for the index and
/// count columns on an 80-column terminal.
pub const DEFAULT_MAX_BAR_WIDTH: usize = 60;

/// Rendering options for the histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotOptions {
    /// Longest bar, in glyphs. When the largest count exceeds this, every
    /// bar scales down proportionally, always rounding down.
    pub max_bar_width: usize,
    /// Glyph drawn for each unit of (scaled) count.
    pub glyph: char,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            max_bar_width: DEFAULT_MAX_BAR_WIDTH,
            glyph: '#',
        }
    }
}

/// Render a distribution to stdout as one line per container.
///
/// Each line holds the container index right-aligned to the width of the
/// largest index, a bar of one glyph per unit of count, and the literal
/// count in parentheses. Bars are right-padded with spaces so the
/// parenthesized counts line up in a single column. An all-zero
/// distribution renders every container with an empty bar and `(0)`.
///
/// Yields no usable value; errors writing to stdout are discarded.
pub fn plot(distribution: &Distribution) {
    plot_with(distribution, &PlotOptions::default());
}

/// Render to stdout with explicit options; same output contract as [`plot`].
pub fn plot_with(distribution: &Distribution, options: &PlotOptions) {
    let stdout = io::stdout();
    let _ = write_plot_with(&mut stdout.lock(), distribution, options);
}

/// Write the histogram to a writer with default options.
pub fn write_plot<W: Write>(writer: &mut W, distribution: &Distribution) -> io::Result<()> {
    write_plot_with(writer, distribution, &PlotOptions::default())
}

/// Write the histogram to a writer.
pub fn write_plot_with<W: Write>(
    writer: &mut W,
    distribution: &Distribution,
    options: &PlotOptions,
) -> io::Result<()> {
    debug_assert!(distribution.container_count() > 0);

    let max_count = distribution.max_count();
    let index_width = (distribution.container_count() - 1).to_string().len();
    let bar_column = bar_length(max_count, max_count, options.max_bar_width);

    for (index, count) in distribution.iter() {
        let length = bar_length(count, max_count, options.max_bar_width);
        let mut bar = String::with_capacity(bar_column);
        for _ in 0..length {
            bar.push(options.glyph);
        }
        for _ in length..bar_column {
            bar.push(' ');
        }
        writeln!(writer, "{index:>index_width$} {bar} ({count})")?;
    }
    Ok(())
}

/// Bar length for a count: the count itself, or floor-scaled when the
/// largest count exceeds the configured width. A nonzero count may scale
/// to an empty bar; the parenthesized count still shows the true value.
fn bar_length(count: usize, max_count: usize, max_bar_width: usize) -> usize {
    if max_count <= max_bar_width {
        count
    } else {
        (count as u128 * max_bar_width as u128 / max_count as u128) as usize
    }
}
