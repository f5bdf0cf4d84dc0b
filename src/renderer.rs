use std::io::{Stdout, Write};

use tracing::{debug, trace, warn};

use crate::format::display_width;
use crate::{Error, Format, TerminalWidth, WidthQuery};

/// A single-line progress bar redrawn in place on every update.
///
/// Each [`set`](Self::set) below `total` repaints the line behind a carriage
/// return. Reaching `total` erases the line instead of drawing a full bar,
/// after which the renderer ignores further updates.
///
/// ```rust,ignore
/// let mut bar = ProgressRenderer::new(200)?.format(Format::braille());
/// bar.set_text_suffix("fetching");
/// while bar.inc() {
///     std::thread::sleep(Duration::from_millis(10));
/// }
/// ```
///
/// The renderer holds no locks. Keep it with a single owner; sharing one
/// across threads needs external synchronisation.
pub struct ProgressRenderer<W: Write = Stdout> {
    format: Format,
    total: u64,
    progress: u64,
    width: usize,
    last_width: usize,
    show_numeric: bool,
    show_percent: bool,
    show_text_suffix: bool,
    text_suffix: String,
    out: W,
    query: Box<dyn WidthQuery>,
    finished: bool,
}

impl ProgressRenderer<Stdout> {
    /// Creates a bar counting to `total` on standard output.
    ///
    /// Defaults: [`Format::blocks`], 40 cells, numeric and percent shown,
    /// no text suffix.
    pub fn new(total: u64) -> Result<Self, Error> {
        Self::with_writer(total, std::io::stdout())
    }
}

impl<W: Write> std::fmt::Debug for ProgressRenderer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressRenderer")
            .field("format", &self.format)
            .field("total", &self.total)
            .field("progress", &self.progress)
            .field("width", &self.width)
            .field("last_width", &self.last_width)
            .field("show_numeric", &self.show_numeric)
            .field("show_percent", &self.show_percent)
            .field("show_text_suffix", &self.show_text_suffix)
            .field("text_suffix", &self.text_suffix)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<W: Write> ProgressRenderer<W> {
    /// Creates a bar counting to `total` that draws to `out`.
    pub fn with_writer(total: u64, out: W) -> Result<Self, Error> {
        if total == 0 {
            return Err(Error::ZeroTotal);
        }
        Ok(Self {
            format: Format::default(),
            total,
            progress: 0,
            width: 40,
            last_width: 0,
            show_numeric: true,
            show_percent: true,
            show_text_suffix: false,
            text_suffix: String::new(),
            out,
            query: Box::new(TerminalWidth),
            finished: false,
        })
    }

    /// Replaces the output sink, keeping all other state.
    pub fn writer<V: Write>(self, out: V) -> ProgressRenderer<V> {
        ProgressRenderer {
            format: self.format,
            total: self.total,
            progress: self.progress,
            width: self.width,
            last_width: self.last_width,
            show_numeric: self.show_numeric,
            show_percent: self.show_percent,
            show_text_suffix: self.show_text_suffix,
            text_suffix: self.text_suffix,
            out,
            query: self.query,
            finished: self.finished,
        }
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Bar width in display cells, excluding ends and suffixes.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn show_numeric(mut self, show: bool) -> Self {
        self.show_numeric = show;
        self
    }

    pub fn show_percent(mut self, show: bool) -> Self {
        self.show_percent = show;
        self
    }

    /// Sets the suffix text and turns it on.
    pub fn text_suffix(mut self, text: impl Into<String>) -> Self {
        self.text_suffix = text.into();
        self.show_text_suffix = true;
        self
    }

    /// Sets how the terminal width is looked up when clearing.
    pub fn width_query(mut self, query: impl WidthQuery + 'static) -> Self {
        self.query = Box::new(query);
        self
    }

    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    pub fn set_show_numeric(&mut self, show: bool) {
        self.show_numeric = show;
    }

    pub fn set_show_percent(&mut self, show: bool) {
        self.show_percent = show;
    }

    pub fn set_show_text_suffix(&mut self, show: bool) {
        self.show_text_suffix = show;
    }

    /// Stores the suffix text. It is only drawn while the suffix is shown.
    pub fn set_text_suffix(&mut self, text: impl Into<String>) {
        self.text_suffix = text.into();
    }

    pub fn progress(&self) -> u64 {
        self.progress
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Display width of the last painted line.
    pub fn last_width(&self) -> usize {
        self.last_width
    }

    /// Returns `true` once the bar reached `total` and was cleared.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Moves the bar to `to` and redraws it.
    ///
    /// Returns `true` while the bar is still running. Negative values are
    /// ignored and return `false`. Values at or past `total` clear the line
    /// and return `false`. Output errors are logged and otherwise ignored;
    /// use [`try_set`](Self::try_set) to observe them.
    pub fn set(&mut self, to: i64) -> bool {
        match self.try_set(to) {
            Ok(running) => running,
            Err(err) => {
                warn!(%err, progress = self.progress, "progress line not written");
                !self.finished
            }
        }
    }

    /// Advances the bar by one. See [`set`](Self::set).
    pub fn inc(&mut self) -> bool {
        match self.try_inc() {
            Ok(running) => running,
            Err(err) => {
                warn!(%err, progress = self.progress, "progress line not written");
                !self.finished
            }
        }
    }

    /// Like [`set`](Self::set) but reports output errors.
    ///
    /// State is updated before writing, so a failed write still counts.
    pub fn try_set(&mut self, to: i64) -> Result<bool, Error> {
        match u64::try_from(to) {
            Ok(to) => self.advance(to),
            Err(_) => {
                trace!(to, "negative progress ignored");
                Ok(false)
            }
        }
    }

    /// Like [`inc`](Self::inc) but reports output errors.
    pub fn try_inc(&mut self) -> Result<bool, Error> {
        self.advance(self.progress.saturating_add(1))
    }

    fn advance(&mut self, to: u64) -> Result<bool, Error> {
        if self.finished {
            return Ok(false);
        }
        let to = to.min(self.total);
        if to == self.total {
            debug!(total = self.total, "progress complete");
            self.finished = true;
            self.clear()?;
            return Ok(false);
        }
        self.progress = to;
        self.paint()?;
        Ok(true)
    }

    /// Builds the current line without the leading carriage return.
    ///
    /// The line is padded with spaces up to the width of the previous frame so
    /// that a shorter line fully covers a longer one.
    ///
    /// The fill always draws one more full glyph than the number of complete
    /// cells, so close to 100% a bar with a head or partial glyph can run a
    /// cell past `width`.
    pub fn frame(&self) -> String {
        let f = &self.format;
        let levels = f.levels() as u128;
        let progress = u128::from(self.progress);
        let total = u128::from(self.total);

        // Progress in sub-cell units: `width` cells with `levels` states each.
        let units = self.width as u128 * levels * progress / total;
        let percent = 100 * progress / total;

        let mut budget = self.width as isize;
        let mut line = String::with_capacity(self.width * 3 + self.text_suffix.len() + 32);

        line.push_str(f.left_end);
        for _ in 0..=units / levels {
            line.push_str(f.full());
            budget -= display_width(f.full()) as isize;
        }
        line.push_str(f.head);
        budget -= display_width(f.head) as isize;

        let rem = (units % levels) as usize;
        if rem > 0 {
            let glyph = f.fill[rem];
            line.push_str(glyph);
            budget -= display_width(glyph) as isize;
        }

        while budget > 0 {
            line.push_str(f.empty);
            budget -= 1;
        }

        if self.show_numeric {
            line.push_str(&format!(" {}/{}", self.progress, self.total));
        }
        if self.show_percent {
            line.push_str(&format!(" [{percent}%]"));
        }
        line.push_str(f.right_end);

        if self.show_text_suffix {
            line.push(' ');
            line.push_str(&self.text_suffix);
        }

        let drawn = display_width(&line);
        if drawn < self.last_width {
            line.extend(std::iter::repeat_n(' ', self.last_width - drawn));
        }
        line
    }

    fn paint(&mut self) -> Result<(), Error> {
        let line = self.frame();
        self.last_width = display_width(&line);
        trace!(
            progress = self.progress,
            total = self.total,
            width = self.last_width,
            "paint"
        );
        write!(self.out, "\r{line}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Blanks the line and leaves the cursor at its start.
    ///
    /// Covers the whole terminal row when its width is known, otherwise the
    /// width of the last painted frame.
    pub fn clear(&mut self) -> Result<(), Error> {
        let columns = match self.query.columns() {
            Some(columns) if columns > 0 => columns,
            _ => {
                debug!(last_width = self.last_width, "terminal width unavailable");
                self.last_width
            }
        };
        write!(self.out, "\r{}\r", " ".repeat(columns))?;
        self.out.flush()?;
        Ok(())
    }
}
