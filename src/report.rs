//! Human-readable status lines for each init step.
//!
//! Lines are written to any writer so tests can capture them. Emoji markers
//! are only emitted when the terminal can render them; see
//! [`crate::environment::locale_is_utf8`].

use std::io::{ErrorKind, Write};

use log::error;

/// Leading glyph identifying the kind of status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Install,
    Done,
    Skip,
    NextStep,
    Failure,
}

impl Marker {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Install => "📦",
            Self::Done => "✅",
            Self::Skip => "🔒",
            Self::NextStep => "🎉",
            Self::Failure => "❌",
        }
    }

    /// Render `text` behind this marker, or bare when `glyphs` is off.
    ///
    /// # Examples
    ///
    /// ```
    /// use match_svg::report::Marker;
    ///
    /// assert_eq!(Marker::Done.render(true, "Created bunfig.toml"), "✅ Created bunfig.toml");
    /// assert_eq!(Marker::Done.render(false, "Created bunfig.toml"), "Created bunfig.toml");
    /// ```
    #[must_use]
    pub fn render(self, glyphs: bool, text: &str) -> String {
        if glyphs {
            format!("{} {text}", self.glyph())
        } else {
            text.to_owned()
        }
    }
}

/// Writes status lines, tolerating a closed output stream.
///
/// Reporting is informational: write failures are logged rather than aborting
/// the run, and a broken pipe silences further output.
pub struct Reporter<W> {
    out: W,
    glyphs: bool,
    closed: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, glyphs: bool) -> Self {
        Self {
            out,
            glyphs,
            closed: false,
        }
    }

    /// Write one marked status line.
    pub fn line(&mut self, marker: Marker, text: &str) {
        let rendered = marker.render(self.glyphs, text);
        self.write(&rendered);
    }

    /// Write an empty separator line.
    pub fn blank(&mut self) {
        self.write("");
    }

    /// Flush buffered output, e.g. before a child process shares the terminal.
    pub fn flush(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.out.flush() {
            self.handle_error(&e);
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        if self.closed {
            return;
        }
        if let Err(e) = writeln!(self.out, "{text}") {
            self.handle_error(&e);
        }
    }

    fn handle_error(&mut self, err: &std::io::Error) {
        if err.kind() == ErrorKind::BrokenPipe {
            self.closed = true;
            return;
        }
        error!("error writing status line: {err}");
    }
}
