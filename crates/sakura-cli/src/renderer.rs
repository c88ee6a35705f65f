//! Terminal rendering for markdown output
//!
//! Rich output goes through termimad; `--no-color` writes the markdown
//! unchanged.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Magenta);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkMagenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_on(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    /// Render markdown text to `out`
    pub fn render_on<W: Write>(&self, out: &mut W, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            write!(out, "{markdown}")?;
            return Ok(());
        }
        for line in markdown.lines() {
            // Headers keep their hash marks
            if line.starts_with('#') {
                writeln!(out, "\x1b[35m{line}\x1b[0m")?;
            } else {
                self.skin.write_inline_on(out, line)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
