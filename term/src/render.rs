use std::io::{self, Write};

use shared::Snapshot;

/// Clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Characters drawn for live and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub live: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { live: '*', dead: ' ' }
    }
}

/// Output device for generations.
pub trait Render {
    fn render(&mut self, frame: &Snapshot) -> io::Result<()>;
}

/// Draws each frame as text on a fresh screen.
pub struct TerminalRenderer<W: Write> {
    out: W,
    glyphs: Glyphs,
    line: String,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, glyphs: Glyphs) -> Self {
        Self {
            out,
            glyphs,
            line: String::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Render for TerminalRenderer<W> {
    fn render(&mut self, frame: &Snapshot) -> io::Result<()> {
        let Glyphs { live, dead } = self.glyphs;
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        for row in frame.rows() {
            self.line.clear();
            self.line
                .extend(row.iter().map(|&alive| if alive { live } else { dead }));
            self.line.push('\n');
            self.out.write_all(self.line.as_bytes())?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Grid;

    #[test]
    fn renders_rows_after_clearing() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set_at(0, 0, true).unwrap();
        grid.set_at(2, 1, true).unwrap();

        let mut renderer = TerminalRenderer::new(Vec::new(), Glyphs::default());
        renderer.render(&grid.snapshot()).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, format!("{CLEAR_SCREEN}*  \n  *\n"));
    }

    #[test]
    fn uses_configured_glyphs() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set(1, true).unwrap();

        let glyphs = Glyphs { live: '#', dead: '.' };
        let mut renderer = TerminalRenderer::new(Vec::new(), glyphs);
        renderer.render(&grid.snapshot()).unwrap();
        renderer.render(&grid.snapshot()).unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, format!("{CLEAR_SCREEN}.#\n{CLEAR_SCREEN}.#\n"));
    }
}
