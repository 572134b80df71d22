use std::io::{self, stdout, Write};

/// A screen sized buffer of characters, drawn all at once.
pub struct Canvas {
    lines: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Fills the terminal, minus the last line kept for the status.
    pub fn from_screen() -> io::Result<Self> {
        let (width, height) = termion::terminal_size()?;
        Ok(Self::new(width as usize, height.saturating_sub(1) as usize))
    }

    pub fn new(width: usize, height: usize) -> Self {
        let lines = vec![vec![' '; width]; height];
        Self {
            height,
            lines,
            width,
        }
    }

    /// Paints every position `f` returns a character for.
    pub fn layer(&mut self, f: impl Fn(usize, usize) -> Option<char>) {
        for row in 0..self.height {
            for col in 0..self.width {
                if let Some(char) = f(row, col) {
                    self.lines[row][col] = char;
                }
            }
        }
    }

    pub fn render(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.iter().collect()).collect()
    }

    pub fn display(&self, status: &str) -> io::Result<()> {
        let mut out = stdout().lock();
        write!(out, "{}", termion::clear::All)?;
        for (index, line) in self.render().iter().enumerate() {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            write!(out, "{goto}{line}")?;
        }
        let goto = termion::cursor::Goto(1, self.height as u16 + 1);
        let status: String = status.chars().take(self.width).collect();
        write!(out, "{goto}{status}")?;
        out.flush()
    }
}

#[test]
fn test_layer() {
    let mut canvas = Canvas::new(4, 2);
    canvas.layer(|row, col| (row == col).then_some('#'));
    canvas.layer(|row, col| (row == 1 && col == 3).then_some('.'));
    assert_eq!(canvas.render(), vec!["#   ", " # ."]);
}
