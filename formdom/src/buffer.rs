use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// One terminal cell. `continuation` marks the right half of a wide glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub continuation: bool,
}

const BLANK: Cell = Cell {
    symbol: ' ',
    fg: Rgb::new(255, 255, 255),
    bg: Rgb::new(0, 0, 0),
    style: TextStyle::new(),
    continuation: false,
};

impl Default for Cell {
    fn default() -> Self {
        BLANK
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a glyph over whatever background is already there.
    /// Returns the number of columns the glyph takes.
    pub fn put(&mut self, x: u16, y: u16, symbol: char, fg: Rgb, style: TextStyle) -> u16 {
        let width = char_width(symbol).max(1) as u16;
        let Some(cell) = self.get_mut(x, y) else {
            return width;
        };
        cell.symbol = symbol;
        cell.fg = fg;
        cell.style = style;
        cell.continuation = false;

        if width > 1 {
            if let Some(next) = self.get_mut(x + 1, y) {
                next.continuation = true;
            }
        }
        width
    }

    pub fn set_bg(&mut self, x: u16, y: u16, bg: Rgb) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.bg = bg;
        }
    }

    /// Characters of one row, for snapshot-style assertions.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.continuation)
            .map(|cell| cell.symbol)
            .collect()
    }

    /// Cells of `self` that differ from `previous`, with their positions.
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = usize::from(self.width.max(1));
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }
}
