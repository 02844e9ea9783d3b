use super::grid::GridWalker;

/// Glyphs used when rendering a painted grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub filled: char,
    pub empty: char,
    pub unvisited: char,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            filled: '█',
            empty: '░',
            unvisited: ' ',
        }
    }
}

impl Palette {
    pub fn glyph(&self, cell: Option<i64>) -> char {
        match cell {
            Some(1) => self.filled,
            Some(0) => self.empty,
            _ => self.unvisited,
        }
    }
}

/// Renders the bounding box of written cells, one line per row, top row first.
pub fn render(grid: &GridWalker, palette: &Palette) -> String {
    grid.cells_as_rows()
        .into_iter()
        .map(|row| row.into_iter().map(|cell| palette.glyph(cell)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
