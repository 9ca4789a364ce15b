use crate::domain::{BoundingBox, Cell, LiveSet};

/// Characters drawn for live and dead positions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '\u{25A3}', // ▣
            dead: '\u{25A2}',  // ▢
        }
    }
}

impl Glyphs {
    pub const fn glyph(&self, alive: bool) -> char {
        if alive { self.alive } else { self.dead }
    }
}

/// Render with the default glyphs
pub fn print_cells(set: &LiveSet) -> String {
    render_with(set, &Glyphs::default())
}

/// One line per row of the bounding box, highest y first, x increasing left to right.
/// Every row ends with a newline; an empty set renders the single origin position.
pub fn render_with(set: &LiveSet, glyphs: &Glyphs) -> String {
    let BoundingBox { bottom_left, top_right } = BoundingBox::of(set);
    let mut out = String::new();

    for y in (bottom_left.y..=top_right.y).rev() {
        out.extend((bottom_left.x..=top_right.x).map(|x| glyphs.glyph(set.contains(Cell::new(x, y)))));
        out.push('\n');
    }
    out
}

/// Text for a whole run: every grid, its own trailing newline included, followed by three more
pub fn render_history(history: &[LiveSet], glyphs: &Glyphs) -> String {
    history
        .iter()
        .map(|set| render_with(set, glyphs) + "\n\n\n")
        .collect()
}
