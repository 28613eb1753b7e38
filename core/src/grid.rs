use goban_protocol::{Coord, Coord2};

/// Pixel-space layout of the square board: `lines` intersections per axis,
/// spaced uniformly between the margins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoardGeometry {
    side: f64,
    margin: f64,
    lines: usize,
}

impl BoardGeometry {
    pub const fn new(side: f64, margin: f64, lines: usize) -> Self {
        Self { side, margin, lines }
    }

    pub const fn side(&self) -> f64 {
        self.side
    }

    pub const fn margin(&self) -> f64 {
        self.margin
    }

    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Distance between neighboring intersections.
    pub fn step(&self) -> f64 {
        (self.side - 2.0 * self.margin) / (self.lines as f64 - 1.0)
    }

    /// Pixel center of an intersection. Exact inverse of [`to_cell`] for
    /// integer coordinates, including off-board ones.
    ///
    /// [`to_cell`]: Self::to_cell
    pub fn to_px(&self, (x, y): Coord2) -> (f64, f64) {
        let step = self.step();
        (
            self.margin + x as f64 * step,
            self.margin + y as f64 * step,
        )
    }

    /// Nearest intersection to a pixel position. Never bounds-checked: callers
    /// treat out-of-range results as "outside the board".
    pub fn to_cell(&self, px: f64, py: f64) -> Coord2 {
        let step = self.step();
        (
            ((px - self.margin) / step).round() as Coord,
            ((py - self.margin) / step).round() as Coord,
        )
    }
}
