// src/report/indicator.rs

//! The bouncing activity marker drawn inside the progress brackets.

/// Number of cells in the animation frame.
pub const INDICATOR_WIDTH: usize = 3;

const ACTIVE: char = '*';
const BLANK: char = ' ';

/// Bounce state: a marker position in `0..INDICATOR_WIDTH` and a direction.
///
/// Each [`Indicator::advance`] moves the marker one cell, turning around at
/// either end: `0, 1, 2, 1, 0, 1, 2, ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    index: usize,
    increasing: bool,
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator {
    pub fn new() -> Self {
        Self {
            index: 0,
            increasing: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_increasing(&self) -> bool {
        self.increasing
    }

    pub fn advance(&mut self) {
        if self.increasing && self.index == INDICATOR_WIDTH - 1 {
            self.increasing = false;
        } else if !self.increasing && self.index == 0 {
            self.increasing = true;
        }

        if self.increasing {
            self.index += 1;
        } else {
            self.index -= 1;
        }
    }

    /// The frame buffer: one active cell, blanks elsewhere.
    pub fn render(&self) -> String {
        (0..INDICATOR_WIDTH)
            .map(|i| if i == self.index { ACTIVE } else { BLANK })
            .collect()
    }
}
