/*
placement.rs

Copyright 2025 Hervé Quatremain

This file is part of Kidcomputer.

Kidcomputer is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Kidcomputer is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Kidcomputer. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Position and direction of a word in the grid.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Cell;

/// Direction in which a word is written.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    /// Left to right, along a row.
    Horizontal,

    /// Top to bottom, along a column.
    Vertical,
}

/// Origin cell and direction of a word.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// Pick a random placement so that a word of `len` letters stays inside a grid of
    /// `size` x `size` cells.
    ///
    /// `len` must be between 1 and `size`.
    pub fn random<R: Rng + ?Sized>(size: usize, len: usize, rng: &mut R) -> Self {
        let orientation: Orientation = if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let span: usize = size - len + 1;
        match orientation {
            Orientation::Horizontal => Self::new(
                rng.random_range(0..size),
                rng.random_range(0..span),
                orientation,
            ),
            Orientation::Vertical => Self::new(
                rng.random_range(0..span),
                rng.random_range(0..size),
                orientation,
            ),
        }
    }

    /// Return the cells that a word of `len` letters occupies, from its first letter.
    pub fn cells(&self, len: usize) -> Vec<Cell> {
        (0..len)
            .map(|i| match self.orientation {
                Orientation::Horizontal => Cell::new(self.row, self.col + i),
                Orientation::Vertical => Cell::new(self.row + i, self.col),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_cells() {
        let h = Placement::new(2, 3, Orientation::Horizontal);
        assert_eq!(
            h.cells(3),
            vec![Cell::new(2, 3), Cell::new(2, 4), Cell::new(2, 5)]
        );
        let v = Placement::new(2, 3, Orientation::Vertical);
        assert_eq!(v.cells(2), vec![Cell::new(2, 3), Cell::new(3, 3)]);
    }

    #[test]
    fn test_random_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_h = false;
        let mut seen_v = false;
        for len in 1..=10 {
            for _ in 0..200 {
                let p = Placement::random(10, len, &mut rng);
                match p.orientation {
                    Orientation::Horizontal => seen_h = true,
                    Orientation::Vertical => seen_v = true,
                }
                assert!(p.cells(len).iter().all(|c| c.row < 10 && c.col < 10));
            }
        }
        assert!(seen_h && seen_v);
    }

    #[test]
    fn test_full_length_word_starts_at_edge() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let p = Placement::random(10, 10, &mut rng);
            match p.orientation {
                Orientation::Horizontal => assert_eq!(p.col, 0),
                Orientation::Vertical => assert_eq!(p.row, 0),
            }
        }
    }
}
