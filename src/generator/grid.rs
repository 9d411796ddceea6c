/*
grid.rs

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

//! Square letter grid.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::placement::Placement;

/// Grid coordinates.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Square matrix of letters.
///
/// Cells are empty while the words are being placed. After [`Grid::fill`], every cell holds a
/// letter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cells, row by row.
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Return the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the coordinates are inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Return the letter at the given position, or None if the cell is empty or outside the
    /// grid.
    pub fn get(&self, cell: Cell) -> Option<char> {
        if self.contains(cell) {
            self.cells[cell.row * self.size + cell.col]
        } else {
            None
        }
    }

    fn set(&mut self, cell: Cell, letter: char) {
        if self.contains(cell) {
            self.cells[cell.row * self.size + cell.col] = Some(letter);
        }
    }

    /// Whether the word can be written at the given placement.
    ///
    /// Every cell the word would use must be inside the grid, and be either empty or already
    /// hold the same letter.
    pub fn fits(&self, placement: &Placement, word: &[char]) -> bool {
        placement
            .cells(word.len())
            .iter()
            .zip(word)
            .all(|(cell, letter)| {
                self.contains(*cell)
                    && match self.get(*cell) {
                        Some(c) => c == *letter,
                        None => true,
                    }
            })
    }

    /// Write the word at the given placement.
    pub fn write(&mut self, placement: &Placement, word: &[char]) {
        for (cell, letter) in placement.cells(word.len()).iter().zip(word) {
            self.set(*cell, *letter);
        }
    }

    /// Read the letters along a list of cells.
    pub fn read(&self, cells: &[Cell]) -> Option<Vec<char>> {
        cells.iter().map(|c| self.get(*c)).collect()
    }

    /// Put a random letter from the alphabet in every empty cell.
    pub fn fill<R: Rng + ?Sized>(&mut self, alphabet: &[char], rng: &mut R) {
        if alphabet.is_empty() {
            return;
        }
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = Some(alphabet[rng.random_range(0..alphabet.len())]);
        }
    }

    /// Whether every cell holds a letter.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Return the grid as rows of letters. Empty cells are returned as spaces.
    pub fn rows(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|c| c.unwrap_or(' ')).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::placement::Orientation;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_write_and_read() {
        let mut grid = Grid::new(5);
        let p = Placement::new(1, 0, Orientation::Horizontal);
        grid.write(&p, &chars("CAT"));
        assert_eq!(grid.get(Cell::new(1, 2)), Some('T'));
        assert_eq!(grid.read(&p.cells(3)), Some(chars("CAT")));
        assert_eq!(grid.get(Cell::new(0, 0)), None);
        assert_eq!(grid.get(Cell::new(7, 0)), None);
    }

    #[test]
    fn test_fits_on_shared_letter_only() {
        let mut grid = Grid::new(5);
        grid.write(&Placement::new(1, 0, Orientation::Horizontal), &chars("CAT"));

        // "BAT" down column 1 crosses "CAT" on the shared "A"
        assert!(grid.fits(&Placement::new(0, 1, Orientation::Vertical), &chars("BAT")));

        // "DOG" down column 1 would overwrite the "A"
        assert!(!grid.fits(&Placement::new(0, 1, Orientation::Vertical), &chars("DOG")));

        // Out of bounds
        assert!(!grid.fits(&Placement::new(0, 3, Orientation::Horizontal), &chars("DOG")));
    }

    #[test]
    fn test_fill_leaves_words_intact() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(4);
        let p = Placement::new(3, 0, Orientation::Horizontal);
        grid.write(&p, &chars("WORD"));
        assert!(!grid.is_complete());
        grid.fill(&chars("XYZ"), &mut rng);
        assert!(grid.is_complete());
        assert_eq!(grid.read(&p.cells(4)), Some(chars("WORD")));
        for row in &grid.rows()[..3] {
            assert!(row.iter().all(|c| "XYZ".contains(*c)));
        }
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2);
        grid.write(&Placement::new(0, 0, Orientation::Horizontal), &chars("AB"));
        grid.write(&Placement::new(1, 0, Orientation::Horizontal), &chars("CD"));
        assert_eq!(grid.to_string(), "A B\nC D\n");
    }
}
