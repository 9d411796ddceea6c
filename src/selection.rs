/*
selection.rs

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

//! Manage the cells that the player picked.
//!
//! The player taps letters one at a time, in any order. Tapping a selected letter again
//! removes it from the selection so that a wrong tap can be undone.

use serde::{Deserialize, Serialize};

use crate::generator::grid::Cell;

/// Cells picked by the player, in the order they were picked.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Selection {
    cells: Vec<Cell>,
}

impl Selection {
    /// Create an empty [`Selection`] object.
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Add the cell if it is not selected, remove it otherwise.
    ///
    /// Return the updated selection.
    pub fn toggle(&mut self, cell: Cell) -> &[Cell] {
        match self.cells.iter().position(|c| *c == cell) {
            Some(i) => {
                self.cells.remove(i);
            }
            None => self.cells.push(cell),
        }
        &self.cells
    }

    /// Unselect all the cells.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Return the selected cells in picking order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return the selected cells sorted along their row or column, or None if they do not form
    /// an unbroken horizontal or vertical line of at least two cells.
    pub fn line(&self) -> Option<Vec<Cell>> {
        if self.cells.len() < 2 {
            return None;
        }
        let first: Cell = self.cells[0];
        let mut sorted: Vec<Cell> = self.cells.clone();

        let positions: Vec<usize> = if self.cells.iter().all(|c| c.row == first.row) {
            sorted.sort_unstable_by_key(|c| c.col);
            sorted.iter().map(|c| c.col).collect()
        } else if self.cells.iter().all(|c| c.col == first.col) {
            sorted.sort_unstable_by_key(|c| c.row);
            sorted.iter().map(|c| c.row).collect()
        } else {
            return None;
        };

        if positions.windows(2).all(|w| w[1] == w[0] + 1) {
            Some(sorted)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(cells: &[(usize, usize)]) -> Selection {
        let mut s = Selection::new();
        for (r, c) in cells {
            s.toggle(Cell::new(*r, *c));
        }
        s
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut s = select(&[(0, 0), (0, 1)]);
        let before = s.clone();
        s.toggle(Cell::new(4, 4));
        s.toggle(Cell::new(4, 4));
        assert_eq!(s, before);

        s.toggle(Cell::new(0, 0));
        assert_eq!(s.cells(), &[Cell::new(0, 1)]);
    }

    #[test]
    fn test_single_cell_is_not_a_line() {
        assert_eq!(select(&[(3, 3)]).line(), None);
        assert_eq!(select(&[]).line(), None);
    }

    #[test]
    fn test_line_is_sorted_whatever_the_order() {
        let s = select(&[(2, 5), (2, 3), (2, 4)]);
        assert_eq!(
            s.line(),
            Some(vec![Cell::new(2, 3), Cell::new(2, 4), Cell::new(2, 5)])
        );
        let s = select(&[(6, 1), (4, 1), (5, 1)]);
        assert_eq!(
            s.line(),
            Some(vec![Cell::new(4, 1), Cell::new(5, 1), Cell::new(6, 1)])
        );
    }

    #[test]
    fn test_rejects_gaps_and_diagonals() {
        assert_eq!(select(&[(0, 0), (0, 2)]).line(), None);
        assert_eq!(select(&[(0, 0), (1, 1), (2, 2)]).line(), None);
        assert_eq!(select(&[(0, 0), (0, 1), (1, 1)]).line(), None);
    }
}
