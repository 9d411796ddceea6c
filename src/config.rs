/*
config.rs

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

//! Build-time settings.

pub const PKGNAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>"
);

/// Number of rows and columns of the word-search grid.
pub const GRID_SIZE: usize = 10;

/// Number of random placements tried for a word before giving up on it.
pub const MAX_PLACEMENT_TRIALS: usize = 100;

/// Number of wrong letters before the robot runs out of power.
pub const MAX_ROBOT_ERRORS: usize = 6;

/// Number of entries per scoreboard.
pub const BOARD_SIZE: usize = 10;
