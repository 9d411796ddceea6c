/*
main.rs

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

mod cli_options;
mod terminal;

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: cli_options::Args = cli_options::parse();

    let ret: u8 = if args.print {
        terminal::print_puzzle(&args)
    } else if args.scores {
        terminal::print_scores(&args)
    } else {
        terminal::run(&args)
    };
    ExitCode::from(ret)
}
