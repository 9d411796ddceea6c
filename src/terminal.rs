/*
terminal.rs

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

//! Line-based terminal front-end.
//!
//! Player commands are read from the standard input by a background thread. The commands and
//! the clock ticks are both sent to the main loop through the same [`async_channel`] channel,
//! so that all the game state changes happen in the main thread.

use formatx::formatx;
use log::{debug, error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};

use kidcomputer::catalog::{self, COMPUTER_PARTS, Category, Entity, UiText};
use kidcomputer::find::{FindGame, FindOutcome};
use kidcomputer::game::{self, Outcome, Session};
use kidcomputer::generator::grid::Cell;
use kidcomputer::generator::word_search::{self, WordSearchGenerator};
use kidcomputer::highscores::{GameKind, HighScores, Score};
use kidcomputer::language::Language;
use kidcomputer::memory::{MemoryGame, MemoryOutcome};
use kidcomputer::narration::{AudioMap, ClipKind, Cue, LogNarrator, Narrator};
use kidcomputer::robot::{RobotGame, RobotOutcome};
use kidcomputer::runner::SessionRunner;
use kidcomputer::saver::highscores::SaverHighScores;
use kidcomputer::sorter::{SortOutcome, SorterGame};
use kidcomputer::ticker::Ticker;

use crate::cli_options::Args;

/// Clock refresh period.
const TICK: Duration = Duration::from_secs(1);

/// Messages processed by the main loop.
#[derive(Debug)]
enum Event {
    /// A line typed by the player.
    Line(String),

    /// Clock tick.
    Tick(u64),

    /// The standard input is closed.
    Closed,
}

/// Player command, common to all the games.
#[derive(Debug, PartialEq)]
enum Command {
    Quit,
    Restart,
    Language(Option<Language>),
    Pause,
    Resume,
    Help,
    Play(String),
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let first: &str = words.next()?;
        let cmd: Command = match first {
            "q" | "quit" | "exit" => Command::Quit,
            "restart" | "new" => Command::Restart,
            "lang" | "language" => Command::Language(words.next().and_then(Language::from_code)),
            "pause" => Command::Pause,
            "resume" => Command::Resume,
            "?" | "help" => Command::Help,
            _ => Command::Play(line.trim().to_string()),
        };
        Some(cmd)
    }
}

/// Parse "row col" (1-based) into a grid cell.
fn parse_cell(text: &str) -> Option<Cell> {
    let numbers: Vec<usize> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<usize>())
        .collect::<Result<_, _>>()
        .ok()?;
    match numbers[..] {
        [row, col] if row > 0 && col > 0 => Some(Cell::new(row - 1, col - 1)),
        _ => None,
    }
}

/// Parse a 1-based card or part number into an index.
fn parse_index(text: &str) -> Option<usize> {
    text.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// Start the thread that reads the player commands.
fn spawn_input(sender: async_channel::Sender<Event>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(l) => {
                    if sender.send_blocking(Event::Line(l)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Cannot read the standard input: {e}");
                    break;
                }
            }
        }
        debug!("End of input");
        let _ = sender.send_blocking(Event::Closed);
    });
}

fn prompt(text: &str) {
    print!("\r{text} > ");
    let _ = io::stdout().flush();
}

fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

fn elapsed_line(ui: &UiText, duration: Duration) -> String {
    formatx!(ui.elapsed, time = game::clock(duration)).unwrap_or_default()
}

/// Prefix right-to-left text with a RIGHT-TO-LEFT MARK so that terminals align it on the
/// right.
fn bidi(language: Language, text: &str) -> String {
    if language.is_rtl() {
        format!("\u{200F}{text}")
    } else {
        text.to_string()
    }
}

/// Return the display name of a part, or its identifier when the part is unknown.
fn part_name(entity_id: &str, language: Language) -> String {
    catalog::find(entity_id)
        .map(|e| e.name(language).to_string())
        .unwrap_or_else(|| entity_id.to_string())
}

/// Parse the side chosen in the sorter game.
fn parse_side(text: &str) -> Option<Category> {
    match text.trim().to_lowercase().as_str() {
        "1" | "i" | "in" | "input" | "e" | "entree" | "entrée" | "إدخال" => {
            Some(Category::Input)
        }
        "2" | "o" | "out" | "output" | "s" | "sortie" | "إخراج" => {
            Some(Category::Output)
        }
        _ => None,
    }
}

/// Render the grid with 1-based row and column numbers.
///
/// Selected letters are shown between brackets and found letters between parentheses.
fn render_grid(session: &Session) -> String {
    let grid = session.grid();
    let mut out: String = String::from("    ");
    for col in 1..=grid.size() {
        out.push_str(&format!("{col:^3}"));
    }
    out.push('\n');
    for (r, row) in grid.rows().iter().enumerate() {
        out.push_str(&format!("{:>3} ", r + 1));
        for (c, letter) in row.iter().enumerate() {
            let cell: Cell = Cell::new(r, c);
            if session.selection().contains(&cell) {
                out.push_str(&format!("[{letter}]"));
            } else if session.is_found_cell(cell) {
                out.push_str(&format!("({letter})"));
            } else {
                out.push_str(&format!(" {letter} "));
            }
        }
        out.push('\n');
    }
    out
}

fn render_words(session: &Session) -> String {
    let ui: &UiText = catalog::ui_text(session.language());
    let (found, total) = session.score();
    let mut out: String = format!(
        "{}  {}: {}\n",
        ui.words_to_find,
        ui.score,
        formatx!(ui.progress, found = found, total = total).unwrap_or_default()
    );
    for word in session.words() {
        let mark: &str = if word.found { "✓" } else { " " };
        out.push_str(&format!(" [{mark}] {}\n", word.display));
    }
    out
}

/// Print a puzzle and exit.
pub fn print_puzzle(args: &Args) -> u8 {
    let mut rng: StdRng = new_rng(args.seed);
    let puzzle = WordSearchGenerator::default().generate(
        &word_search::candidates(&COMPUTER_PARTS),
        args.language,
        &mut rng,
    );
    if args.json {
        match serde_json::to_string_pretty(&puzzle) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Cannot serialize the puzzle: {e}");
                return 1;
            }
        }
        return 0;
    }
    let ui: &UiText = catalog::ui_text(args.language);
    println!("{}\n", ui.word_search_title);
    print!("{}", puzzle.grid);
    println!("\n{}", ui.words_to_find);
    for word in &puzzle.words {
        println!(" - {}", word.display);
    }
    0
}

fn format_score(position: usize, score: &Score) -> String {
    let when: DateTime<Local> = DateTime::from(score.when);
    format!(
        "{position:>3}. {}  {:>4}  {}",
        game::clock(score.time),
        score.count,
        when.format("%Y-%m-%d %H:%M")
    )
}

/// Print the scoreboards and exit.
pub fn print_scores(args: &Args) -> u8 {
    let saver: SaverHighScores = SaverHighScores::new(args.data_dir());
    let highscores: HighScores = match saver.get_highscores() {
        Ok(Some(h)) => h,
        Ok(None) => HighScores::new(),
        Err(e) => {
            eprintln!("Cannot read {:?}: {e}", saver.path());
            return 1;
        }
    };
    if highscores.is_empty() {
        println!("No scores yet.");
        return 0;
    }
    for kind in GameKind::WITH_SCOREBOARD {
        for language in Language::ALL {
            if let Some(board) = highscores.get_score(kind, language) {
                println!("{kind} ({language})");
                for (i, score) in board.iter().enumerate() {
                    println!("{}", format_score(i + 1, score));
                }
            }
        }
    }
    0
}

/// Play the selected game until the player quits.
pub fn run(args: &Args) -> u8 {
    let (sender, receiver) = async_channel::unbounded::<Event>();
    spawn_input(sender.clone());

    let narrator: LogNarrator = LogNarrator::new(AudioMap::new(args.assets_dir.clone()));
    let mut rng: StdRng = new_rng(args.seed);

    if args.learn {
        return learn(args, narrator, receiver);
    }
    match args.game {
        GameKind::WordSearch => play_word_search(args, narrator, &mut rng, sender, receiver),
        GameKind::Memory => play_memory(args, narrator, &mut rng, sender, receiver),
        GameKind::Robot => play_robot(args, narrator, &mut rng, receiver),
        GameKind::Find => play_find(args, narrator, &mut rng, receiver),
        GameKind::Sorter => play_sorter(args, narrator, &mut rng, receiver),
    }
}

/// Render the description card of a part, with one of its facts.
fn render_part(entity: &Entity, language: Language, fact_index: usize) -> String {
    let ui: &UiText = catalog::ui_text(language);
    let mut out: String = format!("\n{}\n", bidi(language, entity.name(language)));
    out.push_str(&format!("{}\n", bidi(language, entity.description.get(language))));
    if let Some(fact) = entity.fact(language, fact_index) {
        out.push_str(&format!("{}\n", bidi(language, &format!("{} ★ {fact}", ui.fun_fact))));
    }
    out
}

/// Browse the parts: show their description and facts, and play the description clips.
fn learn(
    args: &Args,
    mut narrator: LogNarrator,
    receiver: async_channel::Receiver<Event>,
) -> u8 {
    let mut language: Language = args.language;
    let mut selected: Option<(&'static Entity, usize)> = None;

    let show = |language: Language| {
        let ui: &UiText = catalog::ui_text(language);
        println!("\n{}", bidi(language, ui.learn_title));
        for category in [Category::Input, Category::Processing, Category::Output] {
            for entity in catalog::by_category(category) {
                let number: usize = COMPUTER_PARTS
                    .iter()
                    .position(|e| e.id == entity.id)
                    .unwrap_or_default();
                println!(
                    "{:>3}. {} ({category})",
                    number + 1,
                    bidi(language, entity.name(language))
                );
            }
        }
        prompt("");
    };
    show(language);

    while let Ok(event) = receiver.recv_blocking() {
        let line: String = match event {
            Event::Tick(_) => continue,
            Event::Line(l) => l,
            Event::Closed => break,
        };
        match Command::parse(&line) {
            None | Some(Command::Pause) | Some(Command::Resume) | Some(Command::Restart) => (),
            Some(Command::Quit) => break,
            Some(Command::Help) => println!("part number | fact | lang [fr|en|ar] | quit"),
            Some(Command::Language(l)) => language = l.unwrap_or_else(|| language.next()),
            Some(Command::Play(text)) => {
                if matches!(text.as_str(), "f" | "fact") {
                    if let Some((entity, index)) = selected {
                        selected = Some((entity, index + 1));
                        print!("{}", render_part(entity, language, index + 1));
                    }
                } else if let Some(entity) =
                    parse_index(&text).and_then(|i| COMPUTER_PARTS.get(i))
                {
                    selected = Some((entity, 0));
                    print!("{}", render_part(entity, language, 0));
                    narrator.speak(entity.id, language, ClipKind::Description);
                } else {
                    println!("?");
                }
            }
        }
        show(language);
    }
    println!();
    0
}

fn play_find(
    args: &Args,
    mut narrator: LogNarrator,
    rng: &mut StdRng,
    receiver: async_channel::Receiver<Event>,
) -> u8 {
    let mut language: Language = args.language;
    let ids: Vec<String> = COMPUTER_PARTS.iter().map(|e| e.id.to_string()).collect();
    let mut find: FindGame = match FindGame::new(ids, rng) {
        Some(f) => f,
        None => {
            eprintln!("No part to find");
            return 1;
        }
    };

    let show = |find: &FindGame, language: Language| {
        let ui: &UiText = catalog::ui_text(language);
        println!("\n{}  {}: {}", bidi(language, ui.find_title), ui.score, find.score());
        for (i, id) in find.board().iter().enumerate() {
            println!("{:>3}. {}", i + 1, bidi(language, &part_name(id, language)));
        }
        prompt(&bidi(
            language,
            &format!("{} {}", ui.question, part_name(find.target(), language)),
        ));
    };
    narrator.cue(Cue::StartGame, language);
    narrator.speak(find.target(), language, ClipKind::Name);
    show(&find, language);

    while let Ok(event) = receiver.recv_blocking() {
        let ui: &UiText = catalog::ui_text(language);
        let line: String = match event {
            Event::Tick(_) => continue,
            Event::Line(l) => l,
            Event::Closed => break,
        };
        match Command::parse(&line) {
            None | Some(Command::Pause) | Some(Command::Resume) => (),
            Some(Command::Quit) => break,
            Some(Command::Help) => println!("part number | restart | lang [fr|en|ar] | quit"),
            Some(cmd @ (Command::Restart | Command::Language(_))) => {
                if let Command::Language(l) = cmd {
                    language = l.unwrap_or_else(|| language.next());
                }
                find.restart(rng);
                narrator.cue(Cue::StartGame, language);
                narrator.speak(find.target(), language, ClipKind::Name);
            }
            Some(Command::Play(text)) => {
                let index: Option<usize> = parse_index(&text);
                let outcome: FindOutcome = match index {
                    Some(i) => find.pick(i, rng),
                    None => FindOutcome::Ignored,
                };
                match outcome {
                    FindOutcome::Correct => {
                        narrator.cue(Cue::GoodAnswer, language);
                        println!("{}", bidi(language, ui.bravo));
                        narrator.speak(find.target(), language, ClipKind::Name);
                    }
                    FindOutcome::Wrong => {
                        narrator.cue(Cue::WrongAnswer, language);
                        println!("{}", bidi(language, ui.try_again));
                    }
                    FindOutcome::Ignored => println!("?"),
                }
            }
        }
        show(&find, language);
    }
    println!();
    0
}

fn play_sorter(
    args: &Args,
    mut narrator: LogNarrator,
    rng: &mut StdRng,
    receiver: async_channel::Receiver<Event>,
) -> u8 {
    let mut language: Language = args.language;
    let mut sorter: SorterGame = match SorterGame::from_catalog(rng) {
        Some(s) => s,
        None => {
            eprintln!("No part to sort");
            return 1;
        }
    };

    let show = |sorter: &SorterGame, language: Language| {
        let ui: &UiText = catalog::ui_text(language);
        println!("\n{}  {}: {}", bidi(language, ui.sorter_title), ui.score, sorter.score());
        println!("  1. {} ({})", ui.input_zone, ui.input_hint);
        println!("  2. {} ({})", ui.output_zone, ui.output_hint);
        prompt(&bidi(
            language,
            &part_name(&sorter.current().entity_id, language),
        ));
    };
    narrator.cue(Cue::StartGame, language);
    show(&sorter, language);

    while let Ok(event) = receiver.recv_blocking() {
        let ui: &UiText = catalog::ui_text(language);
        let line: String = match event {
            Event::Tick(_) => continue,
            Event::Line(l) => l,
            Event::Closed => break,
        };
        match Command::parse(&line) {
            None | Some(Command::Pause) | Some(Command::Resume) => (),
            Some(Command::Quit) => break,
            Some(Command::Help) => {
                println!("1 (input) | 2 (output) | restart | lang [fr|en|ar] | quit")
            }
            Some(cmd @ (Command::Restart | Command::Language(_))) => {
                if let Command::Language(l) = cmd {
                    language = l.unwrap_or_else(|| language.next());
                }
                sorter.restart(rng);
                narrator.cue(Cue::StartGame, language);
            }
            Some(Command::Play(text)) => {
                let outcome: SortOutcome = match parse_side(&text) {
                    Some(side) => sorter.choose(side, rng),
                    None => SortOutcome::Ignored,
                };
                match outcome {
                    SortOutcome::Correct => {
                        narrator.cue(Cue::GoodAnswer, language);
                        println!("{}", bidi(language, ui.bravo));
                    }
                    SortOutcome::Wrong => {
                        narrator.cue(Cue::WrongAnswer, language);
                        println!("{}", bidi(language, ui.try_again));
                    }
                    SortOutcome::Ignored => println!("?"),
                }
            }
        }
        show(&sorter, language);
    }
    println!();
    0
}

fn play_word_search(
    args: &Args,
    narrator: LogNarrator,
    rng: &mut StdRng,
    sender: async_channel::Sender<Event>,
    receiver: async_channel::Receiver<Event>,
) -> u8 {
    let session: Session = Session::new(
        word_search::candidates(&COMPUTER_PARTS),
        args.language,
        WordSearchGenerator::default(),
        rng,
    );
    let tick_sender = sender.clone();
    let mut runner: SessionRunner<LogNarrator> = SessionRunner::new(session, narrator)
        .with_saver(SaverHighScores::new(args.data_dir()))
        .with_clock(
            TICK,
            Arc::new(move |t| tick_sender.send_blocking(Event::Tick(t)).is_ok()),
        );
    drop(sender);
    runner.start();

    let show = |runner: &SessionRunner<LogNarrator>| {
        let ui: &UiText = catalog::ui_text(runner.session().language());
        println!("\n{}", ui.word_search_title);
        print!("{}", render_grid(runner.session()));
        print!("{}", render_words(runner.session()));
        prompt(&elapsed_line(ui, runner.session().elapsed()));
    };
    show(&runner);

    while let Ok(event) = receiver.recv_blocking() {
        let ui: &UiText = catalog::ui_text(runner.session().language());
        let line: String = match event {
            Event::Tick(_) => {
                if !runner.session().paused {
                    prompt(&elapsed_line(ui, runner.session().elapsed()));
                }
                continue;
            }
            Event::Line(l) => l,
            Event::Closed => break,
        };
        match Command::parse(&line) {
            None => (),
            Some(Command::Quit) => break,
            Some(Command::Restart) => runner.restart(rng),
            Some(Command::Language(l)) => {
                let language: Language = l.unwrap_or_else(|| runner.session().language().next());
                runner.set_language(language, rng);
            }
            Some(Command::Pause) => runner.session_mut().pause(),
            Some(Command::Resume) => runner.session_mut().resume(),
            Some(Command::Help) => {
                println!("row col | restart | lang [fr|en|ar] | pause | resume | quit");
            }
            Some(Command::Play(text)) => match parse_cell(&text) {
                Some(cell) => match runner.toggle(cell.row, cell.col) {
                    Outcome::Found { .. } => println!("{}", ui.bravo),
                    Outcome::Solved { duration, .. } => {
                        println!("{} {}", ui.congrats, ui.found_everything);
                        println!("{}", elapsed_line(ui, duration));
                        if let Some(p) = runner.last_position() {
                            println!("#{p}");
                        }
                        println!("{}: restart", ui.play_again);
                    }
                    Outcome::Ignored | Outcome::Pending => (),
                },
                None => println!("?"),
            },
        }
        show(&runner);
    }
    runner.shutdown();
    println!();
    0
}

fn play_memory(
    args: &Args,
    mut narrator: LogNarrator,
    rng: &mut StdRng,
    sender: async_channel::Sender<Event>,
    receiver: async_channel::Receiver<Event>,
) -> u8 {
    let mut language: Language = args.language;
    let ids: Vec<String> = COMPUTER_PARTS.iter().map(|e| e.id.to_string()).collect();
    let mut memory: MemoryGame = MemoryGame::new(ids, rng);
    let mut ticker: Option<Ticker> = Some(Ticker::forward(TICK, sender.clone(), Event::Tick));
    let mut highscores: HighScores = SaverHighScores::new(args.data_dir())
        .get_highscores()
        .ok()
        .flatten()
        .unwrap_or_default();

    let show = |memory: &MemoryGame, language: Language| {
        let ui: &UiText = catalog::ui_text(language);
        println!("\n{}", ui.memory_title);
        for (i, card) in memory.cards().iter().enumerate() {
            let face: String = if card.flipped || card.matched {
                part_name(&card.entity_id, language)
            } else {
                "?".to_string()
            };
            println!("{:>3}. {face}", i + 1);
        }
        prompt(&elapsed_line(ui, memory.elapsed()));
    };
    narrator.cue(Cue::StartGame, language);
    show(&memory, language);

    while let Ok(event) = receiver.recv_blocking() {
        let ui: &UiText = catalog::ui_text(language);
        let line: String = match event {
            Event::Tick(_) => {
                prompt(&elapsed_line(ui, memory.elapsed()));
                continue;
            }
            Event::Line(l) => l,
            Event::Closed => break,
        };
        match Command::parse(&line) {
            None | Some(Command::Pause) | Some(Command::Resume) => (),
            Some(Command::Quit) => break,
            Some(Command::Help) => println!("card number | restart | lang [fr|en|ar] | quit"),
            Some(cmd @ (Command::Restart | Command::Language(_))) => {
                if let Command::Language(l) = cmd {
                    language = l.unwrap_or_else(|| language.next());
                }
                memory.restart(rng);
                ticker = Some(Ticker::forward(TICK, sender.clone(), Event::Tick));
                narrator.cue(Cue::StartGame, language);
            }
            Some(Command::Play(text)) => {
                let index: Option<usize> = parse_index(&text);
                let outcome: MemoryOutcome = match index {
                    Some(i) => memory.flip(i),
                    None => MemoryOutcome::Ignored,
                };
                if let Some(i) = index
                    && outcome != MemoryOutcome::Ignored
                {
                    narrator.speak(&memory.cards()[i].entity_id, language, ClipKind::Name);
                }
                match outcome {
                    MemoryOutcome::Matched => {
                        narrator.cue(Cue::GoodAnswer, language);
                        println!("{}", ui.bravo);
                    }
                    MemoryOutcome::Mismatch => {
                        show(&memory, language);
                        println!();
                        println!("{}", ui.try_again);
                        memory.hide_mismatch();
                    }
                    MemoryOutcome::Solved { duration } => {
                        if let Some(mut t) = ticker.take() {
                            t.cancel();
                        }
                        narrator.cue(Cue::GameWon, language);
                        println!("{}", ui.congrats);
                        println!("{}", elapsed_line(ui, duration));
                        if highscores
                            .add_score(GameKind::Memory, language, duration, memory.moves())
                            .is_some()
                            && let Err(e) =
                                SaverHighScores::new(args.data_dir()).save_highscores(&highscores)
                        {
                            error!("Cannot save the high scores: {e}");
                        }
                    }
                    MemoryOutcome::FirstFlipped | MemoryOutcome::Ignored => (),
                }
            }
        }
        show(&memory, language);
    }
    drop(ticker);
    println!();
    0
}

fn play_robot(
    args: &Args,
    mut narrator: LogNarrator,
    rng: &mut StdRng,
    receiver: async_channel::Receiver<Event>,
) -> u8 {
    let mut language: Language = args.language;
    let mut robot: RobotGame = match RobotGame::new(&COMPUTER_PARTS, language, rng) {
        Some(r) => r,
        None => {
            eprintln!("No word to guess");
            return 1;
        }
    };

    let show = |robot: &RobotGame| {
        let ui: &UiText = catalog::ui_text(robot.language());
        println!("\n{}", ui.robot_title);
        if robot.power_percent() > 0 {
            println!(
                "{}",
                formatx!(ui.robot_power, power = robot.power_percent()).unwrap_or_default()
            );
        } else {
            println!("{}", ui.robot_offline);
        }
        let guessed: String = robot.guessed().iter().collect();
        println!("{}   [{guessed}]", robot.masked());
        prompt("");
    };
    narrator.cue(Cue::StartGame, language);
    show(&robot);

    while let Ok(event) = receiver.recv_blocking() {
        let ui: &UiText = catalog::ui_text(language);
        let line: String = match event {
            Event::Tick(_) => continue,
            Event::Line(l) => l,
            Event::Closed => break,
        };
        match Command::parse(&line) {
            None | Some(Command::Pause) | Some(Command::Resume) => (),
            Some(Command::Quit) => break,
            Some(Command::Help) => println!("letter | restart | lang [fr|en|ar] | quit"),
            Some(cmd @ (Command::Restart | Command::Language(_))) => {
                if let Command::Language(l) = cmd {
                    language = l.unwrap_or_else(|| language.next());
                }
                if let Some(r) = RobotGame::new(&COMPUTER_PARTS, language, rng) {
                    robot = r;
                    narrator.cue(Cue::StartGame, language);
                }
            }
            Some(Command::Play(text)) => {
                let outcome: RobotOutcome = match text.chars().next() {
                    Some(c) => robot.guess(c),
                    None => RobotOutcome::Ignored,
                };
                match outcome {
                    RobotOutcome::Hit => narrator.cue(Cue::GoodAnswer, language),
                    RobotOutcome::Miss => narrator.cue(Cue::WrongAnswer, language),
                    RobotOutcome::Won { duration } => {
                        narrator.cue(Cue::GameWon, language);
                        narrator.speak(robot.entity_id(), language, ClipKind::Name);
                        println!("{}", ui.bravo);
                        let saver: SaverHighScores = SaverHighScores::new(args.data_dir());
                        let mut highscores: HighScores =
                            saver.get_highscores().ok().flatten().unwrap_or_default();
                        if highscores
                            .add_score(GameKind::Robot, language, duration, robot.errors())
                            .is_some()
                            && let Err(e) = saver.save_highscores(&highscores)
                        {
                            error!("Cannot save the high scores: {e}");
                        }
                    }
                    RobotOutcome::Lost => {
                        narrator.cue(Cue::GameLost, language);
                        println!(
                            "{}",
                            formatx!(ui.robot_lost, word = robot.word()).unwrap_or_default()
                        );
                    }
                    RobotOutcome::Ignored => (),
                }
            }
        }
        show(&robot);
    }
    println!();
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use kidcomputer::generator::word_search::Candidate;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("3 4"), Some(Cell::new(2, 3)));
        assert_eq!(parse_cell("10,1"), Some(Cell::new(9, 0)));
        assert_eq!(parse_cell("0 4"), None);
        assert_eq!(parse_cell("3"), None);
        assert_eq!(parse_cell("a b"), None);
        assert_eq!(parse_index(" 3 "), Some(2));
        assert_eq!(parse_index("0"), None);
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(Command::parse("  "), None);
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
        assert_eq!(
            Command::parse("lang ar"),
            Some(Command::Language(Some(Language::Ar)))
        );
        assert_eq!(Command::parse("lang"), Some(Command::Language(None)));
        assert_eq!(Command::parse("2 5"), Some(Command::Play("2 5".to_string())));
    }

    #[test]
    fn test_render_words_shows_display_names() {
        let mut rng = StdRng::seed_from_u64(2);
        let monitor = catalog::find("monitor").unwrap();
        let session = Session::new(
            vec![Candidate::from_entity(monitor)],
            Language::Fr,
            WordSearchGenerator::default(),
            &mut rng,
        );
        assert_eq!(session.words()[0].word, "ECRAN");
        let out = render_words(&session);
        assert!(out.contains("Écran"));
        assert!(!out.contains("ECRAN"));
    }

    #[test]
    fn test_parse_side() {
        assert_eq!(parse_side("1"), Some(Category::Input));
        assert_eq!(parse_side("Sortie"), Some(Category::Output));
        assert_eq!(parse_side("3"), None);
    }

    #[test]
    fn test_render_part_rotates_facts() {
        let mouse = catalog::find("mouse").unwrap();
        let first = render_part(mouse, Language::En, 0);
        let second = render_part(mouse, Language::En, 1);
        assert!(first.contains(mouse.description.get(Language::En)));
        assert!(first.contains(mouse.fact(Language::En, 0).unwrap()));
        assert!(second.contains(mouse.fact(Language::En, 1).unwrap()));
        assert!(render_part(mouse, Language::Ar, 0).starts_with("\n\u{200F}"));
    }

    #[test]
    fn test_render_grid_marks_selection() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = Session::new(
            word_search::candidates(&COMPUTER_PARTS),
            Language::En,
            WordSearchGenerator::default(),
            &mut rng,
        );
        session.toggle_cell(0, 0);
        let out = render_grid(&session);
        assert_eq!(out.lines().count(), 11);
        assert!(out.lines().nth(1).unwrap().contains('['));
    }
}
