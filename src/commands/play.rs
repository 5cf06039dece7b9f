//! Line-based interactive advisor
//!
//! Suggests guesses, reads the feedback for the word actually played and
//! prunes until solved. Reads commands from any `BufRead` so sessions can be
//! scripted.

use crate::core::{Observation, Pattern, Word};
use crate::output::formatters::{format_observation, format_score};
use crate::solver::{Game, ParallelMap, Phase, SolveError, Solver};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Candidates listed in full at or below this count
const LIST_LIMIT: usize = 10;

/// What the user asked for on one line
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Quit,
    New,
    Undo,
    Win,
    /// Feedback for the suggested guess
    Feedback(Observation),
    /// Feedback for a different word than suggested
    Played(Word, Observation),
}

fn parse_command(input: &str, length: usize) -> Result<Command, SolveError> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        "new" | "n" => return Ok(Command::New),
        "undo" | "u" => return Ok(Command::Undo),
        "win" | "correct" | "solved" => return Ok(Command::Win),
        _ => {}
    }

    if let Some((word, feedback)) = input.split_once(char::is_whitespace) {
        let word = Word::with_length(word, length)?;
        let observation = Observation::parse(feedback, length)?;
        return Ok(Command::Played(word, observation));
    }

    Ok(Command::Feedback(Observation::parse(&input, length)?))
}

/// Run the interactive loop until the user quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<P, R, W>(solver: &Solver<P>, mut input: R, out: &mut W) -> Result<()>
where
    P: ParallelMap,
    R: BufRead,
    W: Write,
{
    print_banner(out, solver.config().word_length)?;

    let length = solver.config().word_length;
    let mut game = solver.new_game();

    loop {
        if game.phase() == Phase::Solved {
            print_solved(&game, out)?;
            game = solver.new_game();
            writeln!(out, "\n🔄 New game started!\n")?;
        }

        let suggested = if game.phase() == Phase::Exhausted {
            writeln!(
                out,
                "\n❌ No candidates remain! Your feedback may be incorrect."
            )?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
            None
        } else {
            print_turn(&game, out)?
        };

        write!(out, "Feedback (G/Y/-, '<word> <feedback>', 'win', or command): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line, length) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "❌ {err}\n")?;
                continue;
            }
        };

        let (guess, observation) = match command {
            Command::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Command::New => {
                game = solver.new_game();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            Command::Undo => {
                match game.undo() {
                    Ok(()) => writeln!(out, "✓ Undone! Back to turn {}\n", game.turns() + 1)?,
                    Err(err) => writeln!(out, "{err}\n")?,
                }
                continue;
            }
            Command::Win => match suggested {
                Some(word) => (word, Observation::Pattern(Pattern::perfect(length))),
                None => continue,
            },
            Command::Feedback(observation) => match suggested {
                Some(word) => (word, observation),
                None => continue,
            },
            Command::Played(word, observation) => (word, observation),
        };

        if let Err(err) = game.observe(&guess, observation) {
            writeln!(out, "❌ {err}\n")?;
        }
    }
}

fn print_banner<W: Write>(out: &mut W, length: usize) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "{}", "  Wordle Advisor - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(62).bright_cyan())?;
    writeln!(out, "After each guess, enter the {length}-letter feedback pattern:\n")?;
    writeln!(out, "  - Use G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Use Y/y/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - Use -/_/⬜ for gray (not in word)")?;
    writeln!(out, "  - Prefix with the word if you played something else: 'crane gy---'")?;
    writeln!(out, "  - Or type 'win' if you got it right!\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n")?;
    Ok(())
}

/// Show the ranked guesses and return the top one
fn print_turn<P: ParallelMap, W: Write>(game: &Game<'_, P>, out: &mut W) -> Result<Option<Word>> {
    let suggestion = game.suggest()?;
    let candidates = game.candidates();

    writeln!(out, "{}", "─".repeat(60))?;
    writeln!(
        out,
        "Turn {}: {} candidates remaining",
        game.turns() + 1,
        candidates.len()
    )?;
    writeln!(out, "{}", "─".repeat(60))?;

    for (i, scored) in suggestion.guesses.iter().enumerate() {
        let metrics = game.metrics(&scored.word);
        let marker = if candidates.contains(&scored.word) { "●" } else { " " };
        writeln!(
            out,
            "  {}. {} {marker} {}  worst case {}",
            i + 1,
            scored.word.text().to_uppercase().bright_white().bold(),
            format_score(scored.score, metrics.expected_remaining),
            metrics.max_partition
        )?;
    }
    if suggestion.from_opener {
        writeln!(out, "  (fixed opener)")?;
    }
    writeln!(out)?;

    if candidates.len() <= LIST_LIMIT {
        writeln!(out, "Remaining candidates:")?;
        for candidate in candidates {
            writeln!(out, "  • {}", candidate.text().to_uppercase())?;
        }
        writeln!(out)?;
    }
    Ok(suggestion.best().map(|scored| scored.word.clone()))
}

fn print_solved<P: ParallelMap, W: Write>(game: &Game<'_, P>, out: &mut W) -> Result<()> {
    let turns = game.turns();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "    🎉  W O R D L E   S O L V E D !  🎉    ".bright_green().bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    )?;

    writeln!(out, "\n  Guess history:")?;
    for (i, turn) in game.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}  ({} left)",
            (i + 1).to_string().bright_black(),
            turn.guess.text().to_uppercase().bright_white().bold(),
            format_observation(&turn.observation),
            turn.remaining
        )?;
    }
    Ok(())
}
