//! Line-oriented console implementation of [`Terminal`].

use core::time::Duration;
use std::io::{self, BufRead, Write};
use std::thread;

use crate::player::Player;
use crate::result::{RoundOutcome, RoundResult};
use crate::terminal::{Announcement, MenuChoice, Terminal, TurnAction};

const BANNER: &str = "
     _______________

        TWENTY-ONE
     _______________


Let's play some twenty-one!
";

const RULES: &str = "

     ___________

        RULES
     ___________

\tYou play against the dealer. Both of you are dealt 2 cards. Yours are \
face up, while only the second of the dealer's cards is shown.

\tThe goal is to get as close to a score of 21 as you can without going \
over. You go first: hit to draw another card, or stay to keep your hand. \
Then the dealer takes their turn, and always stays on 17 or greater. Going \
over 21 is an instant loss for you or the dealer.

\tCard values are as follows:
\t\t*Jack, Queen and King are worth 10 points
\t\t*An Ace is worth 11 points, or 1 point once the hand is already over 10
\t\t*All other cards are worth their number in points
";

const PROMPT: &str = "-->";

/// A [`Terminal`] that reads answers line by line from `input` and writes
/// plain text to `output`.
///
/// Answers are trimmed and matched case-insensitively. Invalid answers are
/// reported and asked again. End of input is an
/// [`io::ErrorKind::UnexpectedEof`] error.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    pacing: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with no pacing.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pacing: Duration::ZERO,
        }
    }

    /// Sets how long [`pause`](Terminal::pause) sleeps.
    #[must_use]
    pub const fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Consumes the console, returning the output writer.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self, question: &str) -> io::Result<String> {
        writeln!(self.output, "{question}")?;
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_lowercase())
    }

    fn ask<T>(
        &mut self,
        question: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<T> {
        loop {
            let answer = self.read_answer(question)?;
            if let Some(choice) = parse(&answer) {
                return Ok(choice);
            }
            writeln!(self.output, "\n{retry}")?;
        }
    }
}

fn parse_menu(answer: &str) -> Option<MenuChoice> {
    match answer {
        "1" | "start" => Some(MenuChoice::Start),
        "2" | "rules" => Some(MenuChoice::Rules),
        "3" | "exit" => Some(MenuChoice::Exit),
        _ => None,
    }
}

fn parse_turn_action(answer: &str) -> Option<TurnAction> {
    match answer {
        "h" | "hit" => Some(TurnAction::Hit),
        "s" | "stay" => Some(TurnAction::Stay),
        _ => None,
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn settlement_message(result: &RoundResult, dealer: &str, player: &str) -> String {
    match result.outcome {
        RoundOutcome::PlayerBust => format!("Bust! {player} loses!"),
        RoundOutcome::DealerBust => format!("Bust! {dealer} loses!"),
        RoundOutcome::DealerHigher => format!("{dealer} wins!"),
        RoundOutcome::PlayerHigher => format!("{player} wins!"),
        RoundOutcome::Draw => String::from("It's a draw!"),
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    type Error = io::Error;

    fn show_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")
    }

    fn show_rules(&mut self) -> io::Result<()> {
        writeln!(self.output, "{RULES}")
    }

    fn prompt_menu(&mut self) -> io::Result<MenuChoice> {
        self.ask(
            "\nSelect one of the following options: 1) Start Game\t 2) Rules\t 3) Exit",
            "Please select option 1), 2), or 3). Please, try again...",
            parse_menu,
        )
    }

    fn prompt_hit_or_stay(&mut self) -> io::Result<TurnAction> {
        self.ask(
            "\n\n(H)it or (S)tay?\n",
            "That was not one of the options. Please, try again...",
            parse_turn_action,
        )
    }

    fn prompt_replay(&mut self) -> io::Result<bool> {
        self.ask(
            "\nPlay again?: (Y)es or (N)o",
            "That was neither yes, nor no. Please try again...",
            parse_yes_no,
        )
    }

    fn render(&mut self, players: &[Player]) -> io::Result<()> {
        writeln!(self.output, "\n\n")?;
        for player in players {
            writeln!(self.output, "{player}")?;
        }
        writeln!(self.output)
    }

    fn announce(&mut self, announcement: Announcement<'_>) -> io::Result<()> {
        match announcement {
            Announcement::Hit { name } => writeln!(self.output, "\n{name} hits!"),
            Announcement::Stay { name } => writeln!(self.output, "\n{name} stays!"),
            Announcement::Bust { .. } => writeln!(self.output, "\nUh oh!\n"),
            Announcement::HoleCardRevealed { name } => {
                writeln!(self.output, "\n{name} reveals the hidden card...\n")
            }
            Announcement::DealerHit { name, draws } => match draws {
                1 => writeln!(self.output, "\n{name} hits!"),
                2 => writeln!(self.output, "\n{name} wants another card!\n"),
                _ => writeln!(self.output, "\n{name} hits, again!\n"),
            },
            Announcement::DealerStay { name } => writeln!(self.output, "\n{name} stays!"),
            Announcement::Settled {
                result,
                dealer,
                player,
            } => writeln!(
                self.output,
                "\n{}\n",
                settlement_message(result, dealer, player)
            ),
        }
    }

    fn pause(&mut self) -> io::Result<()> {
        self.output.flush()?;
        if !self.pacing.is_zero() {
            thread::sleep(self.pacing);
        }
        Ok(())
    }
}
