use tracing::info;

use crate::error::RoundError;
use crate::player::HandStatus;
use crate::terminal::{Announcement, MenuChoice, Terminal, TurnAction};

use super::{DEALER, DealerMove, Game, GameState, PLAYER};

impl Game {
    /// Runs the menu loop until the player exits.
    ///
    /// Starting from the menu plays rounds until the player declines a
    /// replay, then returns to the menu. Wins carry over between visits.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or a round aborts.
    pub fn run<T: Terminal>(&mut self, terminal: &mut T) -> Result<(), RoundError<T::Error>> {
        terminal.show_banner().map_err(RoundError::Terminal)?;

        loop {
            match terminal.prompt_menu().map_err(RoundError::Terminal)? {
                MenuChoice::Start => self.play(terminal)?,
                MenuChoice::Rules => terminal.show_rules().map_err(RoundError::Terminal)?,
                MenuChoice::Exit => {
                    info!(rounds = self.rounds, "leaving the table");
                    return Ok(());
                }
            }
        }
    }

    /// Plays rounds until the player declines another one.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or a round aborts.
    pub fn play<T: Terminal>(&mut self, terminal: &mut T) -> Result<(), RoundError<T::Error>> {
        while self.play_round(terminal)? {}
        Ok(())
    }

    /// Plays one full round: deal, player turn, dealer turn, settlement, and
    /// the replay question.
    ///
    /// Returns whether the player wants another round.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails or the deck runs out.
    pub fn play_round<T: Terminal>(
        &mut self,
        terminal: &mut T,
    ) -> Result<bool, RoundError<T::Error>> {
        self.start_round()?;
        self.player_turn(terminal)?;
        self.dealer_turn(terminal)?;

        let result = self.settle()?;
        terminal
            .announce(Announcement::Settled {
                result: &result,
                dealer: self.players[DEALER].name(),
                player: self.players[PLAYER].name(),
            })
            .map_err(RoundError::Terminal)?;

        let replay = terminal.prompt_replay().map_err(RoundError::Terminal)?;
        self.finish_round(replay)?;
        Ok(replay)
    }

    fn player_turn<T: Terminal>(&mut self, terminal: &mut T) -> Result<(), RoundError<T::Error>> {
        while self.state == GameState::PlayerTurn {
            terminal
                .render(&self.players)
                .map_err(RoundError::Terminal)?;

            let name = self.players[PLAYER].name();
            match terminal
                .prompt_hit_or_stay()
                .map_err(RoundError::Terminal)?
            {
                TurnAction::Hit => {
                    terminal
                        .announce(Announcement::Hit { name })
                        .map_err(RoundError::Terminal)?;
                    if self.hit()? == HandStatus::Bust {
                        terminal
                            .announce(Announcement::Bust {
                                name: self.players[PLAYER].name(),
                            })
                            .map_err(RoundError::Terminal)?;
                    }
                }
                TurnAction::Stay => {
                    terminal
                        .announce(Announcement::Stay { name })
                        .map_err(RoundError::Terminal)?;
                    self.stay()?;
                }
            }
        }
        Ok(())
    }

    fn dealer_turn<T: Terminal>(&mut self, terminal: &mut T) -> Result<(), RoundError<T::Error>> {
        // The player busted; the dealer keeps the hole card hidden.
        if self.state != GameState::DealerTurn {
            return terminal
                .render(&self.players)
                .map_err(RoundError::Terminal);
        }

        terminal
            .announce(Announcement::HoleCardRevealed {
                name: self.players[DEALER].name(),
            })
            .map_err(RoundError::Terminal)?;
        self.reveal_hole_card()?;
        terminal.pause().map_err(RoundError::Terminal)?;

        let mut draws = 0;
        loop {
            terminal
                .render(&self.players)
                .map_err(RoundError::Terminal)?;
            terminal.pause().map_err(RoundError::Terminal)?;

            match self.dealer_step()? {
                DealerMove::Hit => {
                    draws += 1;
                    terminal
                        .announce(Announcement::DealerHit {
                            name: self.players[DEALER].name(),
                            draws,
                        })
                        .map_err(RoundError::Terminal)?;
                }
                DealerMove::Stay => {
                    terminal
                        .announce(Announcement::DealerStay {
                            name: self.players[DEALER].name(),
                        })
                        .map_err(RoundError::Terminal)?;
                    return Ok(());
                }
                DealerMove::Bust => return Ok(()),
            }

            terminal.pause().map_err(RoundError::Terminal)?;
        }
    }
}
