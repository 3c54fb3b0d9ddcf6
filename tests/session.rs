//! Round driver tests against a scripted terminal.

extern crate alloc;

use alloc::collections::VecDeque;

use twentyone::{
    Announcement, Game, GameOptions, GameState, MenuChoice, Player, RoundError, RoundOutcome,
    Terminal, TurnAction,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Banner,
    Rules,
    Render { hole_hidden: bool },
    Hit,
    Stay,
    Bust,
    Reveal,
    DealerHit(usize),
    DealerStay,
    Settled(RoundOutcome),
    Pause,
}

#[derive(Default)]
struct ScriptedTerminal {
    menu: VecDeque<MenuChoice>,
    actions: VecDeque<TurnAction>,
    replays: VecDeque<bool>,
    events: Vec<Event>,
}

impl ScriptedTerminal {
    fn new(menu: &[MenuChoice], actions: &[TurnAction], replays: &[bool]) -> Self {
        Self {
            menu: menu.iter().copied().collect(),
            actions: actions.iter().copied().collect(),
            replays: replays.iter().copied().collect(),
            events: Vec::new(),
        }
    }

    fn count(&self, event: &Event) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }

    fn settlements(&self) -> Vec<RoundOutcome> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Settled(outcome) => Some(*outcome),
                _ => None,
            })
            .collect()
    }
}

impl Terminal for ScriptedTerminal {
    type Error = &'static str;

    fn show_banner(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::Banner);
        Ok(())
    }

    fn show_rules(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::Rules);
        Ok(())
    }

    fn prompt_menu(&mut self) -> Result<MenuChoice, Self::Error> {
        self.menu.pop_front().ok_or("menu script exhausted")
    }

    fn prompt_hit_or_stay(&mut self) -> Result<TurnAction, Self::Error> {
        self.actions.pop_front().ok_or("action script exhausted")
    }

    fn prompt_replay(&mut self) -> Result<bool, Self::Error> {
        self.replays.pop_front().ok_or("replay script exhausted")
    }

    fn render(&mut self, players: &[Player]) -> Result<(), Self::Error> {
        let hole_hidden = players
            .iter()
            .filter(|p| p.is_dealer())
            .any(|p| p.hand().first().is_some_and(|c| !c.is_face_up()));
        self.events.push(Event::Render { hole_hidden });
        Ok(())
    }

    fn announce(&mut self, announcement: Announcement<'_>) -> Result<(), Self::Error> {
        let event = match announcement {
            Announcement::Hit { .. } => Event::Hit,
            Announcement::Stay { .. } => Event::Stay,
            Announcement::Bust { .. } => Event::Bust,
            Announcement::HoleCardRevealed { .. } => Event::Reveal,
            Announcement::DealerHit { draws, .. } => Event::DealerHit(draws),
            Announcement::DealerStay { .. } => Event::DealerStay,
            Announcement::Settled { result, .. } => Event::Settled(result.outcome),
        };
        self.events.push(event);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::Pause);
        Ok(())
    }
}

fn game(seed: u64) -> Game {
    Game::new(GameOptions::default(), seed)
}

#[test]
fn staying_plays_out_the_dealer() {
    let mut game = game(11);
    let mut terminal = ScriptedTerminal::new(&[], &[TurnAction::Stay], &[false]);

    let replay = game.play_round(&mut terminal).unwrap();

    assert!(!replay);
    assert_eq!(game.state(), GameState::Stopped);
    assert_eq!(terminal.events[0], Event::Render { hole_hidden: true });
    assert_eq!(terminal.count(&Event::Stay), 1);
    assert_eq!(terminal.count(&Event::Reveal), 1);
    assert_eq!(terminal.settlements().len(), 1);
    assert!(terminal.count(&Event::Pause) >= 2);

    // Every dealer draw is announced with a running count.
    let draws = game.dealer().hand_size() - 2;
    for n in 1..=draws {
        assert_eq!(terminal.count(&Event::DealerHit(n)), 1);
    }
    if game.dealer().is_bust() {
        assert_eq!(terminal.count(&Event::DealerStay), 0);
    } else {
        assert_eq!(terminal.count(&Event::DealerStay), 1);
        assert!(game.dealer().score() >= 17);
    }

    let wins = game.player().wins() + game.dealer().wins();
    let draw = terminal.settlements() == [RoundOutcome::Draw];
    assert_eq!(wins, u32::from(!draw));
}

#[test]
fn hitting_until_bust_skips_the_dealer() {
    let mut game = game(5);
    let mut terminal = ScriptedTerminal::new(&[], &[TurnAction::Hit; 30], &[false]);

    game.play_round(&mut terminal).unwrap();

    assert!(game.player().is_bust());
    assert_eq!(terminal.count(&Event::Bust), 1);
    assert_eq!(terminal.count(&Event::Reveal), 0);
    assert_eq!(terminal.count(&Event::Pause), 0);
    assert_eq!(terminal.settlements(), [RoundOutcome::PlayerBust]);
    assert_eq!(game.dealer().wins(), 1);
    assert_eq!(
        terminal.events.last(),
        Some(&Event::Settled(RoundOutcome::PlayerBust))
    );
    assert!(
        terminal
            .events
            .iter()
            .rev()
            .nth(1)
            .is_some_and(|e| *e == Event::Render { hole_hidden: true })
    );
    assert_eq!(
        terminal.count(&Event::Hit),
        game.player().hand_size() - 2
    );
}

#[test]
fn play_repeats_until_replay_is_declined() {
    let mut game = game(21);
    let mut terminal = ScriptedTerminal::new(&[], &[TurnAction::Stay; 3], &[true, true, false]);

    game.play(&mut terminal).unwrap();

    assert_eq!(game.rounds_played(), 3);
    assert_eq!(terminal.settlements().len(), 3);
    assert_eq!(game.state(), GameState::Stopped);
    assert!(game.player().wins() + game.dealer().wins() <= 3);
}

#[test]
fn run_follows_the_menu() {
    let mut game = game(8);
    let mut terminal = ScriptedTerminal::new(
        &[
            MenuChoice::Rules,
            MenuChoice::Start,
            MenuChoice::Start,
            MenuChoice::Exit,
        ],
        &[TurnAction::Stay; 2],
        &[false, false],
    );

    game.run(&mut terminal).unwrap();

    assert_eq!(terminal.events[0], Event::Banner);
    assert_eq!(terminal.events[1], Event::Rules);
    assert_eq!(game.rounds_played(), 2);
    assert_eq!(terminal.settlements().len(), 2);
    assert!(terminal.menu.is_empty());
}

#[test]
fn terminal_failure_aborts_the_round() {
    let mut game = game(2);
    let mut terminal = ScriptedTerminal::new(&[], &[], &[]);

    let err = game.play_round(&mut terminal).unwrap_err();

    assert!(matches!(err, RoundError::Terminal("action script exhausted")));
    assert_eq!(game.state(), GameState::PlayerTurn);
}
