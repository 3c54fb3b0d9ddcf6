//! Console adapter tests with in-memory input and output.

use std::io::{Cursor, ErrorKind};

use twentyone::{
    Announcement, Card, Console, Game, GameOptions, GameState, MenuChoice, Player, Rank,
    RoundError, RoundOutcome, RoundResult, Suit, Terminal, TurnAction,
};

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn menu_reprompts_until_valid() {
    let mut console = console("7\nstart game\n2\n");

    assert_eq!(console.prompt_menu().unwrap(), MenuChoice::Rules);

    let text = output(console);
    assert_eq!(text.matches("Please select option").count(), 2);
    assert_eq!(text.matches("-->").count(), 3);
}

#[test]
fn menu_accepts_words_and_numbers() {
    let mut console = console("1\nRULES\n  exit  \n3\n");

    assert_eq!(console.prompt_menu().unwrap(), MenuChoice::Start);
    assert_eq!(console.prompt_menu().unwrap(), MenuChoice::Rules);
    assert_eq!(console.prompt_menu().unwrap(), MenuChoice::Exit);
    assert_eq!(console.prompt_menu().unwrap(), MenuChoice::Exit);
}

#[test]
fn hit_or_stay_is_case_insensitive() {
    let mut console = console("HIT\nx\ns\nStay\nh\n");

    assert_eq!(console.prompt_hit_or_stay().unwrap(), TurnAction::Hit);
    assert_eq!(console.prompt_hit_or_stay().unwrap(), TurnAction::Stay);
    assert_eq!(console.prompt_hit_or_stay().unwrap(), TurnAction::Stay);
    assert_eq!(console.prompt_hit_or_stay().unwrap(), TurnAction::Hit);

    assert!(output(console).contains("That was not one of the options."));
}

#[test]
fn replay_answers() {
    let mut console = console("maybe\nY\nno\n");

    assert!(console.prompt_replay().unwrap());
    assert!(!console.prompt_replay().unwrap());
    assert!(output(console).contains("That was neither yes, nor no."));
}

#[test]
fn closed_input_is_an_error() {
    let mut console = console("bogus\n");

    let err = console.prompt_replay().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn render_hides_the_hole_card() {
    let mut dealer = Player::dealer("Dealer");
    dealer.add_card(Card::new(Rank::Ten, Suit::Clubs));
    let mut up = Card::new(Rank::Seven, Suit::Hearts);
    up.flip();
    dealer.add_card(up);

    let mut player = Player::new("Player");
    let mut ace = Card::new(Rank::Ace, Suit::Diamonds);
    ace.flip();
    player.add_card(ace);
    player.add_win();

    let mut console = console("");
    console.render(&[dealer, player]).unwrap();

    let text = output(console);
    assert!(text.contains("Dealer's Hand:\n[CARD] [Seven of \u{2661}]"));
    assert!(text.contains("Value: 7 | Wins: 0"));
    assert!(text.contains("Player's Hand:\n[Ace of \u{2662}]"));
    assert!(text.contains("Value: 11 | Wins: 1"));
    assert!(!text.contains("Ten of"));
}

#[test]
fn announcements_name_the_seats() {
    let result = RoundResult {
        outcome: RoundOutcome::PlayerBust,
        player_score: 24,
        dealer_score: 9,
        player_wins: 0,
        dealer_wins: 1,
    };

    let mut console = console("");
    console.announce(Announcement::Hit { name: "Sam" }).unwrap();
    console.announce(Announcement::Bust { name: "Sam" }).unwrap();
    console
        .announce(Announcement::DealerHit {
            name: "House",
            draws: 2,
        })
        .unwrap();
    console
        .announce(Announcement::DealerHit {
            name: "House",
            draws: 3,
        })
        .unwrap();
    console
        .announce(Announcement::Settled {
            result: &result,
            dealer: "House",
            player: "Sam",
        })
        .unwrap();

    let text = output(console);
    assert!(text.contains("Sam hits!"));
    assert!(text.contains("Uh oh!"));
    assert!(text.contains("House wants another card!"));
    assert!(text.contains("House hits, again!"));
    assert!(text.contains("Bust! Sam loses!"));
}

#[test]
fn full_game_over_the_console() {
    let options = GameOptions::default().with_pacing(core::time::Duration::ZERO);
    let mut game = Game::new(options, 99);
    let mut console = console("2\n1\ns\nn\n3\n");

    game.run(&mut console).unwrap();

    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.state(), GameState::Stopped);

    let text = output(console);
    assert!(text.contains("TWENTY-ONE"));
    assert!(text.contains("RULES"));
    assert!(text.contains("Player stays!"));
    assert!(text.contains("Dealer reveals the hidden card..."));
    assert!(text.contains("Play again?"));
}

#[test]
fn running_out_of_input_aborts_the_game() {
    let mut game = Game::new(GameOptions::default(), 4);
    let mut console = console("1\n");

    let err = game.run(&mut console).unwrap_err();

    match err {
        RoundError::Terminal(io) => assert_eq!(io.kind(), ErrorKind::UnexpectedEof),
        other => panic!("expected a terminal error, got {other:?}"),
    }
}
