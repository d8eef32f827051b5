//! Scripted console sessions.

use std::io::Cursor;

use parlour::console::{Console, ConsoleError, play_blackjack, play_guessing, seat_players};
use parlour::{Game, GameOptions, GameState, GuessingGame};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

type Script = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn script(input: &str) -> Script {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(console: Script) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn seats_players_from_prompts() {
    let mut console = script("0\n9\n2\nlots\n250\nAda\n\n");
    let mut game = Game::new(GameOptions::default(), 1);

    seat_players(&mut console, &mut game, None, None).unwrap();

    let names: Vec<_> = game.players().iter().map(|p| p.name().to_owned()).collect();
    assert_eq!(names, ["Ada", "Player 2"]);
    assert!(game.players().iter().all(|p| p.chips() == 250));

    let text = output(console);
    assert_eq!(text.matches("Please enter number of players").count(), 3);
    assert!(text.contains("Please enter an integer"));
}

#[test]
fn arguments_skip_prompts() {
    let mut console = script("Ada\n");
    let mut game = Game::new(GameOptions::default(), 1);

    seat_players(&mut console, &mut game, Some(1), Some(40)).unwrap();
    assert_eq!(game.players()[0].chips(), 40);
    assert!(!output(console).contains("Please enter"));
}

#[test]
fn one_round_then_leave() {
    let mut console = script("Ada\nten\n500\n10\nX\nS\nmaybe\nN\n");
    let mut game = Game::new(GameOptions::default(), 3);

    seat_players(&mut console, &mut game, Some(1), Some(100)).unwrap();
    play_blackjack(&mut console, &mut game).unwrap();

    assert_eq!(game.state(), GameState::Finished);
    let ada = &game.players()[0];
    assert_eq!(ada.wins() + ada.ties() + ada.losses(), 1);
    assert!([90, 100, 110, 115].contains(&ada.chips()));

    let text = output(console);
    assert!(text.contains("Dealer has a "));
    assert!(text.contains("Ada your hand is: "));
    let hidden = text.find("and a face-down card").unwrap();
    let revealed = text.find("Dealer reveals ").unwrap();
    assert!(hidden < revealed);
    assert!(text.contains("Please enter a number between 0 and 100"));
    assert!(text.contains("Please enter one of: H, S"));
    assert!(text.contains("Please enter one of: Y, N"));
    assert!(text.contains(&format!("Ada leaves with ${}", ada.chips())));
    assert!(text.ends_with("Thanks for playing!\n"));
}

#[test]
fn everyone_sitting_out_ends_the_session() {
    let mut console = script("Ada\nBo\n0\n0\n");
    let mut game = Game::new(GameOptions::default(), 5);

    seat_players(&mut console, &mut game, Some(2), Some(30)).unwrap();
    play_blackjack(&mut console, &mut game).unwrap();

    assert_eq!(game.state(), GameState::Finished);
    let text = output(console);
    assert!(text.contains("Nobody placed a bet."));
    assert!(text.contains("Ada leaves with $30 (0 won, 0 tied, 0 lost)! Well done!"));
    assert!(text.contains("Bo leaves with $30"));
}

#[test]
fn closed_input_still_says_goodbye() {
    let mut console = script("Ada\n");
    let mut game = Game::new(GameOptions::default(), 5);

    seat_players(&mut console, &mut game, Some(1), Some(20)).unwrap();
    play_blackjack(&mut console, &mut game).unwrap();

    assert!(output(console).contains("Ada leaves with $20"));
}

#[test]
fn seating_fails_when_input_closes() {
    let mut console = script("");
    let mut game = Game::new(GameOptions::default(), 5);
    assert!(matches!(
        seat_players(&mut console, &mut game, None, None),
        Err(ConsoleError::Closed)
    ));
}

#[test]
fn guessing_rejects_bad_input_without_counting() {
    let mut console = script("x\n5\n0\n");
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut game = GuessingGame::new(0, 0, true, &mut rng).unwrap();

    assert_eq!(play_guessing(&mut console, &mut game).unwrap(), 1);

    let text = output(console);
    assert!(text.contains("Please enter an integer"));
    assert!(text.contains("5 is not between 0 and 0"));
    assert!(text.contains("Correct! You got it in 1 guess."));
}

#[test]
fn guessing_counts_every_valid_guess() {
    let script_text: String = (1..=20).map(|n| format!("{n}\n")).collect();

    for hints in [true, false] {
        let mut console = script(&script_text);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut game = GuessingGame::new(1, 20, hints, &mut rng).unwrap();

        let count = play_guessing(&mut console, &mut game).unwrap();
        let text = output(console);

        assert_eq!(text.matches("Wrong!").count() as u32, count - 1);
        assert!(!text.contains("Try lower"));
        if hints {
            assert!(!text.contains("Try again"));
        } else {
            assert!(!text.contains("Try higher"));
        }
    }
}
