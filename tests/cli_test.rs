use std::io::{self, Cursor, Write};

use battleship::{
    ui, AiPlayer, Board, CliPlayer, Game, GameError, InputStyle, Orientation, Participant, Player,
    Rules, ShipType, ShotOutcome, Variant, BOARD_SIZE, CLASSIC_GLYPHS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const SLOOP: ShipType = ShipType::new("Sloop", 2);

fn scripted(style: InputStyle, script: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    CliPlayer::new(
        "Tester",
        style,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    )
}

/// Classic game where Tester (index 0) has already hit (0, 0).
fn game_after_one_hit() -> Game {
    let mut mine = Board::new(false);
    mine.place(SLOOP, 5, 0, Orientation::Horizontal).unwrap();
    let mut theirs = Board::new(false);
    theirs.place(SLOOP, 0, 0, Orientation::Horizontal).unwrap();
    let mut game = Game::new(
        Rules::for_variant(Variant::Classic),
        Participant::new("Tester", mine),
        Participant::new("AI", theirs),
    );
    assert_eq!(game.fire(0, 0).unwrap().outcome, ShotOutcome::Hit);
    game
}

#[test]
fn test_single_line_input_reprompts_until_valid() {
    let game = game_after_one_hit();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = scripted(InputStyle::SingleLine, "x y\n9 9\n1\n0 0\n2 3\n");

    let target = player.select_target(&mut rng, &game.view(0)).unwrap();
    assert_eq!(target, (2, 3));

    let out = String::from_utf8(player.into_output()).unwrap();
    assert!(out.contains("Please enter numbers only."));
    assert!(out.contains("Coordinates must be between 0 and 5."));
    assert!(out.contains("Please enter valid coordinates (e.g., 0 0)."));
    assert!(out.contains("You've hit this cell previously."));
    assert_eq!(out.matches("enter your move").count(), 5);
}

#[test]
fn test_separate_prompts_reprompt_until_valid() {
    let game = game_after_one_hit();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = scripted(InputStyle::SeparatePrompts, "a\n4\n7\n4\n5\n");

    let target = player.select_target(&mut rng, &game.view(0)).unwrap();
    assert_eq!(target, (4, 5));

    let out = String::from_utf8(player.into_output()).unwrap();
    assert_eq!(out.matches("enter row (0-5)").count(), 3);
    assert_eq!(out.matches("enter column (0-5)").count(), 2);
}

#[test]
fn test_closed_input_is_reported() {
    let game = game_after_one_hit();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = scripted(InputStyle::SingleLine, "oops\n");
    assert!(matches!(
        player.select_target(&mut rng, &game.view(0)),
        Err(GameError::InputClosed)
    ));
}

#[test]
fn test_prompt_shows_own_ships_but_hides_enemy_ships() {
    let game = game_after_one_hit();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut player = scripted(InputStyle::SingleLine, "3 3\n");
    player.select_target(&mut rng, &game.view(0)).unwrap();

    let out = String::from_utf8(player.into_output()).unwrap();
    let (mine, enemy) = out.split_once("Enemy field:").unwrap();
    assert_eq!(mine.matches('S').count(), 2);
    assert_eq!(enemy.matches('S').count(), 0);
    assert_eq!(enemy.matches('H').count(), 1);
}

#[test]
fn test_concealed_render_never_reveals_intact_ships() {
    let mut board = Board::new(false);
    board.place(SLOOP, 2, 2, Orientation::Vertical).unwrap();
    let hidden = ui::render_board(&board, &CLASSIC_GLYPHS, false);
    let shown = ui::render_board(&board, &CLASSIC_GLYPHS, true);
    assert_eq!(hidden.matches('S').count(), 0);
    assert_eq!(shown.matches('S').count(), 2);
    assert_eq!(hidden.lines().count(), BOARD_SIZE + 1);

    board.attack(2, 2).unwrap();
    board.attack(0, 0).unwrap();
    let hidden = ui::render_board(&board, &CLASSIC_GLYPHS, false);
    assert_eq!(hidden.matches('H').count(), 1);
    assert_eq!(hidden.matches('M').count(), 1);
    assert_eq!(hidden.matches('S').count(), 0);

    board.attack(3, 2).unwrap();
    let hidden = ui::render_board(&board, &CLASSIC_GLYPHS, false);
    assert_eq!(hidden.matches('X').count(), 2);
    assert_eq!(hidden.matches('H').count(), 0);
}

#[test]
fn test_scripted_human_against_ai_finishes() {
    let script: String = (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| format!("{} {}\n", r, c)))
        .collect();
    let mut rng = SmallRng::seed_from_u64(2024);
    let rules = Rules::for_variant(Variant::Spaced);
    let mut game = Game::with_random_fleets(rules, ["Tester", "AI"], &mut rng).unwrap();
    let mut players: [Box<dyn Player>; 2] = [
        Box::new(scripted(InputStyle::SingleLine, &script)),
        Box::new(AiPlayer::new()),
    ];

    let winner = game.play(&mut players, &mut rng).unwrap();
    assert!(game.participant(1 - winner).board().all_sunk());
}

/// Console output that rejects every write.
struct BrokenConsole;

impl Write for BrokenConsole {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "console gone"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "console gone"))
    }
}

#[test]
fn test_feedback_survives_broken_console() {
    let mut player = CliPlayer::new(
        "Tester",
        InputStyle::SingleLine,
        Cursor::new(Vec::new()),
        BrokenConsole,
    );
    player.handle_shot_result((0, 0), ShotOutcome::Hit);
    player.handle_shot_result((0, 1), ShotOutcome::Kill("Sloop"));
    player.handle_opponent_shot((2, 2), ShotOutcome::Miss);

    let game = game_after_one_hit();
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(matches!(
        player.select_target(&mut rng, &game.view(0)),
        Err(GameError::Io(_))
    ));
}
