use battleship::{
    Board, BoardError, Cell, Orientation, Participant, Rules, ShipType, ShotOutcome, Variant,
    BOARD_SIZE, PLACEMENT_ATTEMPTS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const DINGHY: ShipType = ShipType::new("Dinghy", 1);
const SLOOP: ShipType = ShipType::new("Sloop", 2);
const FRIGATE: ShipType = ShipType::new("Frigate", 3);

static HUGE_FLEET: [ShipType; 1] = [ShipType::new("Huge", BOARD_SIZE + 1)];

fn all_empty(board: &Board) -> bool {
    (0..BOARD_SIZE).all(|r| (0..BOARD_SIZE).all(|c| board.cell(r, c) == Some(Cell::Empty)))
}

#[test]
fn test_single_cell_ship_miss_then_kill() {
    let mut board = Board::new(true);
    board.place(DINGHY, 2, 2, Orientation::Horizontal).unwrap();

    assert_eq!(board.attack(0, 0).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.ships()[0].hits(), 0);
    assert_eq!(board.afloat_count(), 1);
    assert!(!board.all_sunk());

    assert_eq!(board.attack(2, 2).unwrap(), ShotOutcome::Kill("Dinghy"));
    assert!(board.all_sunk());
    assert_eq!(board.cell(2, 2), Some(Cell::Destroyed));
}

#[test]
fn test_out_of_bounds_placement_leaves_grid_unchanged() {
    let mut board = Board::new(false);
    assert_eq!(
        board.place(FRIGATE, 0, 4, Orientation::Horizontal),
        Err(BoardError::ShipOutOfBounds)
    );
    assert!(!board.try_place(FRIGATE, 0, 4, Orientation::Horizontal));
    assert!(!board.try_place(FRIGATE, 4, 0, Orientation::Vertical));
    assert_eq!(board.placed_count(), 0);
    assert!(all_empty(&board));

    // the last column still fits a horizontal ship that ends on the edge
    assert!(board.try_place(FRIGATE, 0, 3, Orientation::Horizontal));
}

#[test]
fn test_overlap_rejected_without_mutation() {
    let mut board = Board::new(false);
    board.place(FRIGATE, 1, 1, Orientation::Horizontal).unwrap();
    assert_eq!(
        board.place(SLOOP, 0, 2, Orientation::Vertical),
        Err(BoardError::ShipOverlaps)
    );
    assert_eq!(board.cell(0, 2), Some(Cell::Empty));
    assert_eq!(board.placed_count(), 1);
}

#[test]
fn test_adjacency_buffer_only_when_enabled() {
    let mut spaced = Board::new(true);
    spaced.place(SLOOP, 0, 0, Orientation::Horizontal).unwrap();
    // diagonal neighbour of (0, 1)
    assert_eq!(
        spaced.place(DINGHY, 1, 2, Orientation::Horizontal),
        Err(BoardError::ShipTooClose)
    );
    assert_eq!(
        spaced.place(DINGHY, 0, 2, Orientation::Horizontal),
        Err(BoardError::ShipTooClose)
    );
    assert!(spaced.try_place(DINGHY, 2, 2, Orientation::Horizontal));

    let mut classic = Board::new(false);
    classic.place(SLOOP, 0, 0, Orientation::Horizontal).unwrap();
    assert!(classic.try_place(DINGHY, 1, 2, Orientation::Horizontal));
    assert!(classic.try_place(DINGHY, 0, 2, Orientation::Horizontal));
}

#[test]
fn test_kill_marks_every_cell_destroyed() {
    let mut board = Board::new(false);
    board.place(FRIGATE, 1, 1, Orientation::Vertical).unwrap();
    board.place(DINGHY, 5, 5, Orientation::Vertical).unwrap();

    assert_eq!(board.attack(1, 1).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.cell(1, 1), Some(Cell::Hit));
    assert_eq!(board.cell(2, 1), Some(Cell::Ship(0)));
    assert_eq!(board.attack(3, 1).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.attack(2, 1).unwrap(), ShotOutcome::Kill("Frigate"));

    for r in 1..=3 {
        assert_eq!(board.cell(r, 1), Some(Cell::Destroyed));
    }
    assert_eq!(board.destroyed_cells(), 3);
    assert_eq!(board.afloat_count(), 1);
    assert_eq!(board.afloat().next().unwrap().name(), "Dinghy");
    assert!(board.ships()[0].is_sunk());
}

#[test]
fn test_repeat_shots_do_not_double_count() {
    let mut board = Board::new(false);
    board.place(SLOOP, 4, 0, Orientation::Horizontal).unwrap();

    assert_eq!(board.attack(4, 0).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.attack(4, 0).unwrap(), ShotOutcome::AlreadyTried);
    assert_eq!(board.ships()[0].hits(), 1);
    assert!(!board.ships()[0].is_sunk());

    assert_eq!(board.attack(0, 0).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.attack(0, 0).unwrap(), ShotOutcome::AlreadyTried);
    assert_eq!(board.cell(0, 0), Some(Cell::Miss));

    assert_eq!(board.attack(4, 1).unwrap(), ShotOutcome::Kill("Sloop"));
    assert_eq!(board.attack(4, 1).unwrap(), ShotOutcome::AlreadyTried);
    assert_eq!(board.ships()[0].hits(), 2);
}

#[test]
fn test_attack_outside_grid() {
    let mut board = Board::new(false);
    assert_eq!(
        board.attack(BOARD_SIZE, 0),
        Err(BoardError::OutOfBounds {
            row: BOARD_SIZE,
            col: 0
        })
    );
}

#[test]
fn test_random_placement_gives_up_after_cap() {
    let mut board = Board::new(false);
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        board.place_randomly(&mut rng, &HUGE_FLEET, PLACEMENT_ATTEMPTS),
        Err(BoardError::UnableToPlaceShip {
            name: "Huge",
            attempts: PLACEMENT_ATTEMPTS
        })
    );
    assert_eq!(board.placed_count(), 0);
}

#[test]
fn test_random_fleet_for_each_variant() {
    let mut rng = SmallRng::seed_from_u64(42);
    for variant in [Variant::Classic, Variant::Spaced] {
        let rules = Rules::for_variant(variant);
        let p = Participant::with_random_fleet("P", &rules, &mut rng).unwrap();
        assert_eq!(p.board().placed_count(), rules.fleet.len());
        assert_eq!(p.board().afloat_count(), rules.fleet.len());
        assert_eq!(p.board().adjacency_buffer(), rules.adjacency_buffer);
        let occupied = (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| matches!(p.board().cell(r, c), Some(Cell::Ship(_))))
            .count();
        assert_eq!(occupied, rules.fleet_cells());
        assert!(p.shots().is_empty());
    }
}

#[test]
fn test_setup_without_restarts_returns_full_fleet() {
    let rules = Rules {
        setup_restarts: 0,
        ..Rules::for_variant(Variant::Classic)
    };
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        match Participant::with_random_fleet("P", &rules, &mut rng) {
            Ok(p) => assert_eq!(p.board().placed_count(), rules.fleet.len()),
            Err(e) => assert_eq!(e, BoardError::SetupExhausted { restarts: 0 }),
        }
    }
}

#[test]
fn test_setup_reports_exhaustion() {
    let rules = Rules {
        fleet: &HUGE_FLEET,
        setup_restarts: 3,
        ..Rules::for_variant(Variant::Spaced)
    };
    let mut rng = SmallRng::seed_from_u64(1);
    let err = Participant::with_random_fleet("P", &rules, &mut rng)
        .err()
        .unwrap();
    assert_eq!(err, BoardError::SetupExhausted { restarts: 3 });
}

#[test]
fn test_same_seed_same_fleet() {
    let rules = Rules::for_variant(Variant::Spaced);
    let mut rng1 = SmallRng::seed_from_u64(99);
    let mut rng2 = SmallRng::seed_from_u64(99);
    let a = Participant::with_random_fleet("A", &rules, &mut rng1).unwrap();
    let b = Participant::with_random_fleet("B", &rules, &mut rng2).unwrap();
    assert_eq!(a.board().ships(), b.board().ships());
}
