use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use salvo::{AttackResult, Board, CellState, Coord, Orientation, BOARD_SIZE, TOTAL_SHIP_CELLS};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_all_ships_randomly(&mut rng).unwrap();
    board
}

fn ship_cells(board: &Board) -> Vec<Coord> {
    Coord::all()
        .filter(|&c| board.cell(c) == CellState::Ship)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_is_well_formed(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(ship_cells(&board).len(), TOTAL_SHIP_CELLS);

        let ships = board.ships();
        let mut sizes: Vec<_> = ships.iter().map(|s| s.size()).collect();
        sizes.sort_unstable();
        prop_assert_eq!(sizes, vec![2, 3, 4, 5]);

        for (i, ship) in ships.iter().enumerate() {
            let cells: Vec<_> = ship.cells().collect();
            prop_assert_eq!(cells.len(), ship.size());
            let a = ship.anchor();
            for (k, c) in cells.iter().enumerate() {
                match ship.orientation() {
                    Orientation::Horizontal => {
                        prop_assert_eq!((c.row(), c.col()), (a.row(), a.col() + k));
                    }
                    Orientation::Vertical => {
                        prop_assert_eq!((c.row(), c.col()), (a.row() + k, a.col()));
                    }
                }
                prop_assert!(c.row() < BOARD_SIZE && c.col() < BOARD_SIZE);
                prop_assert_eq!(board.cell(*c), CellState::Ship);
            }
            for other in &ships[i + 1..] {
                prop_assert!(!ship.mask().intersects(&other.mask()));
            }
        }
    }

    #[test]
    fn attack_is_idempotent(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let mut board = random_board(seed);
        let target = Coord::new(row, col).unwrap();
        let before = board.clone();

        let first = board.attack(target).unwrap();
        prop_assert_ne!(first, AttackResult::AlreadyTried);
        prop_assert_ne!(&board, &before);

        let after_first = board.clone();
        prop_assert_eq!(board.attack(target).unwrap(), AttackResult::AlreadyTried);
        prop_assert_eq!(&board, &after_first);
    }

    #[test]
    fn all_sunk_iff_every_ship_cell_hit(seed in any::<u64>(), spare in 0..TOTAL_SHIP_CELLS) {
        let mut board = random_board(seed);
        let mut cells = ship_cells(&board);
        cells.shuffle(&mut SmallRng::seed_from_u64(seed ^ 0x5eed));

        let last = cells.remove(spare);
        for c in &cells {
            prop_assert_eq!(board.attack(*c).unwrap(), AttackResult::Hit);
            prop_assert!(!board.all_ships_sunk());
        }
        prop_assert_eq!(board.remaining_ship_cells(), 1);

        prop_assert_eq!(board.attack(last).unwrap(), AttackResult::Hit);
        prop_assert!(board.all_ships_sunk());
        prop_assert_eq!(board.sunk_ships(), 4);
    }

    #[test]
    fn misses_never_sink(seed in any::<u64>()) {
        let mut board = random_board(seed);
        for c in Coord::all() {
            if board.cell(c) == CellState::Empty {
                prop_assert_eq!(board.attack(c).unwrap(), AttackResult::Miss);
            }
        }
        prop_assert!(!board.all_ships_sunk());
        prop_assert_eq!(board.remaining_ship_cells(), TOTAL_SHIP_CELLS);
    }
}
