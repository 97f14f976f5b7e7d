use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{play_out, random_target, GameEngine, GameError, PlayerId, TOTAL_SHIP_CELLS};

fn started(seed: u64) -> (GameEngine, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    engine.setup(&mut rng).unwrap();
    (engine, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn game_over_is_monotonic(seed in any::<u64>()) {
        let (mut engine, mut rng) = started(seed);
        let mut seen_over = false;
        while let Some(shooter) = engine.active_player() {
            prop_assert!(!engine.is_game_over());
            let target = random_target(&engine, shooter, &mut rng).unwrap();
            engine.apply_attack(shooter, target).unwrap();
            if engine.is_game_over() {
                seen_over = true;
            }
        }
        prop_assert!(seen_over);

        let winner = engine.winner().unwrap();
        prop_assert!(engine.board(winner.opponent()).all_ships_sunk());
        prop_assert!(!engine.board(winner).all_ships_sunk());
        prop_assert_eq!(
            engine.tracking(winner).hits().count_ones(),
            TOTAL_SHIP_CELLS
        );

        let loser = winner.opponent();
        let target = random_target(&engine, loser, &mut rng).unwrap();
        prop_assert_eq!(engine.apply_attack(loser, target).unwrap_err(), GameError::GameOver);
        prop_assert!(engine.is_game_over());
        prop_assert_eq!(engine.winner(), Some(winner));
    }

    #[test]
    fn play_out_finishes_with_alternating_turns(seed in any::<u64>()) {
        let (mut engine, mut rng) = started(seed);
        let winner = play_out(&mut engine, &mut rng).unwrap();
        prop_assert_eq!(engine.winner(), Some(winner));

        let ones = engine.turns_taken(PlayerId::One);
        let twos = engine.turns_taken(PlayerId::Two);
        // Player 1 moves first, so counts differ by at most one.
        match winner {
            PlayerId::One => prop_assert_eq!(ones, twos + 1),
            PlayerId::Two => prop_assert_eq!(ones, twos),
        }
        prop_assert!(ones >= TOTAL_SHIP_CELLS || twos >= TOTAL_SHIP_CELLS);
        prop_assert!(ones <= 100 && twos <= 100);
    }

    #[test]
    fn same_seed_same_game(seed in any::<u64>()) {
        let (mut a, mut rng_a) = started(seed);
        let (mut b, mut rng_b) = started(seed);
        let wa = play_out(&mut a, &mut rng_a).unwrap();
        let wb = play_out(&mut b, &mut rng_b).unwrap();
        prop_assert_eq!(wa, wb);
        prop_assert_eq!(a.turns_taken(PlayerId::One), b.turns_taken(PlayerId::One));
        prop_assert_eq!(a.board(PlayerId::Two), b.board(PlayerId::Two));
    }
}

#[test]
fn play_out_requires_setup() {
    let mut engine = GameEngine::new();
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(play_out(&mut engine, &mut rng), Err(GameError::NotStarted));
}
