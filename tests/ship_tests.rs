use salvo::{Coord, GameError, Orientation, Ship, FLEET, TOTAL_SHIP_CELLS};

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

#[test]
fn test_horizontal_run() -> Result<(), GameError> {
    let ship = Ship::new(3, at(2, 1), Orientation::Horizontal)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![at(2, 1), at(2, 2), at(2, 3)]);
    assert_eq!(ship.mask().count_ones(), 3);
    assert!(ship.contains(at(2, 3)));
    assert!(!ship.contains(at(3, 1)));
    Ok(())
}

#[test]
fn test_vertical_run() -> Result<(), GameError> {
    let ship = Ship::new(4, at(0, 0), Orientation::Vertical)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![at(0, 0), at(1, 0), at(2, 0), at(3, 0)]);
    assert!(!ship.contains(at(4, 0)));
    Ok(())
}

#[test]
fn test_run_must_fit() {
    assert_eq!(
        Ship::new(5, at(0, 6), Orientation::Horizontal).unwrap_err(),
        GameError::ShipOutOfBounds
    );
    assert_eq!(
        Ship::new(2, at(9, 0), Orientation::Vertical).unwrap_err(),
        GameError::ShipOutOfBounds
    );
    assert!(Ship::new(5, at(0, 5), Orientation::Horizontal).is_ok());
}

#[test]
fn test_fleet_configuration() {
    let sizes: Vec<_> = FLEET.iter().map(|d| d.length()).collect();
    assert_eq!(sizes, vec![2, 3, 4, 5]);
    assert_eq!(sizes.iter().sum::<usize>(), TOTAL_SHIP_CELLS);
}
