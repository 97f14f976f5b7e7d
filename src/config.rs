use crate::bitboard::BitBoard;
use crate::ship::ShipType;

/// Side length of every grid.
pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 4;

/// Fleet placed on each board, in placement order.
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Destroyer", 2),
    ShipType::new("Cruiser", 3),
    ShipType::new("Battleship", 4),
    ShipType::new("Carrier", 5),
];

/// Total number of ship segments in [`FLEET`].
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 4 + 5;

/// Random anchors tried per ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Occupancy mask sized for one grid.
pub type BB = BitBoard<u128, BOARD_SIZE>;

/// Look up a fleet entry by ship length.
pub fn ship_type_for_size(size: usize) -> Option<ShipType> {
    FLEET.iter().copied().find(|def| def.length() == size)
}
