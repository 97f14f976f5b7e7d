use salvo::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    assert!(BitBoard::<u128, 10>::try_new().is_ok());
    assert!(BitBoard::<u64, 8>::try_new().is_ok());

    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 3, capacity: 8 })));
}

#[test]
fn test_get_set_bounds() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());
    assert!(!bb.get(1, 2).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
    assert!(bb.get(0, 4).is_err());

    bb.clear_all();
    assert!(bb.is_empty());
}

#[test]
fn test_from_cells_and_iter() {
    let bb = BitBoard::<u16, 4>::from_cells([(0, 1), (3, 3)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (3, 3)]);
}

#[test]
fn test_not_stays_inside_grid() {
    let bb = BitBoard::<u128, 10>::from_cells([(0, 0), (9, 9)]).unwrap();
    let inverse = !bb;
    assert_eq!(inverse.count_ones(), 98);
    assert!(!inverse.intersects(&bb));
    assert_eq!((inverse | bb).count_ones(), 100);
    assert!((inverse & bb).is_empty());
}
