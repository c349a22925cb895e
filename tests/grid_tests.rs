use battleship_duel::{initialize, place_ship, Board, BoardError, Cell, Orientation, BOARD_SIZE};

#[test]
fn test_initialize_all_water() {
    let board = initialize();
    assert_eq!(board.count(Cell::Water), BOARD_SIZE * BOARD_SIZE);
    assert!(board.iter().all(|(_, _, cell)| cell == Cell::Water));
    assert_eq!(board, Board::default());
}

#[test]
fn test_get_set_bounds() {
    let mut board = Board::new();
    board.set(9, 9, Cell::Hit).unwrap();
    assert_eq!(board.get(9, 9).unwrap(), Cell::Hit);
    assert_eq!(
        board.set(10, 0, Cell::Miss).unwrap_err(),
        BoardError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        board.get(0, 10).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 10 }
    );
}

#[test]
fn test_render_glyphs() {
    let mut board = Board::new();
    board.set(0, 0, Cell::Ship).unwrap();
    board.set(0, 1, Cell::Hit).unwrap();
    board.set(0, 2, Cell::Miss).unwrap();
    let snapshot = board.render();
    assert_eq!(&snapshot[0][..4], &['1', 'X', '0', '~']);
}

#[test]
fn test_render_concealed_hides_ships() {
    let mut board = Board::new();
    place_ship(&mut board, 2, 3, 5, Orientation::Horizontal).unwrap();
    let snapshot = board.render_concealed();
    assert!(snapshot.iter().flatten().all(|&g| g == '~'));
    assert_eq!(board.render()[2][3], '1');
}

#[test]
fn test_display_layout() {
    let mut board = Board::new();
    board.set(1, 0, Cell::Hit).unwrap();
    board.set(1, 9, Cell::Miss).unwrap();
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), BOARD_SIZE + 1);
    assert_eq!(lines[0], "  A B C D E F G H I J ");
    assert_eq!(lines[1], "0 ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ");
    assert_eq!(lines[2], "1 X ~ ~ ~ ~ ~ ~ ~ ~ 0 ");
    assert_eq!(lines[10], "9 ~ ~ ~ ~ ~ ~ ~ ~ ~ ~ ");
}
