#[cfg(feature = "std")]
mod session_tests {
    use std::io::Cursor;

    use battleship_duel::{
        place_ship, run_session, Board, ConsoleSource, GameState, Orientation, PlayerId,
        ScriptedSource, SessionSummary, FLEET_CELLS,
    };

    fn token(row: usize, col: usize) -> String {
        format!("{}{}", (b'A' + col as u8) as char, row)
    }

    fn small_fleet() -> Board {
        let mut board = Board::new();
        place_ship(&mut board, 1, 0, 5, Orientation::Vertical).unwrap();
        place_ship(&mut board, 2, 0, 5, Orientation::Vertical).unwrap();
        place_ship(&mut board, 3, 0, 4, Orientation::Vertical).unwrap();
        board
    }

    /// Player 1 sinks Player 2's fleet while Player 2 sends junk.
    fn winning_script() -> Vec<String> {
        let mut moves = Vec::new();
        let mut cells: Vec<(usize, usize)> = (0..5).map(|c| (1, c)).collect();
        cells.extend((0..5).map(|c| (2, c)));
        cells.extend((0..4).map(|c| (3, c)));
        for (r, c) in cells {
            moves.push(token(r, c));
            moves.push("Z1".to_string());
        }
        moves
    }

    #[test]
    fn test_scripted_session_summary() {
        let mut state = GameState::from_ship_grids(Board::new(), small_fleet());
        let mut moves = vec!["A9".to_string(), "AA".to_string()];
        moves.extend(winning_script());
        let mut source = ScriptedSource::new(moves);

        let summary = run_session(&mut state, &mut source).unwrap();

        assert_eq!(summary.winner, Some(PlayerId::Two));
        assert_eq!(summary.hits, [FLEET_CELLS, 0]);
        assert_eq!(summary.misses, [1, 0]);
        assert_eq!(summary.invalid, [0, FLEET_CELLS]);
        assert_eq!(summary.turns, 2 + 2 * FLEET_CELLS - 1);
        // the last junk move is never consumed
        assert_eq!(source.remaining(), 1);
        assert_eq!(summary.tracking[0][1], "XXXXX~~~~~");
        assert_eq!(summary.tracking[0][9], "0~~~~~~~~~");
        assert_eq!(summary.tracking[1][0], "~~~~~~~~~~");
    }

    #[test]
    fn test_exhausted_source_stops_without_winner() {
        let mut state = GameState::from_ship_grids(small_fleet(), small_fleet());
        let mut source = ScriptedSource::new(["A1", "A1", "B1"]);
        let summary = run_session(&mut state, &mut source).unwrap();
        assert_eq!(summary.winner, None);
        assert_eq!(summary.turns, 3);
        assert_eq!(summary.hits, [2, 1]);
        assert_eq!(state.active_player(), Some(PlayerId::Two));
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let mut state = GameState::from_ship_grids(Board::new(), small_fleet());
        let mut source = ScriptedSource::new(winning_script());
        let summary = run_session(&mut state, &mut source).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["winner"], "Two");
        assert_eq!(v["hits"][0], FLEET_CELLS);
        let back: SessionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_console_transcript() {
        let mut state = GameState::from_ship_grids(Board::new(), small_fleet());
        let mut input = String::from("A9\r\nA0\n");
        for m in winning_script() {
            input.push_str(&m);
            input.push('\n');
        }
        let mut source = ConsoleSource::new(Cursor::new(input), Vec::new());

        let summary = run_session(&mut state, &mut source).unwrap();
        assert_eq!(summary.winner, Some(PlayerId::Two));
        assert_eq!(summary.misses[0], 1);
        assert_eq!(summary.invalid[1], FLEET_CELLS);

        let (_, output) = source.into_inner();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Player 1's turn:");
        assert_eq!(lines[1], "  A B C D E F G H I J ");
        assert_eq!(lines[12], "Enter target (for example A5): ");
        assert_eq!(lines[13], "Miss!");
        assert_eq!(lines[14], "Player 2's turn:");
        assert!(text.contains("Hit!"));
        assert!(text.ends_with("Player 2 is winner!\nGame Over!\n"));
    }

    #[test]
    fn test_console_eof_ends_session() {
        let mut state = GameState::from_ship_grids(small_fleet(), small_fleet());
        let mut source = ConsoleSource::new(Cursor::new("B1\n"), Vec::new());
        let summary = run_session(&mut state, &mut source).unwrap();
        assert_eq!(summary.winner, None);
        assert_eq!(summary.turns, 1);
        let (_, output) = source.into_inner();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Enter target (for example A5): ").count(), 2);
        assert!(!text.contains("Game Over!"));
    }

    #[test]
    fn test_console_reveal_shows_own_ships_only() {
        let p1 = small_fleet();
        let mut state = GameState::from_ship_grids(p1, Board::new());
        let mut source =
            ConsoleSource::new(Cursor::new("C5\n"), Vec::new()).revealing(p1, Board::new());
        run_session(&mut state, &mut source).unwrap();
        let (_, output) = source.into_inner();
        let text = String::from_utf8(output).unwrap();
        let first_turn = text.split("Player 2's turn:").next().unwrap();
        assert!(first_turn.contains("Your ships:"));
        assert!(first_turn.contains("1 1 1 1 1 1 ~ ~ ~ ~ ~ "));
        let second_turn = text.split("Player 2's turn:").nth(1).unwrap();
        assert!(second_turn.contains("Your ships:"));
        assert!(!second_turn.contains("1 1 1"));
    }
}
