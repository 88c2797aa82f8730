use blocky::core::{Bag, Board, Game};
use blocky::term::{GameView, Viewport};
use blocky::types::Position;

#[test]
fn term_view_renders_border_corners() {
    let game = Game::new(1);
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&game, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let mut board = Board::default();
    board.set(Position::new(19, 0), true);
    let game = Game::from_parts(board, Bag::new(1));

    let fb = GameView::default().render(&game, Viewport::new(22, 22));

    // Board (19, 0) lands inside the border at x=1..=2, y=20.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_in_color() {
    let game = Game::new(1);
    let fb = GameView::default().render(&game, Viewport::new(22, 22));

    let empty = fb.get(1, 1).unwrap();
    for cell in game.active_piece().unwrap().cells() {
        let x = 1 + cell.col as u16 * 2;
        let y = 1 + cell.row as u16;
        let drawn = fb.get(x, y).unwrap();
        assert_eq!(drawn.ch, '█');
        assert!(drawn.style.bold);
        assert_ne!(drawn.style.fg, empty.style.fg);
    }
}

#[test]
fn term_view_centers_board_in_large_viewport() {
    let game = Game::new(1);
    let fb = GameView::default().render(&game, Viewport::new(80, 24));

    assert_eq!(fb.width(), 80);
    assert_eq!(fb.height(), 24);
    // (80 - 22) / 2 = 29, (24 - 22) / 2 = 1
    assert_eq!(fb.get(29, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(50, 22).unwrap().ch, '┘');
}

#[test]
fn term_view_side_panel_shows_counters() {
    let game = Game::new(4321);
    let fb = GameView::default().render(&game, Viewport::new(80, 24));

    let text: String = (0..fb.height())
        .filter_map(|y| fb.row(y))
        .flat_map(|row| row.iter().map(|c| c.ch).chain(std::iter::once('\n')))
        .collect();
    assert!(text.contains("LINES"));
    assert!(text.contains("PIECES"));
    assert!(text.contains("SEED"));
    assert!(text.contains("4321"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut board = Board::default();
    for col in 0..10 {
        board.set(Position::new(5, col), true);
    }
    let game = Game::from_parts(board, Bag::new(1));
    assert!(game.is_game_over());

    let fb = GameView::default().render(&game, Viewport::new(22, 22));
    let text: String = (0..fb.height())
        .filter_map(|y| fb.row(y))
        .flat_map(|row| row.iter().map(|c| c.ch))
        .collect();
    assert!(text.contains("GAME OVER"));
}
