#[cfg(test)]
mod tests {
    use crate::core::{setup_from_strings, Axis, Color, Grid, Move};
    use crate::logic::{
        axis_run, classify_axis, classify_point, terminal_state, AxisRun, GameResult, TacticalTier,
        WIN_CONDITION,
    };
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn play(grid: &mut Grid, coords: &[(usize, usize)], color: Color) -> Move {
        let mut last = Move::Pass;
        for &(row, col) in coords {
            let p = grid.coordinate_to_point(row, col).unwrap();
            last = Move::Play(p);
            assert!(grid.apply_move(last, color));
        }
        last
    }

    #[test]
    fn test_five_in_a_row_on_every_axis() {
        let lines: [[(usize, usize); 5]; 4] = [
            [(1, 3), (2, 3), (3, 3), (4, 3), (5, 3)], // 縦
            [(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)], // 右上がり
            [(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)], // 横
            [(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)], // 右下がり
        ];

        for line in lines.iter() {
            for completing in 0..5 {
                let mut grid = Grid::new(7).unwrap();
                let others: Vec<(usize, usize)> = line
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != completing)
                    .map(|(_, c)| *c)
                    .collect();
                let last = play(&mut grid, &others, Color::White);
                assert_eq!(
                    terminal_state(&grid, last, Color::White, WIN_CONDITION),
                    GameResult::Unknown,
                    "four stones must not win: {:?}",
                    others
                );

                let mv = play(&mut grid, &[line[completing]], Color::White);
                assert_eq!(
                    terminal_state(&grid, mv, Color::White, WIN_CONDITION),
                    GameResult::Win(Color::White),
                    "line {:?} completed at {:?}",
                    line,
                    line[completing]
                );
            }
        }
    }

    #[test]
    fn test_result_belongs_to_the_mover() {
        let mut grid = Grid::new(7).unwrap();
        let mv = play(&mut grid, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Color::Black);

        assert_eq!(
            terminal_state(&grid, mv, Color::Black, WIN_CONDITION),
            GameResult::Win(Color::Black)
        );
        // 白の視点からは石が繋がっていない
        assert_eq!(
            terminal_state(&grid, mv, Color::White, WIN_CONDITION),
            GameResult::Unknown
        );
    }

    #[test]
    fn test_broken_line_does_not_win() {
        let mut grid = Grid::new(7).unwrap();
        play(&mut grid, &[(3, 0), (3, 1), (3, 3), (3, 4)], Color::Black);
        let mv = play(&mut grid, &[(3, 2)], Color::White);
        assert_eq!(
            terminal_state(&grid, mv, Color::White, WIN_CONDITION),
            GameResult::Unknown
        );
    }

    #[test]
    fn test_full_board_without_five_is_a_draw() {
        let mut grid = Grid::new(7).unwrap();
        let mut last = (Move::Pass, Color::Black);
        for row in 0..7 {
            for col in 0..7 {
                // runs of at most two along every axis
                let color = if (col / 2 + row) % 2 == 0 {
                    Color::Black
                } else {
                    Color::White
                };
                last = (play(&mut grid, &[(row, col)], color), color);
                if grid.is_full() {
                    break;
                }
                assert_eq!(
                    terminal_state(&grid, last.0, last.1, WIN_CONDITION),
                    GameResult::Unknown
                );
            }
        }

        assert!(grid.is_full());
        assert_eq!(
            terminal_state(&grid, last.0, last.1, WIN_CONDITION),
            GameResult::Draw
        );
        assert_eq!(
            terminal_state(&grid, Move::Pass, Color::Black, WIN_CONDITION),
            GameResult::Draw
        );
    }

    #[test]
    fn test_axis_run_counts_and_open_ends() {
        let grid = setup_from_strings(&[
            ". . . . . . .",
            ". . . . . . .",
            "O X X . X . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
            ". . . . . . .",
        ])
        .unwrap();
        let p = grid.coordinate_to_point(2, 3).unwrap();

        let run = axis_run(&grid, p, Axis::Horizontal, Color::Black);
        // E is the first direction of the horizontal axis
        assert_eq!(
            run,
            AxisRun {
                left: 1,
                right: 2,
                left_open: true,
                right_open: false,
            }
        );
        assert_eq!(run.stones(), 3);
        assert!(!run.is_open());

        let vertical = axis_run(&grid, p, Axis::Vertical, Color::Black);
        assert_eq!(vertical.stones(), 0);
        assert!(vertical.is_open());

        let white = axis_run(&grid, p, Axis::Horizontal, Color::White);
        assert_eq!(white.stones(), 0);
    }

    #[test]
    fn test_axis_run_stops_at_border() {
        let grid = setup_from_strings(&[
            "X . . . .",
            "X . . . .",
            ". . . . .",
            ". . . . .",
            ". . . . .",
        ])
        .unwrap();
        let p = grid.coordinate_to_point(2, 0).unwrap();
        let run = axis_run(&grid, p, Axis::Vertical, Color::Black);
        assert_eq!(run.left, 2);
        assert!(!run.left_open);
        assert!(run.right_open);
    }

    #[test]
    fn test_classify_axis_priorities() {
        let run = |left, right, left_open, right_open| AxisRun {
            left,
            right,
            left_open,
            right_open,
        };
        let none = AxisRun::default();

        assert_eq!(classify_axis(run(2, 2, false, false), none, 5), TacticalTier::Win);
        assert_eq!(classify_axis(run(4, 1, false, false), none, 5), TacticalTier::Win);
        assert_eq!(
            classify_axis(run(1, 1, true, true), run(3, 1, false, false), 5),
            TacticalTier::BlockWin
        );
        assert_eq!(
            classify_axis(run(4, 0, false, true), run(4, 0, false, true), 5),
            TacticalTier::Win
        );
        assert_eq!(classify_axis(run(2, 1, true, true), none, 5), TacticalTier::OpenFour);
        assert_eq!(classify_axis(run(2, 1, true, false), none, 5), TacticalTier::Neutral);
        assert_eq!(
            classify_axis(none, run(0, 3, true, true), 5),
            TacticalTier::BlockOpenFour
        );
        assert_eq!(classify_axis(none, run(0, 3, false, true), 5), TacticalTier::Neutral);
        assert_eq!(classify_axis(run(1, 1, true, true), none, 4), TacticalTier::OpenFour);
    }

    #[test]
    fn test_classify_point_takes_strongest_axis() {
        let mut grid = setup_from_strings(&[
            ". . . . . . .",
            ". . . X . . .",
            ". . . X . . .",
            ". O O . O . .",
            ". . . X . . .",
            ". . . . . . .",
            ". . . . . . .",
        ])
        .unwrap();
        let p = grid.coordinate_to_point(3, 3).unwrap();

        // open three for black vertically, open three for white horizontally
        assert_eq!(
            classify_point(&grid, p, Color::Black, WIN_CONDITION),
            TacticalTier::OpenFour
        );
        assert_eq!(
            classify_point(&grid, p, Color::White, WIN_CONDITION),
            TacticalTier::OpenFour
        );

        let below = grid.coordinate_to_point(5, 3).unwrap();
        assert!(grid.apply_move(Move::Play(below), Color::Black));
        assert_eq!(
            classify_point(&grid, p, Color::Black, WIN_CONDITION),
            TacticalTier::Win
        );
        assert_eq!(
            classify_point(&grid, p, Color::White, WIN_CONDITION),
            TacticalTier::BlockWin
        );

        let corner = grid.coordinate_to_point(6, 6).unwrap();
        assert_eq!(
            classify_point(&grid, corner, Color::Black, WIN_CONDITION),
            TacticalTier::Neutral
        );
    }

    #[test]
    fn test_apply_then_undo_restores_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut grid = Grid::new(7).unwrap();
            play(&mut grid, &[(3, 3)], Color::Black);
            let before = grid.cells().to_vec();

            let mut points = grid.empty_points();
            points.shuffle(&mut rng);
            let mut applied = Vec::new();
            let mut color = Color::White;
            for p in points.into_iter().take(30) {
                let empty_before = grid.empty_points().len();
                assert!(grid.apply_move(Move::Play(p), color));
                assert_eq!(grid.empty_points().len(), empty_before - 1);
                applied.push(Move::Play(p));
                color = color.opponent();
            }

            for mv in applied.into_iter().rev() {
                let empty_before = grid.empty_points().len();
                assert!(grid.undo_move(mv));
                assert_eq!(grid.empty_points().len(), empty_before + 1);
            }
            assert_eq!(grid.cells(), &before[..]);
        }
    }
}
