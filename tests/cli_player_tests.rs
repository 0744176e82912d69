#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::{
        coord_to_string, BoardError, CliPlayer, Coordinate, Grid, Player, ShotResult, TurnView,
    };

    fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        CliPlayer::with_io(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn select(player: &mut CliPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> anyhow::Result<Coordinate> {
        let own = Grid::new(6);
        let target = Grid::new(6);
        let mut rng = SmallRng::seed_from_u64(0);
        player.select_target(
            &mut rng,
            &TurnView {
                own: &own,
                target: &target,
            },
        )
    }

    #[test]
    fn test_reads_first_valid_line() {
        let mut p = player("2 3\n");
        assert_eq!(select(&mut p).unwrap(), Coordinate::new(1, 2));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let mut p = player("hello\n1 2 3\nx 1\n4 5\n");
        assert_eq!(select(&mut p).unwrap(), Coordinate::new(3, 4));

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("Enter shot coordinates").count(), 4);
        assert!(out.contains("Enter two coordinates, got 1"));
        assert!(out.contains("Enter two coordinates, got 3"));
        assert!(out.contains("'x' is not a number"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut p = player("");
        assert!(select(&mut p).is_err());

        let mut p = player("bad\n");
        assert!(select(&mut p).is_err());
    }

    #[test]
    fn test_feedback_messages() {
        let mut p = player("");
        p.handle_shot_result(Coordinate::new(0, 0), ShotResult::Hit);
        p.handle_shot_result(Coordinate::new(1, 0), ShotResult::Sunk);
        p.handle_shot_result(Coordinate::new(3, 3), ShotResult::Miss);
        p.handle_rejected_shot(
            Coordinate::new(6, 0),
            BoardError::OutOfBounds(Coordinate::new(6, 0)),
        );
        p.handle_opponent_shot(Coordinate::new(2, 4), ShotResult::Miss);

        let out = String::from_utf8(p.into_output()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Ship hit!",
                "Ship destroyed!",
                "Miss!",
                "Shot at (6, 0) is outside the board",
                "Computer fires at 3 5 -> Miss!",
            ]
        );
    }

    #[test]
    fn test_coord_to_string_is_one_indexed() {
        assert_eq!(coord_to_string(Coordinate::new(0, 0)), "1 1");
        assert_eq!(coord_to_string(Coordinate::new(5, 2)), "6 3");
    }
}
