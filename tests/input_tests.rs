use seabattle::{parse_target, Coordinate, InputError};

#[test]
fn test_parse_converts_to_zero_indexed() {
    assert_eq!(parse_target("3 4"), Ok(Coordinate::new(2, 3)));
    assert_eq!(parse_target("  1\t1 \n"), Ok(Coordinate::new(0, 0)));
    assert_eq!(parse_target("6 6"), Ok(Coordinate::new(5, 5)));
}

#[test]
fn test_parse_leaves_range_to_the_grid() {
    assert_eq!(parse_target("0 7"), Ok(Coordinate::new(-1, 6)));
    let far = parse_target("99999999999 1").unwrap();
    assert_eq!(far.x, i32::MAX - 1);
}

#[test]
fn test_parse_wrong_token_count() {
    assert_eq!(parse_target(""), Err(InputError::WrongTokenCount(0)));
    assert_eq!(parse_target("   \n"), Err(InputError::WrongTokenCount(0)));
    assert_eq!(parse_target("5"), Err(InputError::WrongTokenCount(1)));
    assert_eq!(parse_target("1 2 3"), Err(InputError::WrongTokenCount(3)));
}

#[test]
fn test_parse_requires_both_numeric() {
    assert_eq!(
        parse_target("a 1"),
        Err(InputError::NotNumeric("a".to_string()))
    );
    assert_eq!(
        parse_target("1 b"),
        Err(InputError::NotNumeric("b".to_string()))
    );
    assert_eq!(
        parse_target("-1 2"),
        Err(InputError::NotNumeric("-1".to_string()))
    );
    assert_eq!(
        parse_target("+1 2"),
        Err(InputError::NotNumeric("+1".to_string()))
    );
    assert_eq!(
        parse_target("1.5 2"),
        Err(InputError::NotNumeric("1.5".to_string()))
    );
}

#[test]
fn test_input_error_messages() {
    assert_eq!(
        InputError::WrongTokenCount(1).to_string(),
        "Enter two coordinates, got 1"
    );
    assert_eq!(
        InputError::NotNumeric("x".to_string()).to_string(),
        "'x' is not a number"
    );
}
