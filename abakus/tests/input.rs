use abakus::{
    input::{parse_choice, parse_continue, parse_number, ContinueChoice, MenuChoice, NumberInput},
    Error, Operation,
};

fn number(input: &str) -> f64 {
    match parse_number(input) {
        Ok(NumberInput::Number(n)) => n,
        other => panic!("{:?} did not parse as a number: {:?}", input, other),
    }
}

#[test]
fn test_parse_number() {
    assert_eq!(number("42"), 42.0);
    assert_eq!(number("  -3.5 \n"), -3.5);
    assert_eq!(number("+.5"), 0.5);
    assert_eq!(number("1e3"), 1000.0);
    assert_eq!(number("1,234,567.25"), 1_234_567.25);
    assert_eq!(number("1_000"), 1000.0);
    assert_eq!(number("1 000"), 1000.0);
    assert!(number("inf").is_infinite());
}

#[test]
fn test_parse_number_rejects_text() {
    for input in &["", "   ", "abc", "12abc", "1.2.3", "--1", ",", "h"] {
        assert!(
            matches!(parse_number(input), Err(Error::InvalidNumber)),
            "{:?} should be rejected",
            input
        );
    }
    assert_eq!(
        parse_number("x").unwrap_err().to_string(),
        "Error: Please enter a valid number or 'q' to quit."
    );
}

#[test]
fn test_parse_number_quit() {
    assert_eq!(parse_number("q").unwrap(), NumberInput::Quit);
    assert_eq!(parse_number(" Q ").unwrap(), NumberInput::Quit);
}

#[test]
fn test_parse_choice() {
    assert_eq!(
        parse_choice("1").unwrap(),
        MenuChoice::Operation(Operation::Add)
    );
    assert_eq!(
        parse_choice(" 6 ").unwrap(),
        MenuChoice::Operation(Operation::Power)
    );
    assert_eq!(parse_choice("h").unwrap(), MenuChoice::History);
    assert_eq!(parse_choice("7").unwrap(), MenuChoice::History);
    assert_eq!(parse_choice("Q").unwrap(), MenuChoice::Quit);
    assert_eq!(parse_choice("8").unwrap(), MenuChoice::Quit);

    for input in &["0", "9", "+", "", "add"] {
        assert!(matches!(parse_choice(input), Err(Error::InvalidChoice)));
    }
    assert_eq!(
        parse_choice("x").unwrap_err().to_string(),
        "Error: Please enter a number between 1-8, 'h' for history, or 'q' to quit."
    );
}

#[test]
fn test_parse_continue() {
    assert_eq!(parse_continue(""), ContinueChoice::Next);
    assert_eq!(parse_continue("anything"), ContinueChoice::Next);
    assert_eq!(parse_continue("H"), ContinueChoice::History);
    assert_eq!(parse_continue("q"), ContinueChoice::Quit);
}
