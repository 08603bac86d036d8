use abakus::{terminal::LineTerminal, History, Operation, Outcome};
use abakus_calculator::{Config, Session};

/// Run a whole session on the given input and return its history and output.
fn run(input: &str) -> (History, String) {
    console::set_colors_enabled(false);
    let config = Config {
        color: false,
        clear_screen: false,
        show_features: false,
    };
    let mut session = Session::new(LineTerminal::new(input.as_bytes(), Vec::new()), config);
    session.run().unwrap();

    let history = session.history().clone();
    let output = String::from_utf8(session.into_terminal().into_output()).unwrap();
    (history, output)
}

#[test]
fn test_division_by_zero() {
    let (history, output) = run("10\n4\n0\nq\n");

    assert!(output.contains("Calculation Error:"));
    assert!(output.contains("Error: Division by zero is not allowed!"));
    assert_eq!(history.len(), 1);

    let record = history.last().unwrap();
    assert!(!record.is_success());
    assert_eq!(record.operation, Operation::Divide);
    assert_eq!((record.lhs, record.rhs), (10.0, 0.0));
}

#[test]
fn test_successful_calculation() {
    let (history, output) = run("1,500\n3\n2\nq\n");

    assert!(output.contains("Calculation Result:"));
    assert!(output.contains("1500.0 * 2.0 = 3000.0"));
    assert_eq!(history.last().unwrap().outcome, Outcome::Value(3000.0));
}

#[test]
fn test_history_counts_every_attempt() {
    let (history, output) = run("7\n5\n2\n\n7\n5\n0\n\n2\n6\n10\n\nq\n");

    assert_eq!(history.len(), 3);
    let outcomes: Vec<_> = history.iter().map(|r| r.outcome.clone()).collect();
    assert_eq!(
        outcomes,
        [
            Outcome::Value(1.0),
            Outcome::Failure("Error: Modulo by zero is not allowed!".to_string()),
            Outcome::Value(1024.0),
        ]
    );

    assert!(output.contains("Total calculations: 3"));
    assert!(output.contains("Successful: 2"));
    assert!(output.contains("Failed: 1"));
    assert!(output.contains("Most used operation: %"));
    assert!(output.ends_with("Thank you for using the Enhanced Calculator!\n"));
}

#[test]
fn test_invalid_input_is_reprompted() {
    let (history, output) = run("abc\n\n3\n9\nx\n1\nnope\n4\nq\n");

    assert_eq!(
        output
            .matches("Error: Please enter a valid number or 'q' to quit.")
            .count(),
        3
    );
    assert_eq!(
        output
            .matches("Error: Please enter a number between 1-8, 'h' for history, or 'q' to quit.")
            .count(),
        2
    );
    assert_eq!(history.len(), 1);
    assert_eq!(history.last().unwrap().outcome, Outcome::Value(7.0));
}

#[test]
fn test_quit_at_any_prompt_records_nothing() {
    for input in &["q\n", "5\nq\n", "5\n8\n", "5\n1\nQ\n", "", "5\n", "5\n1\n"] {
        let (history, output) = run(input);
        assert!(history.is_empty(), "input {:?} recorded a calculation", input);
        assert!(output.contains("No calculations performed in this session."));
    }
}

#[test]
fn test_history_sentinels() {
    let (history, output) = run("5\nh\n1\n1\n1\nh\n2\n2\n2\nq\n");

    assert!(output.contains("No calculations in history yet."));
    assert!(output.contains("CALCULATION HISTORY"));
    assert!(output.contains(" 1. ["));
    assert!(output.contains("] 1.0 + 1.0 = 2.0"));
    assert!(output.contains("Total calculations: 1\n"));

    // the first number entered before asking for the history is dropped
    let operands: Vec<_> = history.iter().map(|r| (r.lhs, r.rhs)).collect();
    assert_eq!(operands, [(1.0, 1.0), (2.0, 2.0)]);
}

#[test]
fn test_menu_choice_seven_shows_history() {
    let (history, output) = run("1\n7\nq\n");
    assert!(history.is_empty());
    assert!(output.contains("No calculations in history yet."));
}
