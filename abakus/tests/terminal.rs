use abakus::terminal::{LineTerminal, Mode, Prompter, Terminal};
use std::io::{self, IsTerminal};

#[test]
fn test_line_terminal() {
    let mut terminal = LineTerminal::new(&b"first\r\nsecond\nlast"[..], Vec::new());

    assert_eq!(terminal.read_line("> ").unwrap().as_deref(), Some("first"));
    assert_eq!(terminal.read_line("> ").unwrap().as_deref(), Some("second"));
    terminal.write_line("hello").unwrap();
    terminal.clear_screen().unwrap();
    assert_eq!(terminal.read_line("> ").unwrap().as_deref(), Some("last"));
    assert_eq!(terminal.read_line("> ").unwrap(), None);

    let output = String::from_utf8(terminal.into_output()).unwrap();
    assert_eq!(output, "> > hello\n> > ");
}

#[test]
fn test_mode_selection() {
    assert_eq!(Mode::select(false, true, true), Mode::Interactive);
    assert_eq!(Mode::select(true, true, true), Mode::Plain);
    // redirected input with the output still on a terminal
    assert_eq!(Mode::select(false, false, true), Mode::Plain);
    assert_eq!(Mode::select(false, true, false), Mode::Plain);
    assert_eq!(Mode::select(false, false, false), Mode::Plain);
}

#[test]
fn test_prompter_without_terminal_input() {
    if io::stdin().is_terminal() {
        return;
    }
    assert_eq!(Mode::detect(false), Mode::Plain);
    assert_eq!(Prompter::new().read_line("Enter first number: ").unwrap(), None);
}
