use std::io::{self, Write};

/// Prints `message` without a newline and reads one line from stdin.
/// An unreadable stdin gives an empty answer.
pub fn prompt(message: &str) -> String {
    print!("\x1b[36m{}\x1b[0m", message);
    let _ = io::stdout().flush();
    get_user_input()
}

pub fn get_user_input() -> String {
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        input.clear();
    }
    input
}
