//! Quote-aware whitespace tokenization.

/// Split a line on runs of whitespace, treating double-quoted spans as
/// part of the surrounding token.
///
/// A `"` toggles the quoted state and is kept in the token, so
/// `a "New York Office" b` yields `a`, `"New York Office"`, `b`. An
/// unterminated quote extends to the end of the line.
#[must_use]
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for ch in line.chars() {
        if ch == '"' {
            quoted = !quoted;
            current.push(ch);
        } else if ch.is_whitespace() && !quoted {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
