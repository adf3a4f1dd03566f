const LEFT_TO_RIGHT_MARK: char = '\u{200e}';
const RIGHT_TO_LEFT_MARK: char = '\u{200f}';

#[derive(Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Leading,
    InWord,
    AfterWord,
}

/// Normalizes a namespace name or a page title (not both at once).
///
/// Underscores become spaces, runs of whitespace collapse to a single space,
/// leading and trailing whitespace is dropped and bidirectional marks are
/// removed. When `case_sensitive` is `false` the first character is
/// upper-cased; the rest of the title is left alone.
pub fn normalize_title_part(title: &str, case_sensitive: bool) -> String {
    let mut normalized = String::with_capacity(title.len());
    let mut state = ScanState::Leading;

    for c in title.chars() {
        if c == LEFT_TO_RIGHT_MARK || c == RIGHT_TO_LEFT_MARK {
            continue;
        }
        let is_whitespace = c == ' ' || c == '_';
        match (state, is_whitespace) {
            (ScanState::Leading, true) | (ScanState::AfterWord, true) => {}
            (ScanState::Leading, false) => {
                if case_sensitive {
                    normalized.push(c);
                } else {
                    normalized.push(upper_first(c));
                }
                state = ScanState::InWord;
            }
            (ScanState::InWord, true) => {
                normalized.push(' ');
                state = ScanState::AfterWord;
            }
            (ScanState::InWord, false) | (ScanState::AfterWord, false) => {
                normalized.push(c);
                state = ScanState::InWord;
            }
        }
    }

    if state == ScanState::AfterWord {
        normalized.pop();
    }
    normalized
}

// Keeps characters whose upper case spans several chars (e.g. 'ß') as they are.
fn upper_first(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
