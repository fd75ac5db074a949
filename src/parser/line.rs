//! Start-line classification.
//!
//! A line opens a new message iff it follows this grammar:
//!
//! ```text
//! [ '[' ] date [ ',' ] ws+ time [ ']' ] ws* '-' ws* sender ':' body
//! date   = digit{1,2} '/' digit{1,2} '/' ( digit{2} | digit{4} )
//! time   = digit{1,2} ':' digit{2} [ ':' digit{2} ] [ ws* ('A'|'P') 'M' ]
//! sender = any text without ':', at least one character
//! ```
//!
//! The scanner is written out explicitly so each rule (bracket variants,
//! 2-vs-4-digit years, meridiem markers) can be tested on its own. Any line
//! that fails the grammar is a continuation candidate, never an error.

/// Lexical fields of a message-start line, borrowed from the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StartLine<'a> {
    /// Date token exactly as written, e.g. `12/1/24`.
    pub date: &'a str,
    /// Time token exactly as written, including any AM/PM marker.
    pub time: &'a str,
    /// Sender text between the separator and the first colon, untrimmed.
    pub sender: &'a str,
    /// Rest of the line after the colon, trimmed.
    pub body: &'a str,
}

/// Classifies a line, returning its fields when it starts a new message.
pub(crate) fn classify(line: &str) -> Option<StartLine<'_>> {
    let mut rest = line;
    if let Some(r) = rest.strip_prefix('[') {
        rest = r;
    }

    let date_begin = offset(line, rest);
    rest = take_digits(rest, 1, 2)?;
    rest = rest.strip_prefix('/')?;
    rest = take_digits(rest, 1, 2)?;
    rest = rest.strip_prefix('/')?;
    let before_year = rest.len();
    rest = take_digits(rest, 2, 4)?;
    if before_year - rest.len() == 3 {
        // years are two or four digits
        return None;
    }
    let date = &line[date_begin..offset(line, rest)];

    if let Some(r) = rest.strip_prefix(',') {
        rest = r;
    }
    let after_ws = rest.trim_start();
    if after_ws.len() == rest.len() {
        // whitespace between date and time is mandatory
        return None;
    }
    rest = after_ws;

    let time_begin = offset(line, rest);
    rest = take_digits(rest, 1, 2)?;
    rest = rest.strip_prefix(':')?;
    rest = take_digits(rest, 2, 2)?;
    if let Some(r) = rest.strip_prefix(':').and_then(|r| take_digits(r, 2, 2)) {
        rest = r;
    }
    let mut time_end = offset(line, rest);
    if let Some(r) = take_meridiem(rest) {
        rest = r;
        time_end = offset(line, rest);
    }
    let time = &line[time_begin..time_end];

    if let Some(r) = rest.strip_prefix(']') {
        rest = r;
    }
    rest = rest.trim_start();
    rest = rest.strip_prefix('-')?;
    rest = rest.trim_start();

    let colon = rest.find(':')?;
    if colon == 0 {
        return None;
    }

    Some(StartLine {
        date,
        time,
        sender: &rest[..colon],
        body: rest[colon + 1..].trim(),
    })
}

fn offset(line: &str, rest: &str) -> usize {
    line.len() - rest.len()
}

/// Consumes between `min` and `max` ASCII digits, greedily.
fn take_digits(s: &str, min: usize, max: usize) -> Option<&str> {
    let count = s
        .bytes()
        .take(max)
        .take_while(|b| b.is_ascii_digit())
        .count();
    (count >= min).then(|| &s[count..])
}

/// Consumes an optional-whitespace-prefixed AM/PM marker.
fn take_meridiem(s: &str) -> Option<&str> {
    let mut chars = s.trim_start().chars();
    let first = chars.next()?;
    let second = chars.next()?;
    (matches!(first, 'a' | 'A' | 'p' | 'P') && matches!(second, 'm' | 'M'))
        .then(|| chars.as_str())
}
