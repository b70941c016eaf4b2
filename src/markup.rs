//! Inline markup to ANSI terminal styling.
//!
//! Display strings may embed spans of the form `{<flags> text}`, where
//! `<flags>` is one or more single-letter style codes:
//!
//! | flag | style         | flag | style   |
//! |------|---------------|------|---------|
//! | `n`  | normal        | `y`  | yellow  |
//! | `i`  | bold          | `b`  | blue    |
//! | `u`  | underline     | `m`  | magenta |
//! | `v`  | reverse video | `c`  | cyan    |
//! | `r`  | red           | `w`  | white   |
//! | `g`  | green         |      |         |
//!
//! `\{` and `\}` render as literal braces. A `{` that is not followed by
//! known flag letters and a space is plain text; every bare `}` emits a
//! reset, so the closing brace of an unrecognized span still resets. The
//! rendered string is wrapped in resets and a reset is re-applied after
//! every newline so color never bleeds across lines in a pager.
//!
//! This is a pure function of its input: a single left-to-right lexer
//! pass, no state between calls.

pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Open(&'a str),
    Close,
    LiteralOpen,
    LiteralClose,
}

fn style_code(flag: char) -> Option<&'static str> {
    match flag {
        'n' => Some("0"),
        'i' => Some("1"),
        'u' => Some("4"),
        'v' => Some("7"),
        'r' => Some("31"),
        'g' => Some("32"),
        'y' => Some("33"),
        'b' => Some("34"),
        'm' => Some("35"),
        'c' => Some("36"),
        'w' => Some("37"),
        _ => None,
    }
}

/// Matches `{<flags><space>` at the start of `rest`, returning the flag
/// letters and the byte length of the whole opener.
fn match_open_tag(rest: &str) -> Option<(&str, usize)> {
    let body = rest.strip_prefix('{')?;
    let flag_len = body
        .char_indices()
        .take_while(|(_, c)| style_code(*c).is_some())
        .count();
    if flag_len == 0 {
        return None;
    }
    // Flags are all single-byte, so char count == byte offset.
    let after = &body[flag_len..];
    if !after.starts_with(' ') {
        return None;
    }
    Some((&body[..flag_len], 1 + flag_len + 1))
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = input;
    let mut plain_len = 0;

    while plain_len < rest.len() {
        let scan = &rest[plain_len..];
        let (token, token_len) = if scan.starts_with("\\{") {
            (Some(Token::LiteralOpen), 2)
        } else if scan.starts_with("\\}") {
            (Some(Token::LiteralClose), 2)
        } else if scan.starts_with('}') {
            (Some(Token::Close), 1)
        } else if let Some((flags, len)) = match_open_tag(scan) {
            (Some(Token::Open(flags)), len)
        } else {
            // Not at a token boundary; extend the plain run by one char.
            let step = scan.chars().next().map_or(1, char::len_utf8);
            (None, step)
        };

        match token {
            Some(token) => {
                if plain_len > 0 {
                    tokens.push(Token::Text(&rest[..plain_len]));
                }
                tokens.push(token);
                rest = &rest[plain_len + token_len..];
                plain_len = 0;
            }
            None => plain_len += token_len,
        }
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }
    tokens
}

/// One escape sequence for a run of flag letters. Codes are deduplicated
/// and sorted so equivalent flag spellings produce identical output.
fn escape_for(flags: &str) -> String {
    let mut codes: Vec<&str> = flags.chars().filter_map(style_code).collect();
    codes.sort_unstable();
    codes.dedup();
    format!("\x1b[{}m", codes.join(";"))
}

/// Renders markup to an ANSI-escaped string.
pub fn render(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 16);
    for token in tokenize(input) {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Open(flags) => out.push_str(&escape_for(flags)),
            Token::Close => out.push_str(RESET),
            Token::LiteralOpen => out.push('{'),
            Token::LiteralClose => out.push('}'),
        }
    }
    bounded(&out)
}

/// Removes all markup, leaving plain text with literal braces restored.
/// Used for width calculations and undecorated output.
pub fn strip(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for token in tokenize(input) {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::LiteralOpen => out.push('{'),
            Token::LiteralClose => out.push('}'),
            Token::Open(_) | Token::Close => {}
        }
    }
    out
}

fn bounded(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2 * RESET.len());
    out.push_str(RESET);
    for (i, line) in s.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(RESET);
        }
        out.push_str(line);
    }
    out.push_str(RESET);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_span() {
        let out = render("{r hello}");
        assert_eq!(out, format!("{RESET}\x1b[31mhello{RESET}{RESET}"));
    }

    #[test]
    fn plain_text_only_gets_the_reset_wrapping() {
        assert_eq!(render("plain"), format!("{RESET}plain{RESET}"));
    }

    #[test]
    fn escaped_braces_render_literally() {
        let out = render("\\{literal\\}");
        assert_eq!(out, format!("{RESET}{{literal}}{RESET}"));
        assert!(!out.contains("\x1b[31m"));
    }

    #[test]
    fn escaped_braces_are_not_mistaken_for_tags() {
        // `\{r ...` must not open a red span.
        let out = render("\\{r not a tag}");
        assert!(!out.contains("\x1b[31m"));
        assert!(out.contains("{r not a tag"));
    }

    #[test]
    fn multiple_flags_sort_and_dedup() {
        assert_eq!(render("{ir x}"), render("{ri x}"));
        assert_eq!(render("{rr x}"), render("{r x}"));
        let out = render("{ir x}");
        assert!(out.contains("\x1b[1;31mx"));
    }

    #[test]
    fn reset_reapplied_after_newlines() {
        let out = render("{g a\nb}");
        assert_eq!(out, format!("{RESET}\x1b[32ma\n{RESET}b{RESET}{RESET}"));
    }

    #[test]
    fn unknown_flags_stay_literal_but_brace_still_resets() {
        let out = render("{z zebra}");
        assert!(out.contains("{z zebra"));
        // Opening stays literal; the bare close still emits a reset.
        assert_eq!(out.matches(RESET).count(), 3);
    }

    #[test]
    fn open_tag_requires_a_space() {
        let out = render("{red}");
        // "red" are all valid flag letters but there is no space, so the
        // whole thing is literal text plus a trailing reset.
        assert!(out.contains("{red"));
        assert!(!out.contains("\x1b[31m"));
    }

    #[test]
    fn adjacent_and_nested_spans() {
        let out = render("{r a}{g b}");
        assert!(out.contains("\x1b[31ma"));
        assert!(out.contains("\x1b[32mb"));
    }

    #[test]
    fn strip_removes_markup_and_restores_braces() {
        assert_eq!(strip("{r hello} \\{x\\} {gi there}"), "hello {x} there");
        assert_eq!(strip("plain"), "plain");
    }

    #[test]
    fn empty_input() {
        assert_eq!(render(""), format!("{RESET}{RESET}"));
        assert_eq!(strip(""), "");
    }
}
