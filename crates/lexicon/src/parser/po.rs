//! PO (portable object) text catalog parser.
//!
//! Parses the subset of the GNU gettext PO format that carries translations:
//! comments and flags, `msgctxt`, `msgid`, `msgid_plural`, `msgstr` and
//! `msgstr[N]`, with multi-line string continuation and C escapes.
//! Obsolete (`#~`) and previous-message (`#|`) lines are treated as comments.

use winnow::ascii::digit1;
use winnow::combinator::{alt, cut_err, delimited, opt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{any, none_of, take_while};

use super::ast::PoEntry;
use super::error::ParseError;

/// Upper bound on `msgstr[N]` indices; no CLDR language uses more than six.
const MAX_PLURAL_FORMS: usize = 16;

/// Parse an entire `.po` file into entries, in file order.
///
/// A leading byte order mark is skipped.
pub fn parse_po(input: &str) -> Result<Vec<PoEntry>, ParseError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut remaining = input;
    match file(&mut remaining) {
        Ok(entries) if remaining.is_empty() => Ok(entries),
        Ok(_) | Err(_) => Err(error_at(input, remaining)),
    }
}

/// Build an error pointing at the first unconsumed input.
fn error_at(original: &str, remaining: &str) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    let snippet: String = remaining
        .split('\n')
        .next()
        .unwrap_or_default()
        .trim_end()
        .chars()
        .take(32)
        .collect();
    if snippet.is_empty() && remaining.trim().is_empty() {
        ParseError::UnexpectedEof { line, column }
    } else {
        ParseError::Syntax {
            line,
            column,
            message: format!("unexpected input: '{snippet}'"),
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

fn file(input: &mut &str) -> ModalResult<Vec<PoEntry>> {
    let entries: Vec<PoEntry> = repeat(0.., entry).parse_next(input)?;
    preamble(input)?;
    Ok(entries)
}

/// Parse one entry with its leading comments.
///
/// Once `msgid` has been seen the rest of the entry is mandatory, so failures
/// after that point are reported where they happen instead of backtracking.
fn entry(input: &mut &str) -> ModalResult<PoEntry> {
    let flags = preamble(input)?;

    let context = opt(terminated(keyword("msgctxt"), blank)).parse_next(input)?;
    let id = if context.is_some() {
        cut_err(keyword("msgid")).parse_next(input)?
    } else {
        keyword("msgid").parse_next(input)?
    };
    blank(input)?;

    let id_plural = opt(terminated(keyword("msgid_plural"), blank)).parse_next(input)?;
    let translations = if id_plural.is_some() {
        cut_err(plural_translations).parse_next(input)?
    } else {
        vec![cut_err(keyword("msgstr")).parse_next(input)?]
    };

    Ok(PoEntry {
        flags,
        context,
        id,
        id_plural,
        translations,
    })
}

/// Skip blank and comment lines, collecting `#,` flags.
fn preamble(input: &mut &str) -> ModalResult<Vec<String>> {
    let lines: Vec<Vec<String>> = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).map(|_| Vec::new()),
            comment_line,
        )),
    )
    .parse_next(input)?;
    Ok(lines.into_iter().flatten().collect())
}

/// Parse a `#` comment line; returns its flags if it is a `#,` line.
fn comment_line(input: &mut &str) -> ModalResult<Vec<String>> {
    let body: &str = preceded('#', take_while(0.., |c: char| c != '\n')).parse_next(input)?;
    let flags = match body.strip_prefix(',') {
        Some(flags) => flags
            .split(',')
            .map(str::trim)
            .filter(|flag| !flag.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };
    Ok(flags)
}

/// Parser for `<name> "value"`.
fn keyword<'i>(name: &'static str) -> impl FnMut(&mut &'i str) -> ModalResult<String> {
    move |input: &mut &'i str| preceded((name, inline_space), string_value).parse_next(input)
}

/// Parse `msgstr[N] "..."` lines into forms ordered by index.
fn plural_translations(input: &mut &str) -> ModalResult<Vec<String>> {
    let mut indexed: Vec<(usize, String)> =
        repeat(1.., terminated(indexed_msgstr, blank)).parse_next(input)?;
    indexed.sort_by_key(|(index, _)| *index);

    let len = indexed.last().map_or(0, |(index, _)| index + 1);
    let mut forms = vec![String::new(); len];
    for (index, text) in indexed {
        forms[index] = text;
    }
    Ok(forms)
}

fn indexed_msgstr(input: &mut &str) -> ModalResult<(usize, String)> {
    let index = delimited(
        "msgstr[",
        digit1
            .try_map(str::parse::<usize>)
            .verify(|index: &usize| *index < MAX_PLURAL_FORMS),
        ']',
    )
    .parse_next(input)?;
    inline_space(input)?;
    let text = string_value(input)?;
    Ok((index, text))
}

/// Parse a string value: one quoted string, optionally continued by further
/// quoted strings on the following lines.
fn string_value(input: &mut &str) -> ModalResult<String> {
    let mut value = quoted(input)?;
    let continuation: Vec<String> = repeat(0.., preceded(blank1, quoted)).parse_next(input)?;
    for part in continuation {
        value.push_str(&part);
    }
    Ok(value)
}

fn quoted(input: &mut &str) -> ModalResult<String> {
    delimited('"', repeat(0.., string_char), '"').parse_next(input)
}

fn string_char(input: &mut &str) -> ModalResult<char> {
    alt((preceded('\\', escape), none_of(['"', '\\', '\n']))).parse_next(input)
}

fn escape(input: &mut &str) -> ModalResult<char> {
    any.verify_map(|c: char| match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '"' => Some('"'),
        '\\' => Some('\\'),
        'a' => Some('\u{7}'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'v' => Some('\u{b}'),
        _ => None,
    })
    .parse_next(input)
}

fn inline_space<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., [' ', '\t']).parse_next(input)
}

fn blank(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

fn blank1(input: &mut &str) -> ModalResult<()> {
    take_while(1.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}
