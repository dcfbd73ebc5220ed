#![warn(clippy::uninlined_format_args)]

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till, take_until, take_while1},
    character::complete::{char, satisfy, space0, space1, u64},
    combinator::{map_res, not, peek, recognize, rest},
    multi::many0,
    sequence::{delimited, terminated},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonField {
    Name,
    Food,
    Transport,
    Stay,
    Fuel,
    Etc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripKey {
    Start,
    End,
    Destination,
    Accommodation,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    Add,
    Remove(usize),
    Set {
        index: usize,
        field: PersonField,
        value: &'a str,
    },
    Trip {
        key: TripKey,
        value: &'a str,
    },
    Driver(Option<usize>),
    Calculate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementWithLine<'a> {
    pub line: usize,
    pub statement: Statement<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program<'a> {
    pub statements: Vec<StatementWithLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

fn keyword<'a>(
    word: &'static str,
) -> impl Parser<&'a str, Output = &'a str, Error = nom::error::Error<&'a str>> {
    terminated(tag_no_case(word), not(peek(satisfy(is_word_char))))
}

// Blank space and comments; never crosses a line because input is split per line.
fn sp(input: &str) -> IResult<&str, &str> {
    fn comment(input: &str) -> IResult<&str, &str> {
        delimited(tag("/*"), take_until("*/"), tag("*/")).parse(input)
    }

    fn line_comment(input: &str) -> IResult<&str, &str> {
        recognize((tag("//"), rest)).parse(input)
    }

    recognize(many0(alt((
        take_while1(|c: char| c.is_whitespace()),
        comment,
        line_comment,
    ))))
    .parse(input)
}

fn index(input: &str) -> IResult<&str, usize> {
    map_res(u64, usize::try_from).parse(input)
}

fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_till(|c| c == '"'), char('"')).parse(input)
}

// Rest of the line up to a `//` comment, trailing blanks trimmed. A `//` only opens a
// comment at the start or after whitespace, so `http://inn.example` stays whole.
fn bare(input: &str) -> IResult<&str, &str> {
    let end = input
        .match_indices("//")
        .map(|(idx, _)| idx)
        .find(|&idx| idx == 0 || input[..idx].ends_with(char::is_whitespace))
        .unwrap_or(input.len());
    let value = input[..end].trim_end();
    Ok((&input[value.len()..], value))
}

fn value(input: &str) -> IResult<&str, &str> {
    alt((quoted, bare)).parse(input)
}

fn person_field(input: &str) -> IResult<&str, PersonField> {
    alt((
        keyword("name").map(|_| PersonField::Name),
        keyword("food").map(|_| PersonField::Food),
        keyword("transport").map(|_| PersonField::Transport),
        keyword("stay").map(|_| PersonField::Stay),
        keyword("fuel").map(|_| PersonField::Fuel),
        keyword("etc").map(|_| PersonField::Etc),
    ))
    .parse(input)
}

fn trip_key(input: &str) -> IResult<&str, TripKey> {
    alt((
        keyword("start").map(|_| TripKey::Start),
        keyword("end").map(|_| TripKey::End),
        keyword("destination").map(|_| TripKey::Destination),
        keyword("accommodation").map(|_| TripKey::Accommodation),
        keyword("transport").map(|_| TripKey::Transport),
    ))
    .parse(input)
}

// add
fn add(input: &str) -> IResult<&str, Statement<'_>> {
    keyword("add").map(|_| Statement::Add).parse(input)
}

// remove {index}
fn remove(input: &str) -> IResult<&str, Statement<'_>> {
    (keyword("remove"), space1, index)
        .map(|(_, _, idx)| Statement::Remove(idx))
        .parse(input)
}

// set {index} {field} {value}
fn set(input: &str) -> IResult<&str, Statement<'_>> {
    (
        keyword("set"),
        space1,
        index,
        space1,
        person_field,
        space0,
        value,
    )
        .map(|(_, _, index, _, field, _, value)| Statement::Set {
            index,
            field,
            value,
        })
        .parse(input)
}

// trip {key} {value}
fn trip(input: &str) -> IResult<&str, Statement<'_>> {
    (keyword("trip"), space1, trip_key, space0, value)
        .map(|(_, _, key, _, value)| Statement::Trip { key, value })
        .parse(input)
}

// driver {index|none}
fn driver(input: &str) -> IResult<&str, Statement<'_>> {
    (
        keyword("driver"),
        space1,
        alt((keyword("none").map(|_| None), index.map(Some))),
    )
        .map(|(_, _, idx)| Statement::Driver(idx))
        .parse(input)
}

fn calculate(input: &str) -> IResult<&str, Statement<'_>> {
    keyword("calculate")
        .map(|_| Statement::Calculate)
        .parse(input)
}

fn statement(input: &str) -> IResult<&str, Statement<'_>> {
    alt((add, remove, set, trip, driver, calculate)).parse(input)
}

fn statement_with_sp(input: &str) -> IResult<&str, Statement<'_>> {
    (sp, statement, sp).map(|(_, stmt, _)| stmt).parse(input)
}

/// Parses a planner script, one command per line.
pub fn parse_program(input: &str) -> Result<Program<'_>, ParseError> {
    let mut statements = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let (rest, _) = sp(line).map_err(|e| ParseError::SyntaxError {
            line: idx + 1,
            detail: i18n::syntax_error_detail(e),
        })?;
        if rest.trim().is_empty() {
            continue;
        }
        match statement_with_sp(rest) {
            Ok((rest, stmt)) => {
                if !rest.trim().is_empty() {
                    return Err(ParseError::SyntaxError {
                        line: idx + 1,
                        detail: i18n::syntax_error_unparsed_detail(rest.trim()),
                    });
                }
                statements.push(StatementWithLine {
                    line: idx + 1,
                    statement: stmt,
                });
            }
            Err(e) => {
                return Err(ParseError::SyntaxError {
                    line: idx + 1,
                    detail: i18n::syntax_error_detail(e),
                });
            }
        }
    }

    Ok(Program { statements })
}
