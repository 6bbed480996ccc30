//! Line-oriented parser for Lanechart scripts.
//!
//! Every non-blank line is one statement: a keyword, then (for most keywords)
//! a lane word, then label text. Label text is split on `|` into separate,
//! trimmed lines.
//!
//! ```text
//! title   Login flow
//! lane A  SL App
//! lane B  Core | Permissions API
//! full AB get_user_permissions( | token)
//! self B  check cache
//! dash BA permissions
//! stop B
//! ```
//!
//! The parser validates keywords, lane name shapes, label presence and that
//! every referenced lane was declared earlier, so the layout engine can trust
//! its input. A bad line is reported and skipped; parsing continues so that
//! every problem in the script is reported at once.

use indexmap::IndexMap;
use log::{debug, trace};
use winnow::{
    Parser as _,
    ascii::space0,
    combinator::preceded,
    error::ModalResult,
    token::{one_of, rest, take_till},
};

use lanechart_core::{
    identifier::Id,
    statement::{Keyword, Statement},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

/// One trimmed, non-blank source line and where it lives in the source.
struct SourceLine<'a> {
    number: usize,
    text: &'a str,
    offset: usize,
}

impl<'a> SourceLine<'a> {
    /// Span of the whole statement.
    fn span(&self) -> Span {
        Span::new(self.offset..self.offset + self.text.len())
    }

    /// Span of `part`, which must be a sub-slice of `self.text`.
    fn span_of(&self, part: &str) -> Span {
        let start = self.offset + (part.as_ptr() as usize - self.text.as_ptr() as usize);
        Span::new(start..start + part.len())
    }

    fn error(&self, code: ErrorCode, message: impl AsRef<str>) -> Diagnostic {
        Diagnostic::error(format!("line {}: {}", self.number, message.as_ref())).with_code(code)
    }
}

/// A single word: a run of non-whitespace characters.
fn word<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_till(1.., char::is_whitespace).parse_next(input)
}

/// First word and everything after it, with separating blanks dropped.
fn head_and_tail<'a>(input: &mut &'a str) -> ModalResult<(&'a str, &'a str)> {
    (preceded(space0, word), preceded(space0, rest)).parse_next(input)
}

fn lane_name(input: &mut &str) -> ModalResult<char> {
    one_of('A'..='Z').parse_next(input)
}

fn lane_pair(input: &mut &str) -> ModalResult<(char, char)> {
    (lane_name, lane_name).parse_next(input)
}

/// Splits `first word` / `remainder` of `text`; `None` if there is no word.
fn split_word(text: &str) -> Option<(&str, &str)> {
    let mut input = text;
    head_and_tail.parse_next(&mut input).ok()
}

fn keyword_from_str(word: &str) -> Option<Keyword> {
    match word {
        "title" => Some(Keyword::Title),
        "lane" => Some(Keyword::Lane),
        "full" => Some(Keyword::Full),
        "dash" => Some(Keyword::Dash),
        "self" => Some(Keyword::SelfCall),
        "stop" => Some(Keyword::Stop),
        _ => None,
    }
}

fn label_lines(label: &str) -> Vec<String> {
    label.split('|').map(|line| line.trim().to_string()).collect()
}

/// Parser state: lanes declared so far, with the span of their declaration.
#[derive(Default)]
struct ScriptParser {
    declared: IndexMap<Id, Span>,
}

impl ScriptParser {
    fn parse_line(&mut self, line: &SourceLine<'_>) -> Result<Statement, Diagnostic> {
        let (keyword_word, tail) = split_word(line.text)
            .filter(|(_, tail)| !tail.is_empty())
            .ok_or_else(|| {
                line.error(ErrorCode::E100, "must have at least 2 words")
                    .with_label(line.span(), "incomplete statement")
            })?;

        let keyword = keyword_from_str(keyword_word).ok_or_else(|| {
            line.error(
                ErrorCode::E101,
                format!("unrecognized keyword: {keyword_word}"),
            )
            .with_label(line.span_of(keyword_word), "unknown keyword")
            .with_help("expected one of `title`, `lane`, `full`, `dash`, `self`, `stop`")
        })?;

        let statement = match keyword {
            Keyword::Title => Statement::title(label_lines(tail)),
            Keyword::Lane => {
                let (lane_word, label) = self.lane_and_label(line, tail)?;
                let lane = single_lane(line, lane_word)?;
                let label = required_label(line, label)?;
                self.declare(line, lane, lane_word)?;
                Statement::lane(lane, label)
            }
            Keyword::Full | Keyword::Dash => {
                let (lanes_word, label) = self.lane_and_label(line, tail)?;
                let (from, to) = lane_pair_of(line, lanes_word)?;
                let label = required_label(line, label)?;
                self.require_declared(line, from, lanes_word)?;
                self.require_declared(line, to, lanes_word)?;
                if keyword == Keyword::Full {
                    Statement::full(from, to, label)
                } else {
                    Statement::dash(from, to, label)
                }
            }
            Keyword::SelfCall => {
                let (lane_word, label) = self.lane_and_label(line, tail)?;
                let lane = single_lane(line, lane_word)?;
                let label = required_label(line, label)?;
                self.require_declared(line, lane, lane_word)?;
                Statement::self_call(lane, label)
            }
            Keyword::Stop => {
                let (lane_word, _) = self.lane_and_label(line, tail)?;
                let lane = single_lane(line, lane_word)?;
                self.require_declared(line, lane, lane_word)?;
                Statement::stop(lane)
            }
        };

        Ok(statement.with_source_line(line.number))
    }

    fn lane_and_label<'a>(
        &self,
        line: &SourceLine<'_>,
        tail: &'a str,
    ) -> Result<(&'a str, &'a str), Diagnostic> {
        split_word(tail).ok_or_else(|| {
            line.error(ErrorCode::E100, "must have at least 2 words")
                .with_label(line.span(), "incomplete statement")
        })
    }

    fn declare(&mut self, line: &SourceLine<'_>, lane: Id, lane_word: &str) -> Result<(), Diagnostic> {
        let span = line.span_of(lane_word);
        if let Some(first) = self.declared.get(&lane) {
            return Err(line
                .error(ErrorCode::E201, format!("Lane already declared: {lane}"))
                .with_label(span, "duplicate declaration")
                .with_secondary_label(*first, "first declared here"));
        }
        self.declared.insert(lane, span);
        Ok(())
    }

    fn require_declared(
        &self,
        line: &SourceLine<'_>,
        lane: Id,
        lane_word: &str,
    ) -> Result<(), Diagnostic> {
        if self.declared.contains_key(&lane) {
            return Ok(());
        }
        Err(line
            .error(ErrorCode::E200, format!("Unknown lane: {lane}"))
            .with_label(line.span_of(lane_word), format!("lane `{lane}` is not declared"))
            .with_help(format!("declare it first with `lane {lane} <label>`")))
    }
}

fn single_lane(line: &SourceLine<'_>, lane_word: &str) -> Result<Id, Diagnostic> {
    lane_name.parse(lane_word).map(Id::from).map_err(|_| {
        line.error(
            ErrorCode::E102,
            "Lane name must be single, upper case letter",
        )
        .with_label(line.span_of(lane_word), "invalid lane name")
    })
}

fn lane_pair_of(line: &SourceLine<'_>, lanes_word: &str) -> Result<(Id, Id), Diagnostic> {
    lane_pair
        .parse(lanes_word)
        .map(|(from, to)| (Id::from(from), Id::from(to)))
        .map_err(|_| {
            line.error(
                ErrorCode::E103,
                "Lanes specified must be two, upper case letters",
            )
            .with_label(line.span_of(lanes_word), "invalid lane pair")
            .with_help("write the source and destination lanes together, e.g. `AB`")
        })
}

fn required_label(line: &SourceLine<'_>, label: &str) -> Result<Vec<String>, Diagnostic> {
    if label.is_empty() {
        return Err(line
            .error(ErrorCode::E104, "Label text missing")
            .with_label(line.span(), "no label after the lane"));
    }
    Ok(label_lines(label))
}

/// Splits `source` into trimmed, non-blank lines with their byte offsets.
fn source_lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0;
    source
        .split_inclusive('\n')
        .enumerate()
        .filter_map(move |(idx, raw)| {
            let line_start = offset;
            offset += raw.len();
            let text = raw.trim_end_matches(['\n', '\r']);
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            let leading = text.len() - text.trim_start().len();
            Some(SourceLine {
                number: idx + 1,
                text: trimmed,
                offset: line_start + leading,
            })
        })
}

/// Parses a whole script into statements.
pub(crate) fn parse_script(source: &str) -> Result<Vec<Statement>, ParseError> {
    let mut parser = ScriptParser::default();
    let mut collector = DiagnosticCollector::new();
    let mut statements = Vec::new();

    for line in source_lines(source) {
        match parser.parse_line(&line) {
            Ok(statement) => {
                trace!(line = line.number, keyword = statement.keyword().as_str(); "Parsed statement");
                statements.push(statement);
            }
            Err(diagnostic) => collector.emit(diagnostic),
        }
    }

    collector.finish()?;
    debug!(
        statements = statements.len(),
        lanes = parser.declared.len();
        "Script parsed"
    );
    Ok(statements)
}
