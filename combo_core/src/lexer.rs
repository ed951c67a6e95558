use std::ops::Range;

use logos::Logos;

/// Raw tokens produced by logos for flat tokenization of a document unit.
///
/// Every byte of the input belongs to exactly one of the two classes, so the
/// token stream covers the unit without gaps.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[regex(r"[A-Za-z0-9_]+")]
	Ident,
	#[regex(r"[^A-Za-z0-9_]+")]
	Text,
}

/// A span of a document unit, classified once so substitution never has to
/// rescan the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
	/// Copied to the output unchanged.
	Literal(Range<usize>),
	/// A maximal run of identifier characters. Replaced when it equals a
	/// parameter name, copied otherwise.
	Ident(Range<usize>),
}

/// Split `source` into alternating literal and identifier segments.
///
/// Because identifier runs are maximal, a parameter name can only ever match
/// a whole token: `NAME` never matches inside `NAMESPACE` or `MY_NAME`.
pub(crate) fn tokenize(source: &str) -> Vec<Segment> {
	let mut segments: Vec<Segment> = Vec::new();

	for (token, span) in RawToken::lexer(source).spanned() {
		match token {
			Ok(RawToken::Ident) => segments.push(Segment::Ident(span)),
			// Unrecognized input is kept verbatim.
			Ok(RawToken::Text) | Err(()) => {
				match segments.last_mut() {
					Some(Segment::Literal(previous)) if previous.end == span.start => {
						previous.end = span.end;
					}
					_ => segments.push(Segment::Literal(span)),
				}
			}
		}
	}

	segments
}
