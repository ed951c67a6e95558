use indexmap::IndexSet;

use crate::Assignment;
use crate::ParameterDomain;
use crate::lexer::Segment;
use crate::lexer::tokenize;

/// The line that separates documents in a template (a YAML stream
/// separator).
pub const DOCUMENT_SEPARATOR: &str = "---";

/// One separator-delimited, trimmed, non-blank section of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUnit {
	source: String,
	segments: Vec<Segment>,
}

impl DocumentUnit {
	fn new(source: String) -> Self {
		let segments = tokenize(&source);
		Self { source, segments }
	}

	/// The unit's text as written in the template.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Returns true if `name` appears as a whole token in this unit.
	pub fn references(&self, name: &str) -> bool {
		self.identifiers().any(|ident| ident == name)
	}

	fn identifiers(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().filter_map(|segment| {
			match segment {
				Segment::Ident(span) => Some(&self.source[span.clone()]),
				Segment::Literal(_) => None,
			}
		})
	}

	/// Substitute every whole-token occurrence of an assigned name with its
	/// value. Substituted values are never rescanned.
	pub(crate) fn render(&self, assignment: &Assignment) -> String {
		let mut output = String::with_capacity(self.source.len());

		for segment in &self.segments {
			match segment {
				Segment::Literal(span) => output.push_str(&self.source[span.clone()]),
				Segment::Ident(span) => {
					let ident = &self.source[span.clone()];
					output.push_str(assignment.get(ident).map_or(ident, String::as_str));
				}
			}
		}

		output
	}
}

/// Distinct non-blank documents in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct RenderedSet {
	documents: IndexSet<String>,
}

impl RenderedSet {
	/// Add `document` unless it is blank or already present. Returns whether
	/// it was added.
	pub fn insert(&mut self, document: String) -> bool {
		if document.trim().is_empty() {
			return false;
		}

		self.documents.insert(document)
	}

	pub fn contains(&self, document: &str) -> bool {
		self.documents.contains(document)
	}

	/// The documents in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.documents.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}

	pub fn into_vec(self) -> Vec<String> {
		self.documents.into_iter().collect()
	}
}

/// Applies assignments to a template's document units and accumulates the
/// distinct results across every call to [`TemplateEngine::apply`].
#[derive(Debug, Clone, Default)]
pub struct TemplateEngine {
	units: Vec<DocumentUnit>,
	rendered: RenderedSet,
}

impl TemplateEngine {
	pub fn new(template: &str) -> Self {
		let units = split_documents(template)
			.into_iter()
			.map(DocumentUnit::new)
			.collect();

		Self {
			units,
			rendered: RenderedSet::default(),
		}
	}

	pub fn documents(&self) -> &[DocumentUnit] {
		&self.units
	}

	/// Render every document unit with `assignment` and keep the results that
	/// have not been seen in this or any earlier call.
	pub fn apply(&mut self, assignment: &Assignment) {
		for unit in &self.units {
			self.rendered.insert(unit.render(assignment));
		}
	}

	/// The distinct rendered documents so far, in first-seen order.
	pub fn result(&self) -> &RenderedSet {
		&self.rendered
	}

	pub fn into_result(self) -> Vec<String> {
		self.rendered.into_vec()
	}

	pub fn len(&self) -> usize {
		self.rendered.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rendered.is_empty()
	}

	/// Names of parameters in `domain` that no document unit references.
	/// Such parameters only multiply the work without changing the output.
	pub fn unreferenced_parameters(&self, domain: &ParameterDomain) -> Vec<String> {
		domain
			.parameters()
			.iter()
			.map(crate::Parameter::name)
			.filter(|name| !self.units.iter().any(|unit| unit.references(name)))
			.map(ToString::to_string)
			.collect()
	}
}

/// Split template text into trimmed, non-blank document units.
///
/// A separator is a line that reads `---`, ignoring trailing whitespace.
pub fn split_documents(template: &str) -> Vec<String> {
	let normalized = normalize_line_endings(template);
	let mut documents = Vec::new();
	let mut current = String::new();

	for line in normalized.split('\n') {
		if line.trim_end() == DOCUMENT_SEPARATOR {
			push_document(&mut documents, &current);
			current.clear();
		} else {
			current.push_str(line);
			current.push('\n');
		}
	}

	push_document(&mut documents, &current);
	documents
}

fn push_document(documents: &mut Vec<String>, raw: &str) {
	let trimmed = raw.trim();
	if !trimmed.is_empty() {
		documents.push(trimmed.to_string());
	}
}

/// Join rendered documents into a single YAML stream. Every document is
/// preceded by a separator line. An empty list produces an empty string.
pub fn join_documents(documents: &[String]) -> String {
	if documents.is_empty() {
		return String::new();
	}

	let separator = format!("\n{DOCUMENT_SEPARATOR}\n");
	format!("{DOCUMENT_SEPARATOR}\n{}", documents.join(&separator))
}

/// Normalize CRLF line endings to LF. A lone `\r` is content and is kept.
pub fn normalize_line_endings(content: &str) -> String {
	content.replace("\r\n", "\n")
}
