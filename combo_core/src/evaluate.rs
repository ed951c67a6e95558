use crate::AssignmentSource;
use crate::CancellationToken;
use crate::CombinationStream;
use crate::ComboError;
use crate::ComboResult;
use crate::GenerationMode;
use crate::ParameterDomain;
use crate::TemplateEngine;
use crate::join_documents;

/// Expand `template` into every combination of `domain`.
///
/// Returns the distinct rendered documents in first-seen order. Fails with
/// [`ComboError::NoParameters`] for an empty domain and with
/// [`ComboError::Canceled`] once `token` is cancelled.
#[tracing::instrument(level = "debug", skip_all, fields(mode = ?mode))]
pub fn evaluate(
	template: &str,
	domain: ParameterDomain,
	mode: GenerationMode,
	token: &CancellationToken,
) -> ComboResult<Vec<String>> {
	let mut stream = CombinationStream::new(domain, mode);
	evaluate_source(template, &mut stream, token)
}

/// Like [`evaluate`], but joins the documents into a single YAML stream with
/// [`join_documents`].
pub fn evaluate_to_string(
	template: &str,
	domain: ParameterDomain,
	mode: GenerationMode,
	token: &CancellationToken,
) -> ComboResult<String> {
	let documents = evaluate(template, domain, mode, token)?;
	Ok(join_documents(&documents))
}

/// Drive `source` to exhaustion, applying each assignment to `template`.
///
/// The token is checked before every pull, so an assignment is either fully
/// applied or not applied at all. Errors from the source abort the loop and
/// are returned unchanged.
pub fn evaluate_source<S>(
	template: &str,
	source: &mut S,
	token: &CancellationToken,
) -> ComboResult<Vec<String>>
where
	S: AssignmentSource + ?Sized,
{
	let mut engine = TemplateEngine::new(template);
	let mut processed = 0usize;

	loop {
		if token.is_cancelled() {
			tracing::debug!(
				processed,
				rendered = engine.len(),
				"evaluation canceled"
			);
			return Err(ComboError::Canceled {
				processed,
				rendered: engine.len(),
			});
		}

		let Some(assignment) = source.next_assignment()? else {
			break;
		};

		engine.apply(&assignment);
		processed += 1;
		tracing::trace!(processed, rendered = engine.len(), ?assignment, "applied");
	}

	tracing::debug!(
		processed,
		units = engine.documents().len(),
		rendered = engine.len(),
		"evaluation finished"
	);

	Ok(engine.into_result())
}
