use crate::{Definition, ParsedDocument, Span};

/// Find the top-level definition whose span contains `span`.
///
/// Definitions are scanned in source order and the first match wins. Top-level
/// definitions never overlap in a parsed document, so that is the only match;
/// for hand-built documents with overlapping spans the earlier definition is
/// returned. Definitions without a span are skipped.
#[must_use]
pub fn locate(document: &ParsedDocument, span: Span) -> Option<&Definition> {
    document
        .definitions()
        .iter()
        .find(|definition| match definition.span() {
            Some(definition_span) => definition_span.contains(span),
            None => {
                tracing::debug!("Skipping definition without location information");
                false
            }
        })
}
