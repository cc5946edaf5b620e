use graphql_console::{
    outline, Definition, DefinitionKind, LineIndex, ParsedDocument, Position, Resolution,
    ResolveError, Resolver, SelectorBuilder,
};
use graphql_console_config::load_config_from_str;
use insta::assert_snapshot;
use std::fs;
use std::path::Path;

/// Load a document from fixtures
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).expect("Failed to read fixture")
}

fn selector_at(text: &str, line: usize, character: usize) -> Option<String> {
    match Resolver::default()
        .resolve(text, Position::new(line, character))
        .expect("resolution should not fail")
    {
        Resolution::Found(target) => Some(target.selector),
        Resolution::NotFound => None,
    }
}

#[test]
fn test_outline_snapshot() {
    let text = load_fixture("explorer.graphql");
    let parsed = ParsedDocument::parse(&text).unwrap();

    let rendered = outline(&parsed, &SelectorBuilder::default())
        .iter()
        .map(|entry| {
            format!(
                "{} {} [{}] {}",
                entry.kind, entry.name, entry.span, entry.selector
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    assert_snapshot!(rendered, @r"
    query GetUser [36..103] .graphiql-explorer-root #query-GetUser
    mutation unknown [105..126] .graphiql-explorer-root #mutation-unknown
    subscription OnMessage [128..179] .graphiql-explorer-root #subscription-OnMessage
    fragment UserFields [181..224] .graphiql-explorer-root #fragment-UserFields
    ");
}

#[test]
fn test_click_inside_each_definition() {
    let text = load_fixture("explorer.graphql");

    // On the fragment spread inside the query body
    assert_eq!(
        selector_at(&text, 4, 8).as_deref(),
        Some(".graphiql-explorer-root #query-GetUser")
    );
    assert_eq!(
        selector_at(&text, 9, 3).as_deref(),
        Some(".graphiql-explorer-root #mutation-unknown")
    );
    assert_eq!(
        selector_at(&text, 14, 5).as_deref(),
        Some(".graphiql-explorer-root #subscription-OnMessage")
    );
    assert_eq!(
        selector_at(&text, 19, 2).as_deref(),
        Some(".graphiql-explorer-root #fragment-UserFields")
    );
}

#[test]
fn test_click_on_definition_edges() {
    let text = load_fixture("explorer.graphql");

    // Right after the closing brace of the query
    assert_eq!(
        selector_at(&text, 6, 1).as_deref(),
        Some(".graphiql-explorer-root #query-GetUser")
    );
    // First column of the `mutation` keyword
    assert_eq!(
        selector_at(&text, 8, 0).as_deref(),
        Some(".graphiql-explorer-root #mutation-unknown")
    );
    // Far past the end of a line is clamped to its end
    assert_eq!(
        selector_at(&text, 12, 500).as_deref(),
        Some(".graphiql-explorer-root #subscription-OnMessage")
    );
}

#[test]
fn test_click_outside_definitions() {
    let text = load_fixture("explorer.graphql");

    // Header comment
    assert_eq!(selector_at(&text, 0, 5), None);
    // Blank lines between definitions
    assert_eq!(selector_at(&text, 7, 0), None);
    assert_eq!(selector_at(&text, 17, 0), None);
}

#[test]
fn test_unparsable_document() {
    let text = "query GetUser {\n  user(id: \n";

    let error = Resolver::default()
        .resolve(text, Position::new(0, 8))
        .unwrap_err();

    let ResolveError::Parse(failure) = &error else {
        panic!("expected a parse failure, got {error:?}");
    };
    assert!(!failure.errors.is_empty());
    assert_eq!(error.diagnostics(text).len(), failure.errors.len());
}

#[test]
fn test_position_on_missing_line() {
    let text = load_fixture("explorer.graphql");

    let result = Resolver::default().resolve(&text, Position::new(100, 0));

    assert_eq!(
        result,
        Err(ResolveError::InvalidPosition {
            line: 100,
            line_count: 23
        })
    );
}

#[test]
fn test_definitions_without_spans_are_never_matched() {
    let text = "query A { a }\nquery B { b }";
    let parsed = ParsedDocument::parse(text).unwrap();

    // Drop the location of the first definition
    let definitions = parsed
        .definitions()
        .iter()
        .enumerate()
        .map(|(index, definition)| match definition {
            Definition::Operation(op) if index == 0 => {
                let mut op = op.clone();
                op.span = None;
                Definition::Operation(op)
            }
            other => other.clone(),
        })
        .collect();
    let degraded = ParsedDocument::new(definitions);
    let resolver = Resolver::default();

    assert_eq!(
        resolver.resolve_parsed(text, &degraded, Position::new(0, 7)),
        Ok(Resolution::NotFound)
    );

    let resolution = resolver
        .resolve_parsed(text, &degraded, Position::new(1, 7))
        .unwrap();
    let target = resolution.target().unwrap();
    assert_eq!(target.kind, DefinitionKind::Query);
    assert_eq!(target.name, "B");
}

#[test]
fn test_configured_root_selector() {
    let config = load_config_from_str(
        "schema: http://localhost:4000/graphql/relay\nexplorer:\n  rootSelector: .docs-explorer\n",
        Path::new(".graphqlrc.yml"),
    )
    .unwrap();
    let (_, project) = config.select_project(None).unwrap();
    let resolver = Resolver::new(SelectorBuilder::from_config(&project.explorer));

    let resolution = resolver
        .resolve("fragment UserFields on User { id }", Position::new(0, 12))
        .unwrap();

    assert_eq!(
        resolution.target().map(|target| target.selector.as_str()),
        Some(".docs-explorer #fragment-UserFields")
    );
}

#[test]
fn test_offsets_roundtrip_over_fixture() {
    let text = load_fixture("explorer.graphql");
    let index = LineIndex::new(&text);

    for line in 0..index.line_count() {
        let len = index.line_len(line).unwrap();
        for character in 0..=len + 2 {
            let offset = index
                .position_to_offset(Position::new(line, character))
                .unwrap();
            assert_eq!(
                index.offset_to_position(offset),
                Position::new(line, character.min(len))
            );
        }
    }
}
