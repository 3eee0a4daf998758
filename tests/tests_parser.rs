//! Parser Tests - Declarations, Cardinalities and Error Recovery
//!
//! Tests that each surface form builds the expected model records and that
//! malformed input is reported without losing the declarations around it.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use rstest::rstest;
use tonto::model::{
    AttributeType, Bound, Cardinality, ClassStereotype, NativeType, RelationStereotype,
    RelationSymbol,
};
use tonto::parser::{AstNode, Declaration, ErrorCode, Severity, SourceFile, parse};

fn assert_clean(input: &str) {
    let parsed = parse(input);
    assert!(
        parsed.errors.is_empty(),
        "unexpected errors for {input:?}: {:#?}",
        parsed.errors
    );
    assert!(SourceFile::cast(parsed.syntax()).is_some());
}

fn codes(input: &str) -> Vec<ErrorCode> {
    parse(input).errors.iter().map(|e| e.code).collect()
}

// ============================================================================
// Surface Forms
// ============================================================================

#[rstest]
#[case("package P\nkind Person")]
#[case("import Base\nimport Other\npackage P\nkind Person")]
#[case("package P\nrole Student specializes Person")]
#[case("package P\nkind Person { name: string [1] birth: date }")]
#[case("package P\nkind Person { name: string { const ordered } nick: string [0..*] { derived, subsets name } }")]
#[case("package P\nkind Person { address: AddressDataType home: House }")]
#[case("package P\ndatatype AddressDataType { street: string number: number }")]
#[case("package P\ndatatype Money")]
#[case("package P\nenum Color { red, green, blue }")]
#[case("package P\ndisjoint complete genset G { general Person specifics A, B }")]
#[case("package P\ngenset { specifics A general Person }")]
#[case("package P\ndisjoint genset G where A, B specializes Person")]
#[case("package P\n@mediation relation Marriage [1..*] -- [2] Spouse")]
#[case("package P\nrelation Person [1] <>-- [0..*] Car")]
#[case("package P\nmaterial relation Person [1] -- owns -- [*] Car")]
#[case("package P\nrelator Marriage { @mediation [1] -- [1] Husband mediation [1] -- [1] Wife }")]
#[case("package P\nkind Person {}\n// trailing comment\n/* and a block */")]
fn test_surface_forms(#[case] input: &str) {
    assert_clean(input);
}

// ============================================================================
// Model Records
// ============================================================================

#[test]
fn test_class_record() {
    let model = parse("package Shop\nrole Customer specializes Person { id: number [1] }").model;
    assert_eq!(model.package.as_deref(), Some("Shop"));

    let customer = &model.classes[0];
    assert_eq!(customer.name, "Customer");
    assert_eq!(customer.stereotype, ClassStereotype::Role);
    assert_eq!(customer.specializes.as_deref(), Some("Person"));
    assert_eq!(customer.line, 2);
    assert_eq!(customer.attributes[0].ty, AttributeType::Native(NativeType::Number));
    assert_eq!(customer.attributes[0].cardinality, Some(Cardinality::exactly(1)));
}

#[rstest]
#[case("[3]", Cardinality::exactly(3))]
#[case("[0..1]", Cardinality::range(0, 1))]
#[case("[2..*]", Cardinality::at_least(2))]
#[case("[*]", Cardinality::many())]
fn test_cardinality_normalization(#[case] card: &str, #[case] expected: Cardinality) {
    let input = format!("package P\nrelation Person {card} -- [1] Car");
    let parsed = parse(&input);
    assert!(parsed.errors.is_empty(), "{:#?}", parsed.errors);
    assert_eq!(parsed.model.relations[0].domain_cardinality, expected);
}

#[test]
fn test_unbounded_bounds() {
    let relation = &parse("package P\nrelation A [2..*] -- [*] B").model.relations[0];
    assert_eq!(relation.domain_cardinality.lower, Bound::Finite(2));
    assert!(relation.domain_cardinality.upper.is_unbounded());
    assert!(relation.range_cardinality.lower.is_unbounded());
}

#[test]
fn test_inverted_cardinality_is_a_warning() {
    let parsed = parse("package P\nkind Person { nick: string [3..1] }");
    assert_eq!(parsed.errors.len(), 1);
    assert_eq!(parsed.errors[0].code, ErrorCode::E0206);
    assert_eq!(parsed.errors[0].severity, Severity::Warning);
    assert!(parsed.ok());
    assert_eq!(
        parsed.model.classes[0].attributes[0].cardinality,
        Some(Cardinality::range(3, 1))
    );
}

#[rstest]
#[case("--", "--", RelationSymbol::Plain)]
#[case("<>--", "--", RelationSymbol::Contains)]
#[case("--", "--<>", RelationSymbol::ContainedBy)]
#[case("--<>", "<>--", RelationSymbol::ContainedBy)]
fn test_named_relation_symbol(
    #[case] first: &str,
    #[case] second: &str,
    #[case] expected: RelationSymbol,
) {
    let input = format!("package P\nrelation A [1] {first} links {second} [1] B");
    let relation = &parse(&input).model.relations[0];
    assert_eq!(relation.symbol, expected);
    assert_eq!(relation.name.as_deref(), Some("links"));
}

#[test]
fn test_internal_relation_record() {
    let model = parse("package P\nrelator Marriage { @mediation [1] -- [1..2] Spouse }").model;
    let relation = &model.classes[0].internal_relations[0];
    assert_eq!(relation.stereotype, Some(RelationStereotype::Mediation));
    assert_eq!(relation.target, "Spouse");
    assert_eq!(relation.range_cardinality, Cardinality::range(1, 2));
}

#[test]
fn test_genset_forms_agree() {
    let block = parse("package P\ndisjoint genset G { general Animal specifics Dog, Cat }").model;
    let inline = parse("package P\ndisjoint genset G where Dog, Cat specializes Animal").model;
    assert_eq!(block.gensets, inline.gensets);
    assert!(block.gensets[0].disjoint);
    assert!(!block.gensets[0].complete);
}

#[test]
fn test_stereotype_words_as_attribute_names() {
    let parsed = parse(
        "package P\n\
         kind Product {\n\
         \x20 value: number\n\
         \x20 quantity: number\n\
         \x20 name: string\n\
         }\n\
         kind Other",
    );
    assert!(parsed.errors.is_empty(), "{:#?}", parsed.errors);
    assert_eq!(parsed.model.classes.len(), 2);
    let names: Vec<_> = parsed.model.classes[0]
        .attributes
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, ["value", "quantity", "name"]);
}

#[rstest]
#[case("[*..3]")]
#[case("[*..*]")]
fn test_star_lower_bound_is_rejected(#[case] card: &str) {
    let parsed = parse(&format!("package P\nrelation A {card} -- [1] B\nkind Next"));
    assert_eq!(parsed.errors[0].code, ErrorCode::E0204);
    assert!(parsed.model.relations.is_empty());
    assert_eq!(parsed.model.classes[0].name, "Next");
}

#[test]
fn test_repeated_general_keeps_first() {
    let parsed = parse("package P\ngenset G { general A general B specifics X, Y }");
    assert_eq!(parsed.errors.len(), 1, "{:#?}", parsed.errors);
    assert_eq!(parsed.errors[0].code, ErrorCode::E0604);
    assert!(parsed.errors[0].message.contains("keeping 'A'"));
    assert_eq!(parsed.model.gensets[0].general, "A");
    assert_eq!(parsed.model.gensets[0].specifics, ["X", "Y"]);
}

#[test]
fn test_enum_and_datatype_records() {
    let model = parse(
        "package P\nenum Color { red, green, blue }\ndatatype PointDataType { x: number y: number }",
    )
    .model;
    assert_eq!(model.enums[0].instances, ["red", "green", "blue"]);
    assert_eq!(model.datatypes[0].name, "PointDataType");
    assert_eq!(model.datatypes[0].attributes.len(), 2);
}

#[test]
fn test_ast_mirrors_model() {
    let parsed = parse("import Base\npackage P\nkind Person\ndisjoint genset G where A, B specializes Person");
    let file = parsed.source_file().unwrap();
    assert_eq!(file.package().and_then(|p| p.name()).as_deref(), Some("P"));
    assert_eq!(file.imports().count(), 1);

    let declarations: Vec<_> = file.declarations().collect();
    assert_eq!(declarations.len(), 2);
    match &declarations[1] {
        Declaration::Genset(genset) => {
            assert!(genset.is_disjoint());
            assert_eq!(genset.general().as_deref(), Some("Person"));
            assert_eq!(genset.specifics(), ["A", "B"]);
        }
        other => panic!("expected a genset, got {other:?}"),
    }
}

// ============================================================================
// Error Recovery
// ============================================================================

#[test]
fn test_missing_brace_keeps_following_genset() {
    let parsed = parse(
        "package P\n\
         kind Person {\n\
         \x20 name: string\n\
         disjoint genset G { general Person specifics A, B }\n",
    );
    assert_eq!(parsed.errors.len(), 1, "{:#?}", parsed.errors);
    assert_eq!(parsed.errors[0].code, ErrorCode::E0202);
    assert_eq!(parsed.model.classes[0].attributes.len(), 1);
    assert_eq!(parsed.model.gensets.len(), 1);
    assert_eq!(parsed.model.gensets[0].specifics, ["A", "B"]);
}

#[test]
fn test_garbage_between_declarations_is_skipped() {
    let parsed = parse("package P\nkind A\n] ] ]\nkind B");
    assert!(!parsed.errors.is_empty());
    let names: Vec<_> = parsed.model.classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
    assert!(parsed.source_file().unwrap().error_node_count() > 0);
}

#[rstest]
#[case("kind Person", ErrorCode::E0502)]
#[case("package P\nimport Late", ErrorCode::E0501)]
#[case("package P\npackage Q", ErrorCode::E0503)]
#[case("package P\nkind", ErrorCode::E0301)]
#[case("package P\nPerson", ErrorCode::E0302)]
#[case("package P\nkind Person { name: }", ErrorCode::E0305)]
#[case("package P\nrelation A [1 -- [1] B", ErrorCode::E0204)]
#[case("package P\nrelation A [1] [1] B", ErrorCode::E0601)]
#[case("package P\nrelation A [*..3] -- [1] B", ErrorCode::E0204)]
#[case("package P\nrelation A [*..*] -- [1] B", ErrorCode::E0204)]
#[case("package P\ngenset G { general A general B specifics X, Y }", ErrorCode::E0604)]
#[case("package P\ngenset G { general Person specifics A, A }", ErrorCode::E0603)]
#[case("package P\ngenset G { specifics A, B }", ErrorCode::E0604)]
#[case("package P\n}", ErrorCode::E0205)]
fn test_error_codes(#[case] input: &str, #[case] expected: ErrorCode) {
    let found = codes(input);
    assert!(
        found.contains(&expected),
        "expected {expected} for {input:?}, got {found:?}"
    );
}

#[test]
fn test_duplicate_package_keeps_first() {
    let parsed = parse("package P\npackage Q\nkind Person");
    assert_eq!(parsed.model.package.as_deref(), Some("P"));
    assert_eq!(parsed.model.classes.len(), 1);
}

#[test]
fn test_errors_are_ordered_by_line() {
    let parsed = parse("package P\nkind Person {\n#\nkind\nrole R specializes");
    let lines: Vec<_> = parsed.errors.iter().map(|e| e.line).collect();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
    assert!(parsed.errors.len() >= 3);
}
