#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn table(enum_name: &str, values: &[&str]) -> WireTable {
    WireTable::new(enum_name, values.iter().copied())
}

#[test]
fn WireTable___prefix___derived_from_enum_name() {
    let table = table("ScreamingSnakeWithPrefix", &[]);

    assert_eq!(table.prefix(), "SCREAMING_SNAKE_WITH_PREFIX_");
    assert!(table.is_empty());
}

#[test]
fn WireTable___unprefixed_value___verbatim() {
    let table = table("RootEnum", &["ABC", "DEF"]);

    assert_eq!(table.wire_name("DEF"), Some("DEF"));
    assert_eq!(table.resolve("DEF"), Some("DEF"));
}

#[test]
fn WireTable___prefixed_value___stripped() {
    let table = table(
        "ScreamingSnakeWithPrefix",
        &[
            "SCREAMING_SNAKE_WITH_PREFIX_ABC",
            "SCREAMING_SNAKE_WITH_PREFIX_DEF",
        ],
    );

    assert_eq!(table.wire_name("SCREAMING_SNAKE_WITH_PREFIX_DEF"), Some("DEF"));
    assert_eq!(
        table.resolve("DEF"),
        Some("SCREAMING_SNAKE_WITH_PREFIX_DEF")
    );
}

#[test]
fn WireTable___declared_name_input___still_resolves() {
    let table = table("Color", &["COLOR_RED"]);

    assert_eq!(table.resolve("COLOR_RED"), Some("COLOR_RED"));
}

#[test]
fn WireTable___unknown_input___resolves_to_none() {
    let table = table("Color", &["COLOR_RED"]);

    assert_eq!(table.resolve("BLUE"), None);
    assert_eq!(table.resolve(""), None);
}

#[test]
fn WireTable___remainder_starting_with_digit___not_stripped() {
    let table = table("Level", &["LEVEL_1", "LEVEL_HIGH"]);

    assert_eq!(table.wire_name("LEVEL_1"), Some("LEVEL_1"));
    assert_eq!(table.wire_name("LEVEL_HIGH"), Some("HIGH"));
    assert_eq!(table.resolve("LEVEL_1"), Some("LEVEL_1"));
}

#[test]
fn WireTable___stripped_name_colliding_with_declared___kept_verbatim() {
    let table = table("Status", &["STATUS_OK", "OK"]);

    assert_eq!(table.wire_name("STATUS_OK"), Some("STATUS_OK"));
    assert_eq!(table.wire_name("OK"), Some("OK"));
    assert_eq!(table.resolve("OK"), Some("OK"));
    assert_eq!(table.resolve("STATUS_OK"), Some("STATUS_OK"));
}

#[test]
fn WireTable___non_canonical_value_case___normalized_before_stripping() {
    let table = table("Fruit", &["FruitApple"]);

    assert_eq!(table.wire_name("FruitApple"), Some("APPLE"));
    assert_eq!(table.resolve("APPLE"), Some("FruitApple"));
}

#[test]
fn WireTable___entries___in_declaration_order() {
    let table = table("Color", &["COLOR_RED", "GREEN", "COLOR_BLUE"]);

    let entries: Vec<_> = table.entries().collect();

    assert_eq!(
        entries,
        vec![
            ("COLOR_RED", "RED"),
            ("GREEN", "GREEN"),
            ("COLOR_BLUE", "BLUE"),
        ]
    );
}

#[test]
fn WireTable___accepted_inputs___wire_names_first_then_aliases() {
    let table = table("Color", &["COLOR_RED", "GREEN"]);

    let accepted = table.accepted_inputs();

    assert_eq!(
        accepted,
        vec![
            ("RED", "COLOR_RED"),
            ("GREEN", "GREEN"),
            ("COLOR_RED", "COLOR_RED"),
        ]
    );
}

#[test]
fn WireTable___accepted_inputs___agree_with_resolve() {
    let table = table("Status", &["STATUS_OK", "OK", "STATUS_2", "STATUS_FAILED"]);

    for (input, declared) in table.accepted_inputs() {
        assert_eq!(table.resolve(input), Some(declared), "input {input}");
    }
}

#[test_case("RootEnum", "DEF", "DEF" ; "root enum")]
#[test_case("Nested", "DEF", "DEF" ; "nested enum")]
#[test_case("Deeply", "DEF", "DEF" ; "deeply nested enum")]
#[test_case("ScreamingSnakeWithPrefix", "SCREAMING_SNAKE_WITH_PREFIX_DEF", "DEF" ; "prefixed")]
#[test_case("HTTPStatus", "HTTP_STATUS_NOT_FOUND", "NOT_FOUND" ; "acronym enum name")]
fn WireTable___wire_name___matches_expected(enum_name: &str, declared: &str, wire: &str) {
    let table = table(enum_name, &[declared]);

    assert_eq!(table.wire_name(declared), Some(wire));
    assert_eq!(table.resolve(wire), Some(declared));
}
