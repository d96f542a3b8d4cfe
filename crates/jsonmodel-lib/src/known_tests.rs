use crate::known::{DateShape, KnownType, KnownTypes};

#[test]
fn scalars() {
    let known = KnownTypes::default();
    assert_eq!(known.classify("java.lang.Integer"), Some(KnownType::WholeNumber));
    assert_eq!(known.classify("int"), Some(KnownType::WholeNumber));
    assert_eq!(known.classify("java.lang.Character"), Some(KnownType::String));
    assert_eq!(known.classify("java.math.BigDecimal"), Some(KnownType::Number));
    assert_eq!(known.classify("java.lang.Object"), Some(KnownType::Object));
    assert_eq!(known.classify("com.acme.Person"), None);
}

#[test]
fn json_tree_nodes() {
    let known = KnownTypes::default();
    assert_eq!(
        known.classify("com.fasterxml.jackson.databind.JsonNode"),
        Some(KnownType::Object)
    );
    assert_eq!(
        known.classify("com.fasterxml.jackson.databind.node.ArrayNode"),
        Some(KnownType::Array)
    );
    assert_eq!(
        known.classify("com.fasterxml.jackson.databind.node.BooleanNode"),
        Some(KnownType::Boolean)
    );
    assert!(!known.contains("ArrayNode"));
}

#[test]
fn date_shape_applies_to_every_date_entry() {
    let dates = [
        "java.util.Date",
        "java.util.Calendar",
        "java.sql.Timestamp",
        "java.time.Instant",
        "java.time.ZonedDateTime",
        "org.joda.time.DateTime",
    ];
    for (shape, expected) in [
        (DateShape::Timestamp, KnownType::WholeNumber),
        (DateShape::String, KnownType::String),
        (DateShape::Object, KnownType::Object),
    ] {
        let known = KnownTypes::new(shape);
        for name in dates {
            assert_eq!(known.classify(name), Some(expected), "{name} as {shape:?}");
        }
        assert_eq!(known.classify("java.time.LocalDate"), Some(KnownType::String));
    }
}
