use indoc::indoc;

use crate::config::Config;
use crate::context::JsonContext;
use crate::definition::PathElement;
use crate::test_utils::{model, registered, run};
use crate::walk::ReferencePath;
use crate::Error;

const PERSON: &str = indoc! {r#"
    {
      "declarations": [
        {
          "name": "com.acme.Person",
          "kind": "class",
          "superclass": "java.lang.Object",
          "members": [
            { "name": "address", "type": "com.acme.Address" },
            { "name": "friends", "type": "java.util.List<com.acme.Person>" },
            { "name": "tags", "type": "java.util.Map<java.lang.String, com.acme.Tag>" },
            { "name": "status", "type": "com.acme.Status" },
            { "name": "name", "type": "java.lang.String" },
            { "name": "nick", "type": "int" }
          ]
        },
        {
          "name": "com.acme.Address",
          "kind": "class",
          "members": [{ "name": "city", "type": "java.lang.String" }]
        },
        {
          "name": "com.acme.Tag",
          "kind": "class",
          "members": [{ "name": "label", "type": "java.lang.String" }]
        },
        { "name": "com.acme.Status", "kind": "enum", "constants": ["ACTIVE", "RETIRED"] },
        { "name": "com.acme.Unused", "kind": "class" }
      ]
    }
"#};

#[test]
fn closure_over_members() {
    let model = model(PERSON);
    let ctx = run(&model, Config::new(), &["com.acme.Person"]);

    insta::assert_snapshot!(ctx.dump().trim_end(), @r"
    object com.acme.Person
      address: com.acme.Address
      friends: java.util.List<com.acme.Person>
      tags: java.util.Map<java.lang.String, com.acme.Tag>
      status: com.acme.Status
      name: java.lang.String
      nick: int
    object com.acme.Address
      city: java.lang.String
    object com.acme.Tag
      label: java.lang.String
    enum com.acme.Status
      = ACTIVE | RETIRED
    ");
}

#[test]
fn referenced_from_records_discovery_path() {
    let model = model(PERSON);
    let ctx = run(&model, Config::new(), &["com.acme.Person"]);

    let path = |name: &str| {
        ctx.find_type_definition(name)
            .unwrap()
            .referenced_from()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" > ")
    };
    assert_eq!(path("com.acme.Person"), "");
    assert_eq!(path("com.acme.Address"), "com.acme.Person > com.acme.Person.address");
    assert_eq!(path("com.acme.Tag"), "com.acme.Person > com.acme.Person.tags");
}

#[test]
fn cycle_terminates() {
    let model = model(indoc! {r#"
        {
          "declarations": [
            { "name": "com.acme.A", "kind": "class", "members": [{ "name": "b", "type": "com.acme.B" }] },
            { "name": "com.acme.B", "kind": "class", "members": [{ "name": "a", "type": "com.acme.A" }] }
          ]
        }
    "#});
    let ctx = run(&model, Config::new(), &["com.acme.A"]);

    insta::assert_snapshot!(registered(&ctx), @r"
    com.acme.A
    com.acme.B
    ");
}

#[test]
fn re_add_is_noop() {
    let model = model(PERSON);
    let mut ctx = run(&model, Config::new(), &["com.acme.Person"]);
    let before = ctx.registry().len();

    let decl = model.get("com.acme.Person").unwrap();
    let definition = ctx.create_type_definition(decl).unwrap();
    ctx.add(definition, &mut ReferencePath::new()).unwrap();
    ctx.add_root("com.acme.Address").unwrap();

    assert_eq!(ctx.registry().len(), before);
}

#[test]
fn known_types_never_registered() {
    let model = model(indoc! {r#"
        {
          "declarations": [
            {
              "name": "com.acme.Envelope",
              "kind": "class",
              "members": [
                { "name": "count", "type": "java.lang.Integer" },
                { "name": "payload", "type": "javax.xml.bind.JAXBElement<com.acme.Payload>" }
              ]
            },
            { "name": "com.acme.Payload", "kind": "class" },
            { "name": "java.lang.Integer", "kind": "class", "library": true },
            { "name": "javax.xml.bind.JAXBElement", "kind": "class", "library": true }
          ]
        }
    "#});
    let mut ctx = run(&model, Config::new(), &["com.acme.Envelope"]);
    ctx.add_root("java.lang.Integer").unwrap();

    insta::assert_snapshot!(registered(&ctx), @r"
    com.acme.Envelope
    com.acme.Payload
    ");
}

#[test]
fn containers_are_transparent() {
    let model = model(indoc! {r#"
        {
          "declarations": [
            {
              "name": "com.acme.Roster",
              "kind": "class",
              "members": [
                { "name": "dogs", "type": "java.util.ArrayList<com.acme.Dog>" },
                { "name": "byName", "type": "java.util.Map<java.lang.String, com.acme.Cat[]>" },
                { "name": "nested", "type": "java.util.Set<java.util.List<? extends com.acme.Bird>>" }
              ]
            },
            { "name": "com.acme.Dog", "kind": "class" },
            { "name": "com.acme.Cat", "kind": "class" },
            { "name": "com.acme.Bird", "kind": "class" }
          ]
        }
    "#});
    let ctx = run(&model, Config::new(), &["com.acme.Roster"]);

    insta::assert_snapshot!(registered(&ctx), @r"
    com.acme.Roster
    com.acme.Dog
    com.acme.Cat
    com.acme.Bird
    ");
    assert!(ctx.find_type_definition("java.util.ArrayList").is_none());
}

#[test]
fn generic_arguments_of_classes_are_walked() {
    let model = model(indoc! {r#"
        {
          "declarations": [
            {
              "name": "com.acme.Holder",
              "kind": "class",
              "members": [{ "name": "box", "type": "com.acme.Box<com.acme.Item>" }]
            },
            { "name": "com.acme.Box", "kind": "class", "members": [{ "name": "content", "type": "$T" }] },
            { "name": "com.acme.Item", "kind": "class" }
          ]
        }
    "#});
    let ctx = run(&model, Config::new(), &["com.acme.Holder"]);

    insta::assert_snapshot!(registered(&ctx), @r"
    com.acme.Holder
    com.acme.Box
    com.acme.Item
    ");
}

const PETS: &str = indoc! {r#"
    {
      "declarations": [
        {
          "name": "com.acme.Dog",
          "kind": "class",
          "superclass": "com.acme.Pet",
          "members": [{ "name": "breed", "type": "java.lang.String" }]
        },
        {
          "name": "com.acme.Pet",
          "kind": "class",
          "members": [{ "name": "owner", "type": "com.acme.Owner" }]
        },
        { "name": "com.acme.Owner", "kind": "class" }
      ]
    }
"#};

#[test]
fn superclass_is_walked() {
    let model = model(PETS);
    let ctx = run(&model, Config::new(), &["com.acme.Dog"]);

    insta::assert_snapshot!(ctx.dump().trim_end(), @r"
    object com.acme.Dog
      breed: java.lang.String
    object com.acme.Pet
      owner: com.acme.Owner
      <: com.acme.Dog
    object com.acme.Owner
    ");
}

#[test]
fn collapsed_hierarchy_skips_superclass() {
    let model = model(PETS);
    let ctx = run(
        &model,
        Config::new().collapse_type_hierarchy(true),
        &["com.acme.Dog"],
    );

    insta::assert_snapshot!(registered(&ctx), @"com.acme.Dog");
}

#[test]
fn interfaces_and_ignored_types_are_not_registered() {
    let model = model(indoc! {r#"
        {
          "declarations": [
            {
              "name": "com.acme.Zoo",
              "kind": "class",
              "members": [
                { "name": "animal", "type": "com.acme.Animal" },
                { "name": "cache", "type": "com.acme.Cache" },
                { "name": "secret", "type": "com.acme.Secret", "ignored": true }
              ]
            },
            { "name": "com.acme.Animal", "kind": "interface" },
            { "name": "com.acme.Cache", "kind": "class", "hints": { "ignored": true } },
            { "name": "com.acme.Secret", "kind": "class" }
          ]
        }
    "#});
    let ctx = run(&model, Config::new(), &["com.acme.Zoo"]);

    insta::assert_snapshot!(ctx.dump().trim_end(), @r"
    object com.acme.Zoo
      animal: com.acme.Animal
      cache: com.acme.Cache
    ");
    assert!(ctx.is_ignored("com.acme.Cache"));
    assert!(!ctx.is_ignored("com.acme.Secret"));
}

#[test]
fn accessor_adapters_restrictions_and_choices() {
    let model = model(indoc! {r#"
        {
          "declarations": [
            {
              "name": "com.acme.Order",
              "kind": "class",
              "members": [
                { "name": "placed", "type": "com.acme.Clock", "adapter": "java.lang.String" },
                { "name": "total", "type": "com.acme.Money" },
                { "name": "kind", "type": "javax.xml.namespace.QName", "qname_enum": "com.acme.OrderKind" },
                {
                  "name": "item",
                  "type": "com.acme.Item",
                  "choices": [
                    { "name": "book", "type": "com.acme.Book" },
                    { "name": "song", "type": "com.acme.Song", "adapter": "com.acme.Track" }
                  ]
                }
              ],
              "value": null
            },
            { "name": "com.acme.Clock", "kind": "class" },
            { "name": "com.acme.Money", "kind": "class", "hints": { "adapter": "com.acme.MoneyDto" } },
            { "name": "com.acme.MoneyDto", "kind": "class" },
            { "name": "com.acme.OrderKind", "kind": "enum", "hints": { "qname_enum": true } },
            { "name": "com.acme.Item", "kind": "interface" },
            { "name": "com.acme.Book", "kind": "class" },
            { "name": "com.acme.Song", "kind": "class" },
            { "name": "com.acme.Track", "kind": "class" }
          ]
        }
    "#});
    let ctx = run(&model, Config::new(), &["com.acme.Order"]);

    insta::assert_snapshot!(registered(&ctx), @r"
    com.acme.Order
    com.acme.MoneyDto
    com.acme.OrderKind
    com.acme.Book
    com.acme.Track
    ");
}

#[test]
fn value_accessor_is_walked() {
    let model = model(indoc! {r#"
        {
          "declarations": [
            {
              "name": "com.acme.Measure",
              "kind": "class",
              "members": [{ "name": "unit", "type": "java.lang.String" }],
              "value": { "name": "amount", "type": "com.acme.Amount" }
            },
            { "name": "com.acme.Amount", "kind": "class" }
          ]
        }
    "#});
    let ctx = run(&model, Config::new(), &["com.acme.Measure"]);

    insta::assert_snapshot!(ctx.dump().trim_end(), @r"
    simple com.acme.Measure
      unit: java.lang.String
      (value): com.acme.Amount
    object com.acme.Amount
    ");
}

#[test]
fn root_type_reference() {
    let model = model(PERSON);
    let mut ctx = JsonContext::new(&model, Config::new());
    ctx.add_root_type(&"java.util.List<com.acme.Tag>".parse().unwrap())
        .unwrap();
    ctx.add_root_type(&"com.acme.Status[]".parse().unwrap())
        .unwrap();

    insta::assert_snapshot!(registered(&ctx), @r"
    com.acme.Tag
    com.acme.Status
    ");
}

#[test]
fn undeclared_types_walk_arguments_only() {
    let model = model(PERSON);
    let mut ctx = JsonContext::new(&model, Config::new());
    ctx.add_root_type(&"org.other.Page<com.acme.Address>".parse().unwrap())
        .unwrap();

    insta::assert_snapshot!(registered(&ctx), @"com.acme.Address");
}

#[test]
fn type_nested_in_itself_is_visited_once() {
    let model = model(indoc! {r#"
        {
          "declarations": [
            {
              "name": "com.acme.Holder",
              "kind": "class",
              "members": [{ "name": "box", "type": "com.acme.Box<com.acme.Box<com.acme.Item>>" }]
            },
            { "name": "com.acme.Box", "kind": "class", "members": [{ "name": "content", "type": "$T" }] },
            { "name": "com.acme.Item", "kind": "class" }
          ]
        }
    "#});
    let ctx = run(&model, Config::new(), &["com.acme.Holder"]);

    // The inner `Box` is already on the recursion stack, so its arguments are not reached.
    insta::assert_snapshot!(registered(&ctx), @r"
    com.acme.Holder
    com.acme.Box
    ");
}

#[test]
fn adapter_cycle_terminates() {
    let model = model(indoc! {r#"
        {
          "declarations": [
            {
              "name": "com.acme.Root",
              "kind": "class",
              "members": [
                { "name": "a", "type": "com.acme.A" },
                { "name": "self", "type": "com.acme.Loop" }
              ]
            },
            { "name": "com.acme.A", "kind": "class", "hints": { "adapter": "com.acme.B" } },
            { "name": "com.acme.B", "kind": "class", "hints": { "adapter": "com.acme.A" } },
            { "name": "com.acme.Loop", "kind": "class", "hints": { "adapter": "com.acme.Loop" } }
          ]
        }
    "#});
    let ctx = run(&model, Config::new(), &["com.acme.Root"]);

    insta::assert_snapshot!(registered(&ctx), @"com.acme.Root");
}

#[test]
fn reference_path_is_restored_on_error() {
    let model = model(indoc! {r#"
        {
          "declarations": [
            {
              "name": "com.acme.Root",
              "kind": "class",
              "members": [{ "name": "shape", "type": "com.acme.Shape" }]
            },
            { "name": "com.acme.Shape", "kind": "class", "hints": { "subtypes": ["com.acme.Missing"] } }
          ]
        }
    "#});
    let mut ctx = JsonContext::new(&model, Config::new());
    let decl = model.get("com.acme.Root").unwrap();
    let definition = ctx.create_type_definition(decl).unwrap();

    let mut path = ReferencePath::new();
    let err = path.scoped(PathElement::Type("com.acme.Caller".to_string()), |path| {
        let err = ctx.add(definition, path).unwrap_err();
        assert_eq!(path.len(), 1);
        err
    });

    assert!(path.is_empty());
    assert_eq!(
        err,
        Error::SubtypeUnresolvable {
            origin: "com.acme.Shape".to_string(),
            subtype: "com.acme.Missing".to_string(),
        }
    );
}
