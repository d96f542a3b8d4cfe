use indoc::indoc;

use crate::config::Config;
use crate::context::JsonContext;
use crate::definition::DefinitionKind;
use crate::test_utils::model;
use crate::Error;

const MODEL: &str = indoc! {r#"
    {
      "declarations": [
        { "name": "com.acme.Plain", "kind": "class" },
        {
          "name": "com.acme.Wrapper",
          "kind": "class",
          "members": [
            { "name": "unit", "type": "java.lang.String" },
            { "name": "internal", "type": "java.lang.String", "ignored": true }
          ],
          "value": { "name": "amount", "type": "double" }
        },
        { "name": "com.acme.Color", "kind": "enum", "constants": ["RED", "GREEN"] },
        { "name": "com.acme.Kind", "kind": "enum", "hints": { "qname_enum": true } },
        { "name": "com.acme.Boxed", "kind": "enum", "hints": { "shape": "object" } },
        { "name": "com.acme.Shaped", "kind": "interface", "hints": { "schema_type": true } },
        { "name": "com.acme.Money", "kind": "class", "hints": { "adapter": "com.acme.MoneyDto" } },
        { "name": "com.acme.MoneyDto", "kind": "class", "source": "com/acme/MoneyDto.java" },
        { "name": "com.acme.Counter", "kind": "class", "hints": { "adapter": "long" } },
        { "name": "com.acme.Lost", "kind": "class", "hints": { "adapter": "com.acme.Missing" } },
        { "name": "com.acme.Target", "kind": "interface" },
        { "name": "com.acme.TargetMixin", "kind": "class", "hints": { "subtypes": ["com.acme.Plain"], "schema_type": true } }
      ]
    }
"#};

fn kind_of(ctx: &JsonContext<'_, jsonmodel_core::DynamicModel>, name: &str) -> DefinitionKind {
    let decl = ctx.model().get(name).unwrap();
    ctx.create_type_definition(decl).unwrap().kind()
}

#[test]
fn classification() {
    let model = model(MODEL);
    let ctx = JsonContext::new(&model, Config::new());

    assert_eq!(kind_of(&ctx, "com.acme.Plain"), DefinitionKind::Object);
    assert_eq!(kind_of(&ctx, "com.acme.Wrapper"), DefinitionKind::Simple);
    assert_eq!(kind_of(&ctx, "com.acme.Color"), DefinitionKind::Enum);
    assert_eq!(kind_of(&ctx, "com.acme.Kind"), DefinitionKind::QNameEnum);
    assert_eq!(kind_of(&ctx, "com.acme.Boxed"), DefinitionKind::Object);
}

#[test]
fn simple_keeps_members_without_ignored() {
    let model = model(MODEL);
    let ctx = JsonContext::new(&model, Config::new());
    let decl = model.get("com.acme.Wrapper").unwrap();
    let def = ctx.create_type_definition(decl).unwrap();

    let members: Vec<_> = def.members().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(members, ["unit"]);
    assert_eq!(def.value().map(|v| v.name.as_str()), Some("amount"));
    assert_eq!(def.simple_name(), "Wrapper");
}

#[test]
fn interface_with_schema_type_is_rejected() {
    let model = model(MODEL);
    let ctx = JsonContext::new(&model, Config::new());
    let decl = model.get("com.acme.Shaped").unwrap();
    let err = ctx.create_type_definition(decl).unwrap_err();

    assert!(err.is_configuration());
    insta::assert_snapshot!(err, @"com.acme.Shaped: an interface must not declare an object schema type");
}

#[test]
fn adapter_narrows_to_target() {
    let model = model(MODEL);
    let ctx = JsonContext::new(&model, Config::new());
    let decl = model.get("com.acme.Money").unwrap();
    let def = ctx.create_type_definition(decl).unwrap();

    assert_eq!(def.qualified_name(), "com.acme.MoneyDto");
    assert_eq!(def.source(), Some("com/acme/MoneyDto.java"));
}

#[test]
fn adapter_to_non_declared_type() {
    let model = model(MODEL);
    let ctx = JsonContext::new(&model, Config::new());
    let decl = model.get("com.acme.Counter").unwrap();
    let err = ctx.create_type_definition(decl).unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(
        err,
        Error::AdapterTargetNotDeclared {
            declaration: "com.acme.Counter".to_string(),
            target: "long".to_string(),
        }
    );
}

#[test]
fn adapter_to_unresolvable_type() {
    let model = model(MODEL);
    let ctx = JsonContext::new(&model, Config::new());
    let decl = model.get("com.acme.Lost").unwrap();
    let err = ctx.create_type_definition(decl).unwrap_err();

    assert!(err.is_resolution());
    insta::assert_snapshot!(err, @"com.acme.Lost is adapted by `com.acme.Missing`, which cannot be resolved");
}

#[test]
fn mixin_hints_fill_in() {
    let model = model(MODEL);
    let ctx = JsonContext::new(
        &model,
        Config::new().mixin("com.acme.Target", "com.acme.TargetMixin"),
    );
    let decl = model.get("com.acme.Target").unwrap();
    let err = ctx.create_type_definition(decl).unwrap_err();
    assert_eq!(
        err,
        Error::InterfaceDeclaresSchemaType("com.acme.Target".to_string())
    );

    let ctx = JsonContext::new(
        &model,
        Config::new().mixin("com.acme.Plain", "com.acme.TargetMixin"),
    );
    let decl = model.get("com.acme.Plain").unwrap();
    let def = ctx.create_type_definition(decl).unwrap();
    assert_eq!(
        def.hints().subtypes.as_deref(),
        Some(&["com.acme.Plain".to_string()][..])
    );
}

#[test]
fn missing_mixin_keeps_own_hints() {
    let model = model(MODEL);
    let ctx = JsonContext::new(
        &model,
        Config::new().mixin("com.acme.Plain", "com.acme.Nowhere"),
    );
    let decl = model.get("com.acme.Plain").unwrap();
    let def = ctx.create_type_definition(decl).unwrap();
    assert!(def.hints().subtypes.is_none());
}
