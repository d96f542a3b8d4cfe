//! JSON deserialization for model descriptions.
//!
//! Types are written in the type-expression notation and parsed while the
//! raw layer is converted, so errors can name the owning declaration.

use serde::Deserialize;

use super::types::{Accessor, DeclKind, Declaration, Hints, Markers, Shape};
use crate::TypeRef;
use crate::type_expr::{self, ParseError};

/// Error while building a model from its description.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model description is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{declaration}: invalid type expression `{expr}`: {source}")]
    TypeExpr {
        declaration: String,
        expr: String,
        source: ParseError,
    },

    #[error("duplicate declaration: {0}")]
    DuplicateDeclaration(String),
}

/// Raw model description.
#[derive(Debug, Deserialize)]
pub(crate) struct RawModel {
    #[serde(default)]
    pub markers: Markers,
    #[serde(default)]
    pub declarations: Vec<RawDeclaration>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDeclaration {
    pub name: String,
    pub kind: DeclKind,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub members: Vec<RawAccessor>,
    #[serde(default)]
    pub value: Option<RawAccessor>,
    #[serde(default)]
    pub constants: Vec<String>,
    #[serde(default)]
    pub hints: RawHints,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub library: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAccessor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_expr: String,
    #[serde(default)]
    pub adapter: Option<String>,
    #[serde(default)]
    pub qname_enum: Option<String>,
    #[serde(default)]
    pub choices: Vec<RawAccessor>,
    #[serde(default)]
    pub subtypes: Option<Vec<String>>,
    #[serde(default)]
    pub see_also: Option<Vec<String>>,
    #[serde(default)]
    pub ignored: bool,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawHints {
    #[serde(default)]
    pub adapter: Option<String>,
    #[serde(default)]
    pub subtypes: Option<Vec<String>>,
    #[serde(default)]
    pub see_also: Option<Vec<String>>,
    #[serde(default)]
    pub ignored: bool,
    #[serde(default)]
    pub shape: Shape,
    #[serde(default)]
    pub schema_type: bool,
    #[serde(default)]
    pub qname_enum: bool,
}

pub(crate) fn parse_raw_model(json: &str) -> Result<RawModel, ModelError> {
    Ok(serde_json::from_str(json)?)
}

impl RawDeclaration {
    pub(crate) fn into_declaration(self) -> Result<Declaration, ModelError> {
        let owner = self.name;
        let parse = |expr: &str| parse_in(&owner, expr);

        let superclass = self.superclass.as_deref().map(parse).transpose()?;
        let interfaces = self
            .interfaces
            .iter()
            .map(|expr| parse(expr.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let members = self
            .members
            .into_iter()
            .map(|raw| raw.into_accessor(&owner))
            .collect::<Result<Vec<_>, _>>()?;
        let value = self
            .value
            .map(|raw| raw.into_accessor(&owner))
            .transpose()?;
        let hints = Hints {
            adapter: self.hints.adapter.as_deref().map(parse).transpose()?,
            subtypes: self.hints.subtypes,
            see_also: self.hints.see_also,
            ignored: self.hints.ignored,
            shape: self.hints.shape,
            schema_type: self.hints.schema_type,
            qname_enum: self.hints.qname_enum,
        };

        Ok(Declaration {
            qualified_name: owner.clone(),
            kind: self.kind,
            superclass,
            interfaces,
            members,
            value,
            constants: self.constants,
            hints,
            source: self.source,
            library: self.library,
        })
    }
}

impl RawAccessor {
    fn into_accessor(self, owner: &str) -> Result<Accessor, ModelError> {
        let accessor_type = parse_in(owner, &self.type_expr)?;
        let adapter = self
            .adapter
            .as_deref()
            .map(|expr| parse_in(owner, expr))
            .transpose()?;
        let qname_enum_ref = self
            .qname_enum
            .as_deref()
            .map(|expr| parse_in(owner, expr))
            .transpose()?;
        let choices = self
            .choices
            .into_iter()
            .map(|raw| raw.into_accessor(owner))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Accessor {
            name: self.name,
            accessor_type,
            adapter,
            qname_enum_ref,
            choices,
            subtypes: self.subtypes,
            see_also: self.see_also,
            ignored: self.ignored,
        })
    }
}

fn parse_in(owner: &str, expr: &str) -> Result<TypeRef, ModelError> {
    type_expr::parse(expr).map_err(|source| ModelError::TypeExpr {
        declaration: owner.to_string(),
        expr: expr.to_string(),
        source,
    })
}
