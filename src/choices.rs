//! Enumerated integer fields: a column stores a small integer code, application
//! code sees a typed label. The mapping is fixed at construction and total in
//! both directions.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::io::Write;

use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Integer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("unknown choice code {0}")]
    UnknownCode(i32),
    #[error("unknown choice label {0}")]
    UnknownLabel(String),
    #[error("duplicate choice code {0}")]
    DuplicateCode(i32),
    #[error("duplicate choice label {0}")]
    DuplicateLabel(String),
}

/// Bidirectional code<->label lookup for one enumerated column.
///
/// Codes and labels must each be unique; both constructors reject a sequence
/// that would break the bijection. Lookups against an undeclared code or label
/// are data-integrity errors and fail immediately.
#[derive(Debug, Clone)]
pub struct ChoiceMap<T: Eq + Hash + Clone + fmt::Debug> {
    by_code: HashMap<i32, T>,
    by_label: HashMap<T, i32>,
}

impl<T: Eq + Hash + Clone + fmt::Debug> ChoiceMap<T> {
    /// Build from a flat sequence of labels, auto-assigning codes 0..N-1 in
    /// input order.
    pub fn from_values<I>(values: I) -> Result<Self, ChoiceError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_pairs(
            values
                .into_iter()
                .enumerate()
                .map(|(code, label)| (code as i32, label)),
        )
    }

    /// Build from explicit (code, label) pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ChoiceError>
    where
        I: IntoIterator<Item = (i32, T)>,
    {
        let mut by_code = HashMap::new();
        let mut by_label = HashMap::new();
        for (code, label) in pairs {
            if by_code.contains_key(&code) {
                return Err(ChoiceError::DuplicateCode(code));
            }
            if by_label.contains_key(&label) {
                return Err(ChoiceError::DuplicateLabel(format!("{:?}", label)));
            }
            by_code.insert(code, label.clone());
            by_label.insert(label, code);
        }
        Ok(ChoiceMap { by_code, by_label })
    }

    /// Read path: stored code to label.
    pub fn label(&self, code: i32) -> Result<&T, ChoiceError> {
        self.by_code.get(&code).ok_or(ChoiceError::UnknownCode(code))
    }

    /// Write path: label to the code to persist.
    pub fn code(&self, label: &T) -> Result<i32, ChoiceError> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| ChoiceError::UnknownLabel(format!("{:?}", label)))
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

/// The `quantity_type.kind` column: whether a unit measures volume or mass.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsExpression, FromSqlRow, Serialize, Deserialize,
)]
#[sql_type = "Integer"]
pub enum QuantityKind {
    Volume = 0,
    Mass = 1,
}

impl QuantityKind {
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Result<Self, ChoiceError> {
        match code {
            0 => Ok(QuantityKind::Volume),
            1 => Ok(QuantityKind::Mass),
            other => Err(ChoiceError::UnknownCode(other)),
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityKind::Volume => f.write_str("Volume"),
            QuantityKind::Mass => f.write_str("Mass"),
        }
    }
}

impl<DB> ToSql<Integer, DB> for QuantityKind
where
    DB: Backend,
    i32: ToSql<Integer, DB>,
{
    fn to_sql<W: Write>(&self, out: &mut Output<W, DB>) -> serialize::Result {
        <i32 as ToSql<Integer, DB>>::to_sql(&self.code(), out)
    }
}

impl<DB> FromSql<Integer, DB> for QuantityKind
where
    DB: Backend,
    i32: FromSql<Integer, DB>,
{
    fn from_sql(bytes: Option<&DB::RawValue>) -> deserialize::Result<Self> {
        let code = <i32 as FromSql<Integer, DB>>::from_sql(bytes)?;
        QuantityKind::from_code(code).map_err(Into::into)
    }
}
