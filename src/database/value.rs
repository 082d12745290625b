use serde_json::Value;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{Sqlite, SqliteArguments};

/// A caller-supplied value on its way into a bound statement parameter.
///
/// Values keep the SQLite storage class they arrived with; nothing is
/// validated, so the store's own column affinity decides what gets persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    /// Path segments bind as INTEGER when numeric, otherwise as TEXT.
    pub fn from_path(segment: &str) -> Self {
        match segment.parse::<i64>() {
            Ok(n) => SqlValue::Integer(n),
            Err(_) => SqlValue::Text(segment.to_string()),
        }
    }
}

impl From<Option<&Value>> for SqlValue {
    fn from(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => SqlValue::Null,
            Some(Value::Bool(b)) => SqlValue::Integer(i64::from(*b)),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => SqlValue::Integer(i),
                None => n.as_f64().map_or(SqlValue::Null, SqlValue::Real),
            },
            Some(Value::String(s)) => SqlValue::Text(s.clone()),
            Some(other) => SqlValue::Text(other.to_string()),
        }
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(SqlValue::Null, SqlValue::Text)
    }
}

/// Binds a [`SqlValue`] as the next positional `?` parameter.
pub trait BindValue<'q> {
    fn bind_value(self, value: &'q SqlValue) -> Self;
}

impl<'q> BindValue<'q> for Query<'q, Sqlite, SqliteArguments<'q>> {
    fn bind_value(self, value: &'q SqlValue) -> Self {
        match value {
            SqlValue::Null => self.bind(Option::<i64>::None),
            SqlValue::Integer(n) => self.bind(*n),
            SqlValue::Real(f) => self.bind(*f),
            SqlValue::Text(s) => self.bind(s.as_str()),
        }
    }
}

impl<'q, O> BindValue<'q> for QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    fn bind_value(self, value: &'q SqlValue) -> Self {
        match value {
            SqlValue::Null => self.bind(Option::<i64>::None),
            SqlValue::Integer(n) => self.bind(*n),
            SqlValue::Real(f) => self.bind(*f),
            SqlValue::Text(s) => self.bind(s.as_str()),
        }
    }
}
