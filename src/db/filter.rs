//! Typed WHERE-clause builder for the list endpoints.
//!
//! Conditions are collected as an ordered list of SQL templates plus their
//! parameter values, then rendered with `$N` placeholders in one pass.
//! Handlers never concatenate user input into SQL.

use chrono::NaiveDate;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i32),
    BigInt(i64),
    Text(String),
    Date(NaiveDate),
}

#[derive(Debug, Default)]
pub struct FilterBuilder {
    conditions: Vec<String>,
    params: Vec<SqlParam>,
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition with no bound parameters, e.g. `c.type = 'track'`.
    pub fn raw(mut self, condition: &str) -> Self {
        self.conditions.push(condition.to_string());
        self
    }

    /// Add a condition template where each `{}` is replaced by the next
    /// `$N` placeholder, numbering continuing from previous conditions.
    pub fn push(mut self, template: &str, values: Vec<SqlParam>) -> Self {
        let mut pieces = template.split("{}");
        let mut condition = String::new();
        condition.push_str(pieces.next().unwrap_or(""));
        let mut consumed = 0;
        for (piece, value) in pieces.zip(values.into_iter()) {
            self.params.push(value);
            consumed += 1;
            condition.push_str(&format!("${}", self.params.len()));
            condition.push_str(piece);
        }
        debug_assert_eq!(
            consumed,
            template.matches("{}").count(),
            "placeholder/value count mismatch in filter template"
        );
        self.conditions.push(condition);
        self
    }

    /// Shorthand for `column = $N`.
    pub fn equals(self, column: &str, value: SqlParam) -> Self {
        let template = format!("{} = {{}}", column);
        self.push(&template, vec![value])
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Render `WHERE a AND b AND ...`, or an empty string with no conditions.
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }
}

/// Apply the collected parameters, in order, to a `query_as` statement.
pub fn bind_params<'q, T>(
    mut query: QueryAs<'q, Postgres, T, PgArguments>,
    params: &[SqlParam],
) -> QueryAs<'q, Postgres, T, PgArguments> {
    for param in params {
        query = match param {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::BigInt(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.clone()),
            SqlParam::Date(v) => query.bind(*v),
        };
    }
    query
}
