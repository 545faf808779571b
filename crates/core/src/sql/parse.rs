//! Parser for fixture scripts of `INSERT INTO sailing_venues ...` statements.
//!
//! Scripts are parsed with the PostgreSQL dialect of `sqlparser`. Accepted
//! statements are `BEGIN`/`COMMIT` wrappers and inserts into `sailing_venues`
//! with literal `VALUES` rows in any column order. An insert may carry only the
//! coordinate-refresh conflict clause; any other clause is rejected.

use sqlparser::ast::{
    ConflictTarget, Expr, Insert, OnConflictAction, OnInsert, SetExpr, Spanned, Statement,
    UnaryOperator, Value,
};
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::{Parser, ParserError};
use sqlparser::tokenizer::Span;

use crate::constants::{UNKNOWN, VENUE_COLUMNS, VENUES_TABLE};
use crate::error::CoreError;
use crate::venue::{SailingVenue, VenueRecord};

/// `(column, value)` pairs of the only conflict clause a fixture may carry.
const REFRESH_ASSIGNMENTS: [(&str, &str); 2] = [
    ("coordinates_lat", "excluded.coordinates_lat"),
    ("coordinates_lng", "excluded.coordinates_lng"),
];

#[derive(Debug, Clone, PartialEq)]
enum Literal {
    Text(String),
    Number(String),
    Bool(bool),
    Null,
}

fn parse_err(line: usize, message: impl Into<String>) -> CoreError {
    CoreError::Parse { line, message: message.into() }
}

/// 1-based start line of a span; `None` when the parser recorded no location.
fn line_of(span: Span) -> Option<usize> {
    usize::try_from(span.start.line).ok().filter(|&line| line > 0)
}

/// Line number embedded in a parser message (`... at Line: 3, Column: 7`).
fn parser_error_line(err: &ParserError) -> usize {
    let message = err.to_string();
    message
        .split("Line: ")
        .nth(1)
        .and_then(|rest| rest.split(|c: char| !c.is_ascii_digit()).next())
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(1)
}

fn literal(expr: &Expr) -> Option<Literal> {
    match expr {
        Expr::Value(value) => match &value.value {
            Value::SingleQuotedString(s) => Some(Literal::Text(s.clone())),
            Value::Number(n, _) => Some(Literal::Number(n.clone())),
            Value::Boolean(b) => Some(Literal::Bool(*b)),
            Value::Null => Some(Literal::Null),
            _ => None,
        },
        Expr::UnaryOp { op: UnaryOperator::Minus, expr } => match literal(expr)? {
            Literal::Number(n) => Some(Literal::Number(format!("-{n}"))),
            _ => None,
        },
        Expr::UnaryOp { op: UnaryOperator::Plus, expr } => match literal(expr)? {
            number @ Literal::Number(_) => Some(number),
            _ => None,
        },
        Expr::Nested(inner) => literal(inner),
        _ => None,
    }
}

fn is_refresh_clause(on: &OnInsert) -> bool {
    let OnInsert::OnConflict(conflict) = on else {
        return false;
    };
    let targets_id = matches!(
        &conflict.conflict_target,
        Some(ConflictTarget::Columns(columns))
            if columns.len() == 1 && columns.iter().all(|c| c.value.eq_ignore_ascii_case("id"))
    );
    let OnConflictAction::DoUpdate(update) = &conflict.action else {
        return false;
    };
    let mut assigned: Vec<(String, String)> = update
        .assignments
        .iter()
        .map(|a| (a.target.to_string().to_ascii_lowercase(), a.value.to_string().to_ascii_lowercase()))
        .collect();
    assigned.sort();
    targets_id
        && update.selection.is_none()
        && assigned.iter().map(|(c, v)| (c.as_str(), v.as_str())).eq(REFRESH_ASSIGNMENTS)
}

fn insert_to_venues(
    insert: &Insert,
    line: usize,
    venues: &mut Vec<SailingVenue>,
) -> Result<(), CoreError> {
    let table = insert.table.to_string();
    let bare = table.rsplit('.').next().unwrap_or(table.as_str()).trim_matches('"');
    if !bare.eq_ignore_ascii_case(VENUES_TABLE) {
        return Err(parse_err(line, format!("unexpected table {table}")));
    }
    if let Some(on) = &insert.on {
        if !is_refresh_clause(on) {
            return Err(parse_err(line, format!("unsupported conflict clause:{on}")));
        }
    }
    if insert.returning.is_some() {
        return Err(parse_err(line, "RETURNING is not supported"));
    }

    let columns: Vec<String> =
        insert.columns.iter().map(|c| c.value.to_ascii_lowercase()).collect();
    if columns.is_empty() {
        return Err(parse_err(line, "column list is required"));
    }
    let source = insert.source.as_ref().ok_or_else(|| parse_err(line, "missing VALUES"))?;
    let SetExpr::Values(values) = source.body.as_ref() else {
        return Err(parse_err(line, "only literal VALUES rows are supported"));
    };

    for row in &values.rows {
        let row_line = row.first().and_then(|e| line_of(e.span())).unwrap_or(line);
        let literals = row
            .iter()
            .map(|expr| {
                literal(expr).ok_or_else(|| parse_err(row_line, format!("unexpected value {expr}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let venue = row_to_venue(&columns, &literals).map_err(|e| match e {
            CoreError::Parse { message, .. } => parse_err(row_line, message),
            other => parse_err(row_line, other.to_string()),
        })?;
        venues.push(venue);
    }
    Ok(())
}

fn take_text(
    columns: &[String],
    values: &[Literal],
    name: &'static str,
) -> Result<Option<String>, CoreError> {
    let Some(idx) = columns.iter().position(|c| c == name) else {
        return Ok(None);
    };
    match values.get(idx) {
        Some(Literal::Text(s) | Literal::Number(s)) => Ok(Some(s.clone())),
        Some(Literal::Null) | None => Ok(None),
        Some(Literal::Bool(_)) => Err(parse_err(0, format!("{name} must be text"))),
    }
}

fn require_text(
    columns: &[String],
    values: &[Literal],
    name: &'static str,
) -> Result<String, CoreError> {
    take_text(columns, values, name)?.ok_or(CoreError::MissingField(name))
}

fn require_float(
    columns: &[String],
    values: &[Literal],
    name: &'static str,
) -> Result<f64, CoreError> {
    let raw = require_text(columns, values, name)?;
    raw.trim()
        .parse()
        .map_err(|_| parse_err(0, format!("{name} is not a number: {raw}")))
}

fn require_bool(
    columns: &[String],
    values: &[Literal],
    name: &'static str,
) -> Result<bool, CoreError> {
    let idx = columns.iter().position(|c| c == name).ok_or(CoreError::MissingField(name))?;
    match values.get(idx) {
        Some(Literal::Bool(b)) => Ok(*b),
        Some(Literal::Number(n)) if n == "0" => Ok(false),
        Some(Literal::Number(n)) if n == "1" => Ok(true),
        Some(Literal::Text(t)) if matches!(t.as_str(), "t" | "true") => Ok(true),
        Some(Literal::Text(t)) if matches!(t.as_str(), "f" | "false") => Ok(false),
        _ => Err(CoreError::MissingField(name)),
    }
}

fn row_to_venue(columns: &[String], values: &[Literal]) -> Result<SailingVenue, CoreError> {
    if columns.len() != values.len() {
        return Err(parse_err(0, format!("{} columns but {} values", columns.len(), values.len())));
    }
    if let Some(unknown) = columns.iter().find(|c| !VENUE_COLUMNS.contains(&c.as_str())) {
        return Err(parse_err(0, format!("unknown column {unknown}")));
    }

    let record = VenueRecord {
        id: require_text(columns, values, "id")?,
        name: require_text(columns, values, "name")?,
        coordinates_lat: require_float(columns, values, "coordinates_lat")?,
        coordinates_lng: require_float(columns, values, "coordinates_lng")?,
        country: take_text(columns, values, "country")?.unwrap_or_else(|| UNKNOWN.to_owned()),
        region: take_text(columns, values, "region")?.unwrap_or_else(|| UNKNOWN.to_owned()),
        venue_type: require_text(columns, values, "venue_type")?,
        time_zone: require_text(columns, values, "time_zone")?,
        data_quality: require_text(columns, values, "data_quality")?,
        osm_id: require_text(columns, values, "osm_id")?,
        osm_type: require_text(columns, values, "osm_type")?,
        data_source: require_text(columns, values, "data_source")?,
        verified: require_bool(columns, values, "verified")?,
    };
    SailingVenue::try_from(record)
}

/// Parse a fixture script into venues, in statement order.
///
/// # Errors
/// Returns `Parse` with the 1-based line of the offending statement or row.
/// Statements must be separated by `;`.
pub fn parse_script(input: &str) -> Result<Vec<SailingVenue>, CoreError> {
    let statements = Parser::parse_sql(&PostgreSqlDialect {}, input)
        .map_err(|e| parse_err(parser_error_line(&e), e.to_string()))?;

    let mut venues = Vec::new();
    for statement in &statements {
        let line = line_of(statement.span()).unwrap_or(1);
        match statement {
            Statement::StartTransaction { .. }
            | Statement::Commit { .. }
            | Statement::Rollback { .. } => {},
            Statement::Insert(insert) => insert_to_venues(insert, line, &mut venues)?,
            other => {
                let keyword = other.to_string();
                let keyword = keyword.split_whitespace().next().unwrap_or_default();
                return Err(parse_err(line, format!("unsupported statement {keyword}")));
            },
        }
    }
    Ok(venues)
}
