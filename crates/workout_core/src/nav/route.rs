//! Route names and string encoding.
//!
//! Routes are the external navigation surface shared with the UI shell:
//! `list`, `create` and `edit/{id}`.

use crate::model::record::RecordId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Route string for the record list screen.
pub const ROUTE_LIST: &str = "list";
/// Route string for the create form screen.
pub const ROUTE_CREATE: &str = "create";
/// Route template for the edit form screen.
pub const ROUTE_EDIT_PATTERN: &str = "edit/{id}";

static EDIT_ROUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^edit/([^/\s]+)$").expect("valid edit route regex"));

/// Named screen identifier, optionally parameterized by a record ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    List,
    Create,
    Edit(RecordId),
}

impl Route {
    /// Renders the route string for this route.
    pub fn path(&self) -> String {
        match self {
            Self::List => ROUTE_LIST.to_string(),
            Self::Create => ROUTE_CREATE.to_string(),
            Self::Edit(id) => format!("edit/{id}"),
        }
    }

    /// Returns the record ID carried by the route, if any.
    pub fn record_id(&self) -> Option<RecordId> {
        match self {
            Self::Edit(id) => Some(*id),
            Self::List | Self::Create => None,
        }
    }

    /// Stable short label, without parameters.
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => ROUTE_LIST,
            Self::Create => ROUTE_CREATE,
            Self::Edit(_) => "edit",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Edit(id) => write!(f, "edit/{id}"),
            other => f.write_str(other.name()),
        }
    }
}

/// Route string parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteParseError {
    Empty,
    UnknownRoute(String),
    InvalidRecordId(String),
}

impl Display for RouteParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "route must not be empty"),
            Self::UnknownRoute(value) => write!(
                f,
                "unknown route `{value}`; expected {ROUTE_LIST}|{ROUTE_CREATE}|{ROUTE_EDIT_PATTERN}"
            ),
            Self::InvalidRecordId(value) => write!(f, "invalid record id in route: `{value}`"),
        }
    }
}

impl Error for RouteParseError {}

/// Parses one route string.
///
/// Surrounding whitespace is ignored. Route names are case-sensitive, and
/// record IDs must be lowercase hyphenated UUIDs.
pub fn parse_route(value: &str) -> Result<Route, RouteParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(RouteParseError::Empty);
    }

    match normalized {
        ROUTE_LIST => return Ok(Route::List),
        ROUTE_CREATE => return Ok(Route::Create),
        _ => {}
    }

    let Some(caps) = EDIT_ROUTE_RE.captures(normalized) else {
        return Err(RouteParseError::UnknownRoute(normalized.to_string()));
    };
    let raw_id = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    // Only the lowercase hyphenated form renders back to the same path.
    match Uuid::try_parse(raw_id) {
        Ok(id) if !id.is_nil() && id.hyphenated().to_string() == raw_id => Ok(Route::Edit(id)),
        _ => Err(RouteParseError::InvalidRecordId(raw_id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_route, Route, RouteParseError};
    use uuid::Uuid;

    #[test]
    fn parses_static_routes_with_surrounding_whitespace() {
        assert_eq!(parse_route(" list ").unwrap(), Route::List);
        assert_eq!(parse_route("create").unwrap(), Route::Create);
    }

    #[test]
    fn edit_route_round_trips_through_path() {
        let id = Uuid::new_v4();
        let route = Route::Edit(id);
        assert_eq!(route.path(), format!("edit/{id}"));
        assert_eq!(parse_route(&route.path()).unwrap(), route);
        assert_eq!(route.to_string(), route.path());
    }

    #[test]
    fn rejects_unknown_and_case_variants() {
        assert_eq!(
            parse_route("List").unwrap_err(),
            RouteParseError::UnknownRoute("List".to_string())
        );
        assert_eq!(
            parse_route("edit/").unwrap_err(),
            RouteParseError::UnknownRoute("edit/".to_string())
        );
        assert_eq!(parse_route("   ").unwrap_err(), RouteParseError::Empty);
    }

    #[test]
    fn rejects_malformed_and_nil_record_ids() {
        assert_eq!(
            parse_route("edit/not-a-uuid").unwrap_err(),
            RouteParseError::InvalidRecordId("not-a-uuid".to_string())
        );
        let id = Uuid::new_v4();
        for alias in [
            format!("{{{id}}}"),
            format!("urn:uuid:{id}"),
            id.simple().to_string(),
            id.to_string().to_uppercase(),
        ] {
            assert_eq!(
                parse_route(&format!("edit/{alias}")).unwrap_err(),
                RouteParseError::InvalidRecordId(alias)
            );
        }
        let nil = Uuid::nil().to_string();
        assert_eq!(
            parse_route(&format!("edit/{nil}")).unwrap_err(),
            RouteParseError::InvalidRecordId(nil)
        );
    }
}
