//! Public addresses for a bit: the editable workspace and the read-only
//! detail view are distinct routes over the same id.

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Editable workspace for a bit.
    Editor(Uuid),
    /// Read-only detail view of a bit.
    Detail(Uuid),
}

impl Route {
    pub fn id(&self) -> Uuid {
        match self {
            Route::Editor(id) | Route::Detail(id) => *id,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Editor(id) => write!(f, "/editor/{}", id),
            Route::Detail(id) => write!(f, "/bit/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parse_id = |raw: &str| {
            Uuid::parse_str(raw).map_err(|_| format!("Invalid bit id in route: {}", raw))
        };
        if let Some(raw) = s.strip_prefix("/editor/") {
            return Ok(Route::Editor(parse_id(raw)?));
        }
        if let Some(raw) = s.strip_prefix("/bit/") {
            return Ok(Route::Detail(parse_id(raw)?));
        }
        Err(format!("Unknown route: {}", s))
    }
}
