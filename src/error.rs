use crate::forms::FormErrors;
use crate::store::StoreError;
use crate::templates;
use crate::web::AppState;

use gotham::helpers::http::response::create_response;
use gotham::state::{FromState, State};
use hyper::{Body, Response, StatusCode};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Venue,
    Artist,
    Show,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Venue => "Venue",
            EntityKind::Artist => "Artist",
            EntityKind::Show => "Show",
        })
    }
}

/// The write that failed, phrased the way it ends a user-facing sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Listed,
    Updated,
    Deleted,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Listed => "listed",
            Action::Updated => "updated",
            Action::Deleted => "deleted",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: i32 },
    #[error("Invalid submission: {0}")]
    Validation(FormErrors),
    #[error("An error occurred. {kind}{} could not be {action}.", display_name(.name))]
    Persistence {
        kind: EntityKind,
        name: String,
        action: Action,
        #[source]
        source: StoreError,
    },
    #[error("{kind} {id} could not be deleted while {shows} show(s) are booked there.")]
    InUse {
        kind: EntityKind,
        id: i32,
        shows: i64,
    },
    #[error("Database error")]
    Store(#[from] StoreError),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Configuration error")]
    Config(#[from] config::ConfigError),
    #[error("Server failed to start: {0}")]
    Startup(String),
    #[error("Error rendering page")]
    Render(#[from] std::io::Error),
    #[error("Background task failed")]
    Task(#[from] tokio::task::JoinError),
}

fn display_name(name: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!(" {}", name)
    }
}

impl Error {
    pub fn persistence(kind: EntityKind, name: &str, action: Action, source: StoreError) -> Self {
        Error::Persistence {
            kind,
            name: name.to_owned(),
            action,
            source,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        use Error::*;
        match self {
            NotFound { .. } => StatusCode::NOT_FOUND,
            Validation(..) => StatusCode::UNPROCESSABLE_ENTITY,
            InUse { .. } => StatusCode::CONFLICT,
            BadRequest(..) => StatusCode::BAD_REQUEST,
            Persistence { .. } | Store(..) | Config(..) | Startup(..) | Render(..) | Task(..) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Renders the generic error page. Anything that is not the caller's fault
    /// is logged here, with its cause, before being collapsed into a 500.
    pub fn as_response(&self, state: &State) -> Response<Body> {
        let status = self.status_code();
        if status.is_server_error() {
            log_cause(self);
        }
        let site_name = AppState::try_borrow_from(state)
            .map(|app| app.site_name.to_string())
            .unwrap_or_default();
        let message = match self {
            Error::Persistence { .. } => self.to_string(),
            _ if status.is_server_error() => {
                "Something went wrong on our end. Please try again later.".to_owned()
            }
            _ => self.to_string(),
        };
        let mut buf = Vec::new();
        match templates::error_html(&mut buf, &site_name, status.as_u16(), &message) {
            Ok(()) => create_response(state, status, mime::TEXT_HTML_UTF_8, buf),
            Err(_) => create_response(state, status, mime::TEXT_PLAIN_UTF_8, message),
        }
    }
}

pub(crate) fn log_cause(err: &Error) {
    match std::error::Error::source(err) {
        Some(source) => tracing::error!(error = %err, cause = %source, "request failed"),
        None => tracing::error!(error = %err, "request failed"),
    }
}
