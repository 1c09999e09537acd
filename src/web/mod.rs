//! HTTP surface: the gotham router, the state it hands to every handler and
//! the small response helpers the handlers share.

mod artists;
mod shows;
mod venues;

use crate::directory::Directory;
use crate::error::{log_cause, Error};
use crate::store::SqliteStore;
use crate::templates;
use crate::templates::statics::StaticFile;
use crate::views::DeleteOutcome;

use bytes::Bytes;
use gotham::helpers::http::response::{create_empty_response, create_response};
use gotham::middleware::logger::RequestLogger;
use gotham::middleware::state::StateMiddleware;
use gotham::pipeline::{new_pipeline, single_pipeline};
use gotham::router::{builder::*, Router};
use gotham::state::{FromState, State};
use gotham_derive::{StateData, StaticResponseExtender};
use hyper::header::{HeaderValue, LOCATION};
use hyper::{Body, Response, StatusCode};
use serde::Serialize;
use serde_derive::Deserialize;
use std::future::Future;
use std::sync::Arc;

/// Shared by every request through [`StateMiddleware`].
#[derive(Clone, StateData)]
pub struct AppState {
    pub directory: Arc<Directory<SqliteStore>>,
    pub site_name: Arc<str>,
}

impl AppState {
    pub fn new(directory: Directory<SqliteStore>, site_name: &str) -> AppState {
        AppState {
            directory: Arc::new(directory),
            site_name: Arc::from(site_name),
        }
    }
}

#[derive(Deserialize, StateData, StaticResponseExtender)]
pub struct IdPath {
    id: i32,
}

/// `?updated=...` marks the redirect that follows a successful edit.
#[derive(Deserialize, StateData, StaticResponseExtender)]
pub struct DetailQuery {
    #[serde(default)]
    updated: Option<String>,
}

impl DetailQuery {
    fn after_update(self) -> bool {
        self.updated.is_some()
    }
}

#[derive(Deserialize, StateData, StaticResponseExtender)]
pub struct StaticPath {
    name: String,
}

pub fn router(app: AppState) -> Router {
    let pipeline = new_pipeline()
        .add(StateMiddleware::new(app))
        .add(RequestLogger::new(log::Level::Info))
        .build();
    let (chain, pipelines) = single_pipeline(pipeline);

    build_router(chain, pipelines, |route| {
        route.get("/").to(serve_index);
        route
            .get("/static/:name")
            .with_path_extractor::<StaticPath>()
            .to(serve_static);

        route.get("/venues").to(venues::list);
        route.post("/venues/search").to_async(venues::search);
        route.get("/venues/create").to(venues::create_page);
        route.post("/venues/create").to_async(venues::create);
        route
            .get("/venues/:id")
            .with_path_extractor::<IdPath>()
            .with_query_string_extractor::<DetailQuery>()
            .to(venues::detail);
        route
            .delete("/venues/:id")
            .with_path_extractor::<IdPath>()
            .to(venues::delete);
        route
            .get("/venues/:id/edit")
            .with_path_extractor::<IdPath>()
            .to(venues::edit_page);
        route
            .post("/venues/:id/edit")
            .with_path_extractor::<IdPath>()
            .to_async(venues::edit);

        route.get("/artists").to(artists::list);
        route.post("/artists/search").to_async(artists::search);
        route.get("/artists/create").to(artists::create_page);
        route.post("/artists/create").to_async(artists::create);
        route
            .get("/artists/:id")
            .with_path_extractor::<IdPath>()
            .with_query_string_extractor::<DetailQuery>()
            .to(artists::detail);
        route
            .delete("/artists/:id")
            .with_path_extractor::<IdPath>()
            .to(artists::delete);
        route
            .get("/artists/:id/edit")
            .with_path_extractor::<IdPath>()
            .to(artists::edit_page);
        route
            .post("/artists/:id/edit")
            .with_path_extractor::<IdPath>()
            .to_async(artists::edit);

        route.get("/shows").to(shows::list);
        route.get("/shows/create").to(shows::create_page);
        route.post("/shows/create").to_async(shows::create);
    })
}

fn serve_index(state: State) -> (State, Response<Body>) {
    let response = home(&state, StatusCode::OK, None);
    (state, response)
}

fn serve_static(mut state: State) -> (State, Response<Body>) {
    let StaticPath { name } = StaticPath::take_from(&mut state);
    let response = match StaticFile::get(&name) {
        Some(file) => {
            let mime = if name.ends_with(".css") {
                mime::TEXT_CSS
            } else if name.ends_with(".js") {
                mime::TEXT_JAVASCRIPT
            } else {
                mime::APPLICATION_OCTET_STREAM
            };
            create_response(&state, StatusCode::OK, mime, file.content)
        }
        None => create_empty_response(&state, StatusCode::NOT_FOUND),
    };
    (state, response)
}

/// The landing page, optionally topped with the outcome of the last write.
fn home(state: &State, status: StatusCode, notice: Option<&str>) -> Response<Body> {
    let app = AppState::borrow_from(state);
    render(state, status, |buf| {
        templates::home_html(buf, &app.site_name, notice)
    })
}

/// After a failed create the user lands on the home page, like after a
/// successful one, with the failure named in the notice.
fn home_after_failure(state: &State, err: &Error) -> Response<Body> {
    log_cause(err);
    let notice = err.to_string();
    home(state, err.status_code(), Some(notice.as_str()))
}

fn render<F>(state: &State, status: StatusCode, render: F) -> Response<Body>
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buf = Vec::new();
    match render(&mut buf) {
        Ok(()) => create_response(state, status, mime::TEXT_HTML_UTF_8, buf),
        Err(err) => Error::Render(err).as_response(state),
    }
}

fn render_json<T: Serialize>(state: &State, status: StatusCode, value: &T) -> Response<Body> {
    match serde_json::to_vec(value) {
        Ok(body) => create_response(state, status, mime::APPLICATION_JSON, body),
        Err(err) => {
            tracing::error!(error = %err, "failed to encode response");
            create_empty_response(state, StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Answers the delete buttons' `fetch` calls with `{"success", "error"}`.
fn deletion_response(state: &State, result: Result<String, Error>) -> Response<Body> {
    let (status, outcome) = match result {
        Ok(_) => (
            StatusCode::OK,
            DeleteOutcome {
                success: true,
                error: String::new(),
            },
        ),
        Err(err) => {
            let status = err.status_code();
            if status.is_server_error() {
                log_cause(&err);
            }
            (
                status,
                DeleteOutcome {
                    success: false,
                    error: err.to_string(),
                },
            )
        }
    };
    render_json(state, status, &outcome)
}

fn redirect(state: &State, to: &str) -> Response<Body> {
    let mut response = create_empty_response(state, StatusCode::SEE_OTHER);
    if let Ok(location) = HeaderValue::from_str(to) {
        response.headers_mut().insert(LOCATION, location);
    }
    response
}

/// Runs a directory call on tokio's blocking pool; diesel and r2d2 block the
/// calling thread.
fn blocking<T, F>(
    state: &State,
    f: F,
) -> impl Future<Output = Result<T, Error>> + Send + 'static
where
    F: FnOnce(&Directory<SqliteStore>) -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    let directory = Arc::clone(&AppState::borrow_from(state).directory);
    async move {
        match tokio::task::spawn_blocking(move || f(&directory)).await {
            Ok(result) => result,
            Err(err) => Err(Error::from(err)),
        }
    }
}

fn failed(state: State, err: Error) -> (State, Response<Body>) {
    let response = err.as_response(&state);
    (state, response)
}

async fn read_body(state: &mut State) -> Result<Bytes, Error> {
    hyper::body::to_bytes(Body::take_from(state))
        .await
        .map_err(|err| Error::BadRequest(err.to_string()))
}

fn bad_form(err: serde_urlencoded::de::Error) -> Error {
    Error::BadRequest(err.to_string())
}
