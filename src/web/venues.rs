use super::{
    bad_form, blocking, deletion_response, failed, home, home_after_failure, read_body, redirect,
    render, AppState, DetailQuery, IdPath,
};
use crate::error::Error;
use crate::forms::{FormErrors, SearchForm, VenueForm};
use crate::templates;
use crate::views::ProfileFormView;

use gotham::handler::HandlerResult;
use gotham::state::{FromState, State};
use hyper::{Body, Response, StatusCode};

pub fn list(state: State) -> (State, Response<Body>) {
    let app = AppState::borrow_from(&state);
    let response = match app.directory.venues_by_location() {
        Ok(groups) => render(&state, StatusCode::OK, |buf| {
            templates::venues_html(buf, &app.site_name, &groups)
        }),
        Err(err) => err.as_response(&state),
    };
    (state, response)
}

pub async fn search(mut state: State) -> HandlerResult {
    let form = read_body(&mut state)
        .await
        .and_then(|body| SearchForm::from_form_body(&body).map_err(bad_form));
    let form = match form {
        Ok(form) => form,
        Err(err) => return Ok(failed(state, err)),
    };
    let results =
        blocking(&state, move |directory| directory.search_venues(&form.search_term)).await;
    let response = match results {
        Ok(results) => {
            let app = AppState::borrow_from(&state);
            render(&state, StatusCode::OK, |buf| {
                templates::search_venues_html(buf, &app.site_name, &results)
            })
        }
        Err(err) => err.as_response(&state),
    };
    Ok((state, response))
}

pub fn detail(mut state: State) -> (State, Response<Body>) {
    let IdPath { id } = IdPath::take_from(&mut state);
    let after_update = DetailQuery::take_from(&mut state).after_update();
    let app = AppState::borrow_from(&state);
    let response = match app.directory.venue_detail(id) {
        Ok(venue) => {
            let notice = after_update
                .then(|| format!("Venue {} was successfully updated!", venue.name));
            render(&state, StatusCode::OK, |buf| {
                templates::venue_html(buf, &app.site_name, &venue, notice.as_deref())
            })
        }
        Err(err) => err.as_response(&state),
    };
    (state, response)
}

fn form_page(
    state: &State,
    status: StatusCode,
    heading: &str,
    action: &str,
    form: &VenueForm,
    errors: &FormErrors,
) -> Response<Body> {
    let app = AppState::borrow_from(state);
    let view = ProfileFormView::venue(heading, action, form, errors);
    render(state, status, |buf| {
        templates::profile_form_html(buf, &app.site_name, &view)
    })
}

pub fn create_page(state: State) -> (State, Response<Body>) {
    let response = form_page(
        &state,
        StatusCode::OK,
        "List a new venue",
        "/venues/create",
        &VenueForm::default(),
        &FormErrors::default(),
    );
    (state, response)
}

pub async fn create(mut state: State) -> HandlerResult {
    let body = match read_body(&mut state).await {
        Ok(body) => body,
        Err(err) => return Ok(failed(state, err)),
    };
    let form = VenueForm::from_form_body(&body);
    let submitted = form.clone();
    let result = blocking(&state, move |directory| directory.create_venue(&submitted)).await;
    let response = match result {
        Ok(venue) => {
            let notice = format!("Venue {} was successfully listed!", venue.name);
            home(&state, StatusCode::OK, Some(notice.as_str()))
        }
        Err(Error::Validation(errors)) => form_page(
            &state,
            StatusCode::UNPROCESSABLE_ENTITY,
            "List a new venue",
            "/venues/create",
            &form,
            &errors,
        ),
        Err(err @ Error::Persistence { .. }) => home_after_failure(&state, &err),
        Err(err) => err.as_response(&state),
    };
    Ok((state, response))
}

pub fn edit_page(mut state: State) -> (State, Response<Body>) {
    let IdPath { id } = IdPath::take_from(&mut state);
    let app = AppState::borrow_from(&state);
    let response = match app.directory.venue(id) {
        Ok(venue) => form_page(
            &state,
            StatusCode::OK,
            &format!("Edit venue {}", venue.name),
            &format!("/venues/{}/edit", id),
            &VenueForm::from(&venue),
            &FormErrors::default(),
        ),
        Err(err) => err.as_response(&state),
    };
    (state, response)
}

pub async fn edit(mut state: State) -> HandlerResult {
    let IdPath { id } = IdPath::take_from(&mut state);
    let body = match read_body(&mut state).await {
        Ok(body) => body,
        Err(err) => return Ok(failed(state, err)),
    };
    let form = VenueForm::from_form_body(&body);
    let submitted = form.clone();
    let result = blocking(&state, move |directory| directory.update_venue(id, &submitted)).await;
    let response = match result {
        Ok(_) => redirect(&state, &format!("/venues/{}?updated=true", id)),
        Err(Error::Validation(errors)) => form_page(
            &state,
            StatusCode::UNPROCESSABLE_ENTITY,
            "Edit venue",
            &format!("/venues/{}/edit", id),
            &form,
            &errors,
        ),
        Err(err) => err.as_response(&state),
    };
    Ok((state, response))
}

pub fn delete(mut state: State) -> (State, Response<Body>) {
    let IdPath { id } = IdPath::take_from(&mut state);
    let result = AppState::borrow_from(&state).directory.delete_venue(id);
    let response = deletion_response(&state, result);
    (state, response)
}
