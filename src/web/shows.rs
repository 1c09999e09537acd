use super::{bad_form, blocking, failed, home, home_after_failure, read_body, render, AppState};
use crate::error::Error;
use crate::forms::{FormErrors, ShowForm};
use crate::templates;
use crate::views::{Listing, ShowFormView};

use gotham::handler::HandlerResult;
use gotham::state::{FromState, State};
use hyper::{Body, Response, StatusCode};

type Choices = (Vec<Listing>, Vec<Listing>);

pub fn list(state: State) -> (State, Response<Body>) {
    let app = AppState::borrow_from(&state);
    let response = match app.directory.shows() {
        Ok(shows) => render(&state, StatusCode::OK, |buf| {
            templates::shows_html(buf, &app.site_name, &shows)
        }),
        Err(err) => err.as_response(&state),
    };
    (state, response)
}

fn form_page(
    state: &State,
    status: StatusCode,
    choices: Result<Choices, Error>,
    form: &ShowForm,
    errors: &FormErrors,
) -> Response<Body> {
    let app = AppState::borrow_from(state);
    match choices {
        Ok((artists, venues)) => {
            let view = ShowFormView::new(&artists, &venues, form, errors);
            render(state, status, |buf| {
                templates::show_form_html(buf, &app.site_name, &view)
            })
        }
        Err(err) => err.as_response(state),
    }
}

pub fn create_page(state: State) -> (State, Response<Body>) {
    let choices = AppState::borrow_from(&state).directory.show_form_choices();
    let response = form_page(
        &state,
        StatusCode::OK,
        choices,
        &ShowForm::default(),
        &FormErrors::default(),
    );
    (state, response)
}

pub async fn create(mut state: State) -> HandlerResult {
    let form = read_body(&mut state)
        .await
        .and_then(|body| ShowForm::from_form_body(&body).map_err(bad_form));
    let form = match form {
        Ok(form) => form,
        Err(err) => return Ok(failed(state, err)),
    };
    let submitted = form.clone();
    let result = blocking(&state, move |directory| directory.create_show(&submitted)).await;
    let response = match result {
        Ok(_) => home(&state, StatusCode::OK, Some("Show was successfully listed!")),
        Err(Error::Validation(errors)) => {
            let choices = blocking(&state, |directory| directory.show_form_choices()).await;
            form_page(&state, StatusCode::UNPROCESSABLE_ENTITY, choices, &form, &errors)
        }
        Err(err @ Error::Persistence { .. }) => home_after_failure(&state, &err),
        Err(err) => err.as_response(&state),
    };
    Ok((state, response))
}
