//! Plain structs handed to the templates. Every page gets its data through an
//! explicit mapping from the stored records, never by copying fields wholesale.

use crate::forms::{ArtistForm, FormErrors, VenueForm, GENRES, STATES};
use crate::models::{split_genres, Artist, Show, Venue};

use chrono::NaiveDateTime;
use serde_derive::Serialize;

const SHOW_TIME_FORMAT: &str = "%m/%d/%Y, %H:%M";

pub fn format_show_time(start_time: &NaiveDateTime) -> String {
    start_time.format(SHOW_TIME_FORMAT).to_string()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VenueGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// An `(id, name)` pair, used for the artist index and the show form selects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub id: i32,
    pub name: String,
}

impl From<&Venue> for Listing {
    fn from(venue: &Venue) -> Self {
        Listing {
            id: venue.id,
            name: venue.name.clone(),
        }
    }
}

impl From<&Artist> for Listing {
    fn from(artist: &Artist) -> Self {
        Listing {
            id: artist.id,
            name: artist.name.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SearchResults<T> {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(search_term: &str, data: Vec<T>) -> Self {
        SearchResults {
            search_term: search_term.to_owned(),
            count: data.len(),
            data,
        }
    }
}

/// A show on a venue page, described by the artist playing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtistShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

impl ArtistShow {
    pub fn new(show: &Show, artist: &Artist) -> Self {
        ArtistShow {
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: format_show_time(&show.start_time),
        }
    }
}

/// A show on an artist page, described by the venue hosting it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VenueShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

impl VenueShow {
    pub fn new(show: &Show, venue: &Venue) -> Self {
        VenueShow {
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
            start_time: format_show_time(&show.start_time),
        }
    }
}

#[derive(Clone, Debug)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website_link: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn new(venue: Venue, past_shows: Vec<ArtistShow>, upcoming_shows: Vec<ArtistShow>) -> Self {
        VenueDetail {
            id: venue.id,
            genres: split_genres(&venue.genres),
            name: venue.name,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website_link: venue.website_link,
            facebook_link: venue.facebook_link,
            image_link: venue.image_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website_link: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(artist: Artist, past_shows: Vec<VenueShow>, upcoming_shows: Vec<VenueShow>) -> Self {
        ArtistDetail {
            id: artist.id,
            genres: split_genres(&artist.genres),
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website_link: artist.website_link,
            facebook_link: artist.facebook_link,
            image_link: artist.image_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

/// Body of the DELETE endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub success: bool,
    pub error: String,
}

/// One `<input>` of a create or edit form.
#[derive(Clone, Debug)]
pub struct InputField {
    pub label: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub error: Option<String>,
}

impl InputField {
    fn new(
        label: &'static str,
        name: &'static str,
        kind: &'static str,
        placeholder: &'static str,
        value: &str,
        errors: &FormErrors,
    ) -> Self {
        InputField {
            label,
            name,
            kind,
            placeholder,
            value: value.to_owned(),
            error: errors.get(name).map(str::to_owned),
        }
    }
}

/// An `<option>` or checkbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

fn state_choices(selected: &str) -> Vec<Choice> {
    STATES
        .iter()
        .map(|state| Choice {
            value: (*state).to_owned(),
            label: (*state).to_owned(),
            selected: *state == selected,
        })
        .collect()
}

/// The offered genres plus any stored tag that is not among them, so editing a
/// record never silently drops one of its genres.
fn genre_choices(selected: &[String]) -> Vec<Choice> {
    let mut choices: Vec<Choice> = GENRES
        .iter()
        .map(|genre| Choice {
            value: (*genre).to_owned(),
            label: (*genre).to_owned(),
            selected: selected.iter().any(|s| s == genre),
        })
        .collect();
    for genre in selected {
        if !GENRES.contains(&genre.as_str()) {
            choices.push(Choice {
                value: genre.clone(),
                label: genre.clone(),
                selected: true,
            });
        }
    }
    choices
}

/// Everything a venue or artist form page needs. `seeking` is the
/// seeking-talent checkbox for venues and seeking-venue for artists.
#[derive(Clone, Debug)]
pub struct ProfileFormView {
    pub heading: String,
    pub action: String,
    pub identity: Vec<InputField>,
    pub states: Vec<Choice>,
    pub state_error: Option<String>,
    pub details: Vec<InputField>,
    pub genres: Vec<Choice>,
    pub genres_error: Option<String>,
    pub seeking_name: &'static str,
    pub seeking_label: &'static str,
    pub seeking: bool,
    pub seeking_description: String,
}

impl ProfileFormView {
    pub fn venue(heading: &str, action: &str, form: &VenueForm, errors: &FormErrors) -> Self {
        ProfileFormView {
            heading: heading.to_owned(),
            action: action.to_owned(),
            identity: vec![
                InputField::new("Name", "name", "text", "", &form.name, errors),
                InputField::new("City", "city", "text", "", &form.city, errors),
            ],
            states: state_choices(&form.state),
            state_error: errors.get("state").map(str::to_owned),
            details: vec![
                InputField::new("Address", "address", "text", "", &form.address, errors),
                InputField::new("Phone", "phone", "tel", "xxx-xxx-xxxx", &form.phone, errors),
                InputField::new(
                    "Image Link",
                    "image_link",
                    "url",
                    "https://",
                    &form.image_link,
                    errors,
                ),
                InputField::new(
                    "Facebook Link",
                    "facebook_link",
                    "url",
                    "https://",
                    &form.facebook_link,
                    errors,
                ),
                InputField::new(
                    "Website Link",
                    "website_link",
                    "url",
                    "https://",
                    &form.website_link,
                    errors,
                ),
            ],
            genres: genre_choices(&form.genres),
            genres_error: errors.get("genres").map(str::to_owned),
            seeking_name: "seeking_talent",
            seeking_label: "Looking for talent",
            seeking: form.seeking_talent,
            seeking_description: form.seeking_description.clone(),
        }
    }

    pub fn artist(heading: &str, action: &str, form: &ArtistForm, errors: &FormErrors) -> Self {
        ProfileFormView {
            heading: heading.to_owned(),
            action: action.to_owned(),
            identity: vec![
                InputField::new("Name", "name", "text", "", &form.name, errors),
                InputField::new("City", "city", "text", "", &form.city, errors),
            ],
            states: state_choices(&form.state),
            state_error: errors.get("state").map(str::to_owned),
            details: vec![
                InputField::new("Phone", "phone", "tel", "xxx-xxx-xxxx", &form.phone, errors),
                InputField::new(
                    "Image Link",
                    "image_link",
                    "url",
                    "https://",
                    &form.image_link,
                    errors,
                ),
                InputField::new(
                    "Facebook Link",
                    "facebook_link",
                    "url",
                    "https://",
                    &form.facebook_link,
                    errors,
                ),
                InputField::new(
                    "Website Link",
                    "website_link",
                    "url",
                    "https://",
                    &form.website_link,
                    errors,
                ),
            ],
            genres: genre_choices(&form.genres),
            genres_error: errors.get("genres").map(str::to_owned),
            seeking_name: "seeking_venue",
            seeking_label: "Looking for venues",
            seeking: form.seeking_venue,
            seeking_description: form.seeking_description.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShowFormView {
    pub artists: Vec<Choice>,
    pub artist_error: Option<String>,
    pub venues: Vec<Choice>,
    pub venue_error: Option<String>,
    pub start_time: InputField,
}

impl ShowFormView {
    pub fn new(
        artists: &[Listing],
        venues: &[Listing],
        form: &crate::forms::ShowForm,
        errors: &FormErrors,
    ) -> Self {
        let choices = |listings: &[Listing], selected: &str| -> Vec<Choice> {
            listings
                .iter()
                .map(|listing| Choice {
                    value: listing.id.to_string(),
                    label: listing.name.clone(),
                    selected: listing.id.to_string() == selected.trim(),
                })
                .collect()
        };
        ShowFormView {
            artists: choices(artists, &form.artist_id),
            artist_error: errors.get("artist_id").map(str::to_owned),
            venues: choices(venues, &form.venue_id),
            venue_error: errors.get("venue_id").map(str::to_owned),
            start_time: InputField::new(
                "Start Time",
                "start_time",
                "text",
                "YYYY-MM-DD HH:MM",
                &form.start_time,
                errors,
            ),
        }
    }
}
