//! Decoding and validation of the form-encoded bodies posted by the create and
//! edit pages.
//!
//! Venue and artist forms carry a repeated `genres` field (one entry per
//! ticked checkbox), which `serde_urlencoded` cannot collect into a list, so
//! they are decoded from the raw key/value pairs. The flat show and search
//! forms go through serde.

use crate::models::{join_genres, split_genres, Artist, NewArtist, NewShow, NewVenue, Venue};

use chrono::NaiveDateTime;
use serde_derive::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use url::{form_urlencoded, Url};

pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

const START_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Validation messages keyed by form field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> = self
            .0
            .iter()
            .map(|(field, message)| format!("{} {}", field, message))
            .collect();
        f.write_str(&messages.join("; "))
    }
}

/// Raw key/value pairs of a form body, keeping repeated keys.
struct FormData(Vec<(String, String)>);

impl FormData {
    fn parse(buf: &[u8]) -> FormData {
        FormData(form_urlencoded::parse(buf).into_owned().collect())
    }

    fn get(&self, key: &str) -> String {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.trim().to_owned())
            .unwrap_or_default()
    }

    fn get_all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, value)| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .collect()
    }

    fn checked(&self, key: &str) -> bool {
        matches!(self.get(key).as_str(), "y" | "on" | "true")
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub website_link: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_form_body(buf: &[u8]) -> VenueForm {
        let form = FormData::parse(buf);
        VenueForm {
            name: form.get("name"),
            city: form.get("city"),
            state: form.get("state"),
            address: form.get("address"),
            phone: form.get("phone"),
            genres: form.get_all("genres"),
            website_link: form.get("website_link"),
            facebook_link: form.get("facebook_link"),
            image_link: form.get("image_link"),
            seeking_talent: form.checked("seeking_talent"),
            seeking_description: form.get("seeking_description"),
        }
    }

    pub fn validate(&self) -> Result<NewVenue, FormErrors> {
        let mut errors = FormErrors::default();
        validate_common(
            &mut errors,
            &Common {
                name: &self.name,
                city: &self.city,
                state: &self.state,
                phone: &self.phone,
                genres: &self.genres,
                website_link: &self.website_link,
                facebook_link: &self.facebook_link,
                image_link: &self.image_link,
            },
        );
        errors.into_result()?;
        Ok(NewVenue {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            genres: join_genres(&self.genres),
            website_link: self.website_link.clone(),
            facebook_link: self.facebook_link.clone(),
            image_link: self.image_link.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: non_blank(&self.seeking_description),
        })
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        VenueForm {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: split_genres(&venue.genres),
            website_link: venue.website_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            image_link: venue.image_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub website_link: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_form_body(buf: &[u8]) -> ArtistForm {
        let form = FormData::parse(buf);
        ArtistForm {
            name: form.get("name"),
            city: form.get("city"),
            state: form.get("state"),
            phone: form.get("phone"),
            genres: form.get_all("genres"),
            website_link: form.get("website_link"),
            facebook_link: form.get("facebook_link"),
            image_link: form.get("image_link"),
            seeking_venue: form.checked("seeking_venue"),
            seeking_description: form.get("seeking_description"),
        }
    }

    pub fn validate(&self) -> Result<NewArtist, FormErrors> {
        let mut errors = FormErrors::default();
        validate_common(
            &mut errors,
            &Common {
                name: &self.name,
                city: &self.city,
                state: &self.state,
                phone: &self.phone,
                genres: &self.genres,
                website_link: &self.website_link,
                facebook_link: &self.facebook_link,
                image_link: &self.image_link,
            },
        );
        errors.into_result()?;
        Ok(NewArtist {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            genres: join_genres(&self.genres),
            website_link: self.website_link.clone(),
            facebook_link: self.facebook_link.clone(),
            image_link: self.image_link.clone(),
            seeking_venue: self.seeking_venue,
            seeking_description: non_blank(&self.seeking_description),
        })
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        ArtistForm {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: split_genres(&artist.genres),
            website_link: artist.website_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            image_link: artist.image_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    pub fn from_form_body(buf: &[u8]) -> Result<ShowForm, serde_urlencoded::de::Error> {
        serde_urlencoded::from_bytes(buf)
    }

    /// Checks the shape of the submission. Whether the referenced artist and
    /// venue exist is left to the caller, which owns the store.
    pub fn validate(&self) -> Result<NewShow, FormErrors> {
        let mut errors = FormErrors::default();
        let artist_id = parse_id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = parse_id(&mut errors, "venue_id", &self.venue_id);
        let start_time = parse_start_time(self.start_time.trim());
        if start_time.is_none() {
            errors.add("start_time", "must be a date and time like 2024-05-21 21:30");
        }
        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) => Ok(NewShow {
                artist_id,
                venue_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

impl SearchForm {
    pub fn from_form_body(buf: &[u8]) -> Result<SearchForm, serde_urlencoded::de::Error> {
        serde_urlencoded::from_bytes(buf)
    }
}

pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

struct Common<'a> {
    name: &'a str,
    city: &'a str,
    state: &'a str,
    phone: &'a str,
    genres: &'a [String],
    website_link: &'a str,
    facebook_link: &'a str,
    image_link: &'a str,
}

fn validate_common(errors: &mut FormErrors, form: &Common<'_>) {
    if form.name.is_empty() {
        errors.add("name", "is required");
    }
    if form.city.is_empty() {
        errors.add("city", "is required");
    }
    if form.state.is_empty() {
        errors.add("state", "is required");
    } else if !STATES.contains(&form.state) {
        errors.add("state", "is not a valid choice");
    }
    if form.genres.is_empty() {
        errors.add("genres", "must include at least one genre");
    }
    if !form.phone.is_empty() && !valid_phone(form.phone) {
        errors.add("phone", "is not a valid phone number");
    }
    for (field, link) in [
        ("website_link", form.website_link),
        ("facebook_link", form.facebook_link),
        ("image_link", form.image_link),
    ] {
        if !link.is_empty() && !valid_link(link) {
            errors.add(field, "must be a full http(s) URL");
        }
    }
}

fn valid_phone(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || " -.()+".contains(c));
    allowed && phone.chars().filter(char::is_ascii_digit).count() >= 7
}

fn valid_link(link: &str) -> bool {
    Url::parse(link)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}

fn parse_id(errors: &mut FormErrors, field: &'static str, value: &str) -> Option<i32> {
    match value.trim().parse() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.add(field, "must be chosen from the list");
            None
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const FILLMORE: &[u8] = b"name=The+Fillmore&city=San+Francisco&state=CA\
        &address=1805+Geary+Blvd&phone=415-346-3000&genres=Rock&genres=Jazz\
        &website_link=https%3A%2F%2Ffillmore.example&facebook_link=\
        &image_link=&seeking_talent=y&seeking_description=";

    #[test]
    fn venue_form_collects_every_genre() {
        let form = VenueForm::from_form_body(FILLMORE);
        assert_eq!(form.name, "The Fillmore");
        assert_eq!(form.genres, vec!["Rock", "Jazz"]);
        assert!(form.seeking_talent);

        let venue = form.validate().unwrap();
        assert_eq!(venue.genres, "Rock, Jazz");
        assert_eq!(venue.website_link, "https://fillmore.example");
        assert_eq!(venue.seeking_description, None);
    }

    #[test]
    fn unticked_checkbox_is_false() {
        let form = ArtistForm::from_form_body(b"name=Guns&city=Austin&state=TX&genres=Punk");
        assert!(!form.seeking_venue);
        let artist = form.validate().unwrap();
        assert_eq!(artist.genres, "Punk");
        assert!(!artist.seeking_venue);
    }

    #[test]
    fn every_failing_field_is_reported() {
        let form = VenueForm::from_form_body(
            b"name=&city=Austin&state=Texas&phone=call+me&image_link=not-a-url",
        );
        let errors = form.validate().unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["genres", "image_link", "name", "phone", "state"]);
        assert_eq!(errors.get("name"), Some("is required"));
        assert_eq!(errors.get("city"), None);
    }

    #[test]
    fn links_must_be_http() {
        assert!(valid_link("http://example.com/a.png"));
        assert!(valid_link("https://www.facebook.com/fillmore"));
        assert!(!valid_link("ftp://example.com"));
        assert!(!valid_link("www.example.com"));
    }

    #[test]
    fn phone_numbers() {
        assert!(valid_phone("415-346-3000"));
        assert!(valid_phone("+1 (512) 555.0199"));
        assert!(!valid_phone("555-01"));
        assert!(!valid_phone("five five five"));
    }

    #[test]
    fn venue_form_round_trips_through_a_record() {
        let new_venue = VenueForm::from_form_body(FILLMORE).validate().unwrap();
        let venue = Venue {
            id: 1,
            name: new_venue.name.clone(),
            city: new_venue.city.clone(),
            state: new_venue.state.clone(),
            address: new_venue.address.clone(),
            phone: new_venue.phone.clone(),
            genres: new_venue.genres.clone(),
            website_link: new_venue.website_link.clone(),
            facebook_link: new_venue.facebook_link.clone(),
            image_link: new_venue.image_link.clone(),
            seeking_talent: new_venue.seeking_talent,
            seeking_description: new_venue.seeking_description.clone(),
        };
        assert_eq!(VenueForm::from(&venue).validate().unwrap(), new_venue);
    }

    #[test]
    fn show_form_accepts_several_time_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 5, 21)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap();
        for start_time in ["2024-05-21 21:30:00", "2024-05-21 21:30", "2024-05-21T21:30"] {
            assert_eq!(parse_start_time(start_time), Some(expected));
        }
        assert_eq!(parse_start_time("next tuesday"), None);
    }

    #[test]
    fn show_form_reports_bad_fields() {
        let form =
            ShowForm::from_form_body(b"artist_id=abc&venue_id=2&start_time=tomorrow").unwrap();
        let errors = form.validate().unwrap_err();
        assert!(errors.get("artist_id").is_some());
        assert!(errors.get("venue_id").is_none());
        assert!(errors.get("start_time").is_some());

        let show = ShowForm::from_form_body(b"artist_id=1&venue_id=2&start_time=2024-05-21+21%3A30")
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!((show.artist_id, show.venue_id), (1, 2));
    }

    #[test]
    fn missing_search_term_is_empty() {
        assert_eq!(SearchForm::from_form_body(b"").unwrap().search_term, "");
        assert_eq!(
            SearchForm::from_form_body(b"search_term=Music").unwrap().search_term,
            "Music"
        );
    }
}
