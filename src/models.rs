use crate::schema::*;

use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Clone, Debug, Identifiable, Queryable, Selectable)]
#[diesel(table_name = venues)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: String,
    pub website_link: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Clone, Debug, Identifiable, Queryable, Selectable)]
#[diesel(table_name = artists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub website_link: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Associations, Clone, Debug, Identifiable, Queryable, Selectable)]
#[diesel(belongs_to(Artist))]
#[diesel(belongs_to(Venue))]
#[diesel(table_name = shows)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

// Records are the same entity when their ids match, whatever their fields say.
impl PartialEq for Venue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Artist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Show {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Every editable venue column. Used both to insert and to overwrite a row, so
/// an update always replaces the whole record.
#[derive(AsChangeset, Clone, Debug, Insertable, PartialEq)]
#[diesel(table_name = venues)]
#[diesel(treat_none_as_null = true)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: String,
    pub website_link: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Every editable artist column; see [`NewVenue`].
#[derive(AsChangeset, Clone, Debug, Insertable, PartialEq)]
#[diesel(table_name = artists)]
#[diesel(treat_none_as_null = true)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub website_link: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Clone, Debug, Insertable, PartialEq)]
#[diesel(table_name = shows)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

const GENRE_SEPARATOR: &str = ", ";

/// Genres are kept as denormalized text: the selected tags joined by `", "`.
pub fn join_genres(genres: &[String]) -> String {
    genres.join(GENRE_SEPARATOR)
}

pub fn split_genres(genres: &str) -> Vec<String> {
    genres
        .split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_owned)
        .collect()
}
