use crate::error::{Action, EntityKind, Error};
use crate::forms::{ArtistForm, FormErrors, ShowForm, VenueForm};
use crate::models::{Artist, Show, Venue};
use crate::store::{Deletion, Store};
use crate::views::{
    ArtistDetail, ArtistShow, ArtistSummary, Listing, SearchResults, ShowListing, VenueDetail,
    VenueGroup, VenueShow, VenueSummary,
};

use chrono::NaiveDateTime;
use std::collections::HashMap;
use tracing::{info, warn};

/// The wall clock shows are compared against. Stored start times carry no
/// zone, so this is local time.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Splits entries into `(past, upcoming)`. A show starting exactly at `now`
/// is past.
pub fn partition_shows<T>(
    entries: impl IntoIterator<Item = (NaiveDateTime, T)>,
    now: NaiveDateTime,
) -> (Vec<T>, Vec<T>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for (start_time, entry) in entries {
        if start_time > now {
            upcoming.push(entry);
        } else {
            past.push(entry);
        }
    }
    (past, upcoming)
}

pub fn count_upcoming<'a>(shows: impl IntoIterator<Item = &'a Show>, now: NaiveDateTime) -> usize {
    shows
        .into_iter()
        .filter(|show| show.start_time > now)
        .count()
}

fn upcoming_by_venue(shows: &[Show], now: NaiveDateTime) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for show in shows.iter().filter(|show| show.start_time > now) {
        *counts.entry(show.venue_id).or_insert(0) += 1;
    }
    counts
}

/// Groups venues by exact `(city, state)`, groups ordered by first appearance.
pub fn group_by_location(venues: Vec<Venue>, upcoming: &HashMap<i32, usize>) -> Vec<VenueGroup> {
    let mut groups: Vec<VenueGroup> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    for venue in venues {
        let summary = VenueSummary {
            id: venue.id,
            num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
            name: venue.name,
        };
        let key = (venue.city, venue.state);
        match index.get(&key) {
            Some(&i) => groups[i].venues.push(summary),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(VenueGroup {
                    city: key.0,
                    state: key.1,
                    venues: vec![summary],
                });
            }
        }
    }
    groups
}

/// Queries and writes behind every page. The store is handed in at
/// construction; nothing here is global.
pub struct Directory<S> {
    store: S,
}

impl<S: Store> Directory<S> {
    pub fn new(store: S) -> Self {
        Directory { store }
    }

    pub fn venues_by_location(&self) -> Result<Vec<VenueGroup>, Error> {
        let now = now();
        let venues = self.store.venues()?;
        let shows = self.store.shows()?;
        Ok(group_by_location(venues, &upcoming_by_venue(&shows, now)))
    }

    pub fn search_venues(&self, term: &str) -> Result<SearchResults<Venue>, Error> {
        let venues = self.store.search_venues(term)?;
        Ok(SearchResults::new(term, venues))
    }

    pub fn search_artists(&self, term: &str) -> Result<SearchResults<ArtistSummary>, Error> {
        let now = now();
        let artists = self.store.search_artists(term)?;
        let shows = self.store.shows_by_artists(&artists)?;
        let data = artists
            .into_iter()
            .zip(shows)
            .map(|(artist, shows)| ArtistSummary {
                id: artist.id,
                name: artist.name,
                num_upcoming_shows: count_upcoming(&shows, now),
            })
            .collect();
        Ok(SearchResults::new(term, data))
    }

    pub fn venue(&self, id: i32) -> Result<Venue, Error> {
        self.store.venue(id)?.ok_or(Error::NotFound {
            kind: EntityKind::Venue,
            id,
        })
    }

    pub fn artist(&self, id: i32) -> Result<Artist, Error> {
        self.store.artist(id)?.ok_or(Error::NotFound {
            kind: EntityKind::Artist,
            id,
        })
    }

    pub fn venue_detail(&self, id: i32) -> Result<VenueDetail, Error> {
        let venue = self.venue(id)?;
        let shows = self.store.shows_at_venue(id)?;
        let (past, upcoming) = partition_shows(
            shows
                .iter()
                .map(|(show, artist)| (show.start_time, ArtistShow::new(show, artist))),
            now(),
        );
        Ok(VenueDetail::new(venue, past, upcoming))
    }

    pub fn artist_detail(&self, id: i32) -> Result<ArtistDetail, Error> {
        let artist = self.artist(id)?;
        let shows = self.store.shows_by_artist(id)?;
        let (past, upcoming) = partition_shows(
            shows
                .iter()
                .map(|(show, venue)| (show.start_time, VenueShow::new(show, venue))),
            now(),
        );
        Ok(ArtistDetail::new(artist, past, upcoming))
    }

    pub fn artists(&self) -> Result<Vec<Listing>, Error> {
        Ok(self.store.artists()?.iter().map(Listing::from).collect())
    }

    /// Artists and venues a show can be booked for, in that order.
    pub fn show_form_choices(&self) -> Result<(Vec<Listing>, Vec<Listing>), Error> {
        let artists = self.artists()?;
        let venues = self.store.venues()?.iter().map(Listing::from).collect();
        Ok((artists, venues))
    }

    pub fn create_venue(&self, form: &VenueForm) -> Result<Venue, Error> {
        let new_venue = form.validate().map_err(Error::Validation)?;
        let venue = self
            .store
            .insert_venue(&new_venue)
            .map_err(|err| {
                Error::persistence(EntityKind::Venue, &new_venue.name, Action::Listed, err)
            })?;
        info!(venue.id = venue.id, venue.name = %venue.name, "venue listed");
        Ok(venue)
    }

    /// Overwrites every editable field of an existing venue.
    pub fn update_venue(&self, id: i32, form: &VenueForm) -> Result<Venue, Error> {
        self.venue(id)?;
        let changes = form.validate().map_err(Error::Validation)?;
        let venue = self
            .store
            .update_venue(id, &changes)
            .map_err(|err| {
                Error::persistence(EntityKind::Venue, &changes.name, Action::Updated, err)
            })?
            .ok_or(Error::NotFound {
                kind: EntityKind::Venue,
                id,
            })?;
        info!(venue.id = id, "venue updated");
        Ok(venue)
    }

    /// Deletes a venue with no shows booked, returning its name.
    pub fn delete_venue(&self, id: i32) -> Result<String, Error> {
        let venue = self.venue(id)?;
        let deletion = self
            .store
            .delete_venue(id)
            .map_err(|err| {
                Error::persistence(EntityKind::Venue, &venue.name, Action::Deleted, err)
            })?;
        deleted(EntityKind::Venue, id, deletion)?;
        info!(venue.id = id, "venue deleted");
        Ok(venue.name)
    }

    pub fn create_artist(&self, form: &ArtistForm) -> Result<Artist, Error> {
        let new_artist = form.validate().map_err(Error::Validation)?;
        let artist = self
            .store
            .insert_artist(&new_artist)
            .map_err(|err| {
                Error::persistence(EntityKind::Artist, &new_artist.name, Action::Listed, err)
            })?;
        info!(artist.id = artist.id, artist.name = %artist.name, "artist listed");
        Ok(artist)
    }

    /// Overwrites every editable field of an existing artist.
    pub fn update_artist(&self, id: i32, form: &ArtistForm) -> Result<Artist, Error> {
        self.artist(id)?;
        let changes = form.validate().map_err(Error::Validation)?;
        let artist = self
            .store
            .update_artist(id, &changes)
            .map_err(|err| {
                Error::persistence(EntityKind::Artist, &changes.name, Action::Updated, err)
            })?
            .ok_or(Error::NotFound {
                kind: EntityKind::Artist,
                id,
            })?;
        info!(artist.id = id, "artist updated");
        Ok(artist)
    }

    pub fn delete_artist(&self, id: i32) -> Result<String, Error> {
        let artist = self.artist(id)?;
        let deletion = self
            .store
            .delete_artist(id)
            .map_err(|err| {
                Error::persistence(EntityKind::Artist, &artist.name, Action::Deleted, err)
            })?;
        deleted(EntityKind::Artist, id, deletion)?;
        info!(artist.id = id, "artist deleted");
        Ok(artist.name)
    }

    /// Books a show. Double bookings are not checked.
    pub fn create_show(&self, form: &ShowForm) -> Result<Show, Error> {
        let new_show = form.validate().map_err(Error::Validation)?;
        let mut errors = FormErrors::default();
        if self.store.artist(new_show.artist_id)?.is_none() {
            errors.add("artist_id", "does not match a listed artist");
        }
        if self.store.venue(new_show.venue_id)?.is_none() {
            errors.add("venue_id", "does not match a listed venue");
        }
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }
        let show = self
            .store
            .insert_show(&new_show)
            .map_err(|err| Error::persistence(EntityKind::Show, "", Action::Listed, err))?;
        info!(
            show.id = show.id,
            show.artist_id = show.artist_id,
            show.venue_id = show.venue_id,
            "show listed"
        );
        Ok(show)
    }

    pub fn shows(&self) -> Result<Vec<ShowListing>, Error> {
        let shows = self.store.shows()?;
        let venues: HashMap<i32, Venue> = self
            .store
            .venues()?
            .into_iter()
            .map(|venue| (venue.id, venue))
            .collect();
        let artists: HashMap<i32, Artist> = self
            .store
            .artists()?
            .into_iter()
            .map(|artist| (artist.id, artist))
            .collect();
        Ok(shows
            .into_iter()
            .filter_map(|show| {
                match (venues.get(&show.venue_id), artists.get(&show.artist_id)) {
                    (Some(venue), Some(artist)) => Some(ShowListing {
                        venue_id: venue.id,
                        venue_name: venue.name.clone(),
                        artist_id: artist.id,
                        artist_name: artist.name.clone(),
                        artist_image_link: artist.image_link.clone(),
                        start_time: show.start_time.to_string(),
                    }),
                    _ => {
                        warn!(show.id = show.id, "show references a missing artist or venue");
                        None
                    }
                }
            })
            .collect())
    }
}

fn deleted(kind: EntityKind, id: i32, deletion: Deletion) -> Result<(), Error> {
    match deletion {
        Deletion::Deleted => Ok(()),
        Deletion::Missing => Err(Error::NotFound { kind, id }),
        Deletion::InUse(shows) => Err(Error::InUse { kind, id, shows }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewShow;
    use crate::store::tests::{new_artist, new_venue, temp_store};
    use crate::store::SqliteStore;
    use chrono::{Duration, NaiveDate};
    use tempfile::TempDir;

    fn directory() -> (TempDir, Directory<SqliteStore>) {
        let (dir, store) = temp_store();
        (dir, Directory::new(store))
    }

    fn venue_form(name: &str, city: &str, state: &str) -> VenueForm {
        VenueForm {
            name: name.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
            genres: vec!["Jazz".to_owned(), "Rock".to_owned()],
            ..VenueForm::default()
        }
    }

    fn book(
        directory: &Directory<SqliteStore>,
        artist_id: i32,
        venue_id: i32,
        start_time: NaiveDateTime,
    ) {
        directory
            .store
            .insert_show(&NewShow {
                artist_id,
                venue_id,
                start_time,
            })
            .unwrap();
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 21)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn partition_puts_now_in_the_past() {
        let entries = vec![(at(19), "early"), (at(20), "now"), (at(21), "late")];
        let (past, upcoming) = partition_shows(entries, at(20));
        assert_eq!(past, vec!["early", "now"]);
        assert_eq!(upcoming, vec!["late"]);
    }

    #[test]
    fn upcoming_count_moves_with_the_clock() {
        let shows = vec![
            Show { id: 1, artist_id: 1, venue_id: 1, start_time: at(18) },
            Show { id: 2, artist_id: 1, venue_id: 1, start_time: at(22) },
        ];
        assert_eq!(count_upcoming(&shows, at(12)), 2);
        assert_eq!(count_upcoming(&shows, at(20)), 1);
        assert_eq!(count_upcoming(&shows, at(23)), 0);
    }

    #[test]
    fn grouping_keeps_every_venue_once() {
        let (_dir, directory) = directory();
        for (name, city, state) in [
            ("The Musical Hop", "San Francisco", "CA"),
            ("Park Square Live", "Austin", "TX"),
            ("The Dueling Pianos Bar", "New York", "NY"),
            ("The Fillmore", "San Francisco", "CA"),
            ("Lowercase Hall", "san francisco", "CA"),
        ] {
            directory.create_venue(&venue_form(name, city, state)).unwrap();
        }

        let groups = directory.venues_by_location().unwrap();
        let keys: Vec<_> = groups.iter().map(|g| (g.city.as_str(), g.state.as_str())).collect();
        assert_eq!(
            keys,
            vec![
                ("San Francisco", "CA"),
                ("Austin", "TX"),
                ("New York", "NY"),
                ("san francisco", "CA"),
            ]
        );
        let mut ids: Vec<i32> = groups.iter().flat_map(|g| g.venues.iter().map(|v| v.id)).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert_eq!(groups[0].venues.len(), 2);
        assert_eq!(groups[0].venues[1].name, "The Fillmore");
        assert_eq!(groups[0].venues[1].num_upcoming_shows, 0);
    }

    #[test]
    fn upcoming_shows_are_counted_per_venue() {
        let (_dir, directory) = directory();
        let hop = directory
            .create_venue(&venue_form("The Musical Hop", "San Francisco", "CA"))
            .unwrap();
        let park = directory.create_venue(&venue_form("Park Square Live", "Austin", "TX")).unwrap();
        let artist = directory.store.insert_artist(&new_artist("Guns N Petals")).unwrap();
        let now = now();
        book(&directory, artist.id, hop.id, now + Duration::days(3));
        book(&directory, artist.id, hop.id, now + Duration::days(10));
        book(&directory, artist.id, hop.id, now - Duration::days(3));
        book(&directory, artist.id, park.id, now - Duration::days(1));

        let groups = directory.venues_by_location().unwrap();
        let counts: HashMap<i32, usize> = groups
            .iter()
            .flat_map(|g| g.venues.iter().map(|v| (v.id, v.num_upcoming_shows)))
            .collect();
        assert_eq!(counts[&hop.id], 2);
        assert_eq!(counts[&park.id], 0);
    }

    #[test]
    fn venue_search_is_case_insensitive_over_name_city_and_state() {
        let (_dir, directory) = directory();
        directory.create_venue(&venue_form("The Musical Hop", "San Francisco", "CA")).unwrap();
        directory
            .create_venue(&venue_form("Park Square Live Music & Coffee", "Austin", "TX"))
            .unwrap();
        directory.create_venue(&venue_form("Austin City Hall", "Dallas", "TX")).unwrap();

        let upper = directory.search_venues("AUSTIN").unwrap();
        let lower = directory.search_venues("austin").unwrap();
        let names = |results: &SearchResults<Venue>| -> Vec<String> {
            results.data.iter().map(|v| v.name.clone()).collect()
        };
        assert_eq!(upper.count, 2);
        assert_eq!(names(&upper), names(&lower));

        assert_eq!(directory.search_venues("tx").unwrap().count, 2);
        assert_eq!(directory.search_venues("Music").unwrap().count, 2);
        assert_eq!(directory.search_venues("").unwrap().count, 3);
        assert_eq!(directory.search_venues("%").unwrap().count, 0);
    }

    #[test]
    fn search_folds_case_beyond_ascii() {
        let (_dir, directory) = directory();
        directory
            .create_venue(&venue_form("CAFÉ OTO", "Brooklyn", "NY"))
            .unwrap();
        directory
            .create_venue(&venue_form("Café Oto", "Brooklyn", "NY"))
            .unwrap();
        directory
            .create_venue(&venue_form("Cafe Wha?", "New York", "NY"))
            .unwrap();
        directory.store.insert_artist(&new_artist("BJÖRK")).unwrap();

        let upper = directory.search_venues("CAFÉ").unwrap();
        let lower = directory.search_venues("café").unwrap();
        assert_eq!(upper.count, 2);
        assert_eq!(lower.count, 2);
        let ids = |results: &SearchResults<Venue>| -> Vec<i32> {
            results.data.iter().map(|v| v.id).collect()
        };
        assert_eq!(ids(&upper), ids(&lower));

        assert_eq!(directory.search_artists("björk").unwrap().count, 1);
        assert_eq!(directory.search_artists("BJÖRK").unwrap().count, 1);
    }

    #[test]
    fn artist_search_matches_names_only() {
        let (_dir, directory) = directory();
        let venue = directory
            .create_venue(&venue_form("The Musical Hop", "San Francisco", "CA"))
            .unwrap();
        let band = directory.store.insert_artist(&new_artist("The Wild Sax Band")).unwrap();
        directory.store.insert_artist(&new_artist("Guns N Petals")).unwrap();
        directory.store.insert_artist(&new_artist("Matt Quevedo")).unwrap();
        book(&directory, band.id, venue.id, now() + Duration::days(1));
        book(&directory, band.id, venue.id, now() - Duration::days(1));

        let results = directory.search_artists("BAND").unwrap();
        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].name, "The Wild Sax Band");
        assert_eq!(results.data[0].num_upcoming_shows, 1);
        assert_eq!(directory.search_artists("a").unwrap().count, 3);
        assert_eq!(directory.search_artists("Austin").unwrap().count, 0);
    }

    #[test]
    fn venue_detail_splits_past_and_upcoming() {
        let (_dir, directory) = directory();
        let venue = directory
            .create_venue(&venue_form("The Musical Hop", "San Francisco", "CA"))
            .unwrap();
        let artist = directory.store.insert_artist(&new_artist("Guns N Petals")).unwrap();
        let yesterday = now() - Duration::days(1);
        book(&directory, artist.id, venue.id, yesterday);

        let detail = directory.venue_detail(venue.id).unwrap();
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 0);
        assert_eq!(detail.past_shows[0].artist_name, "Guns N Petals");
        assert_eq!(
            detail.past_shows[0].start_time,
            yesterday.format("%m/%d/%Y, %H:%M").to_string()
        );

        let artist_detail = directory.artist_detail(artist.id).unwrap();
        assert_eq!(artist_detail.past_shows_count, 1);
        assert_eq!(artist_detail.past_shows[0].venue_name, "The Musical Hop");

        assert!(matches!(
            directory.venue_detail(venue.id + 100),
            Err(Error::NotFound { kind: EntityKind::Venue, .. })
        ));
        assert!(matches!(
            directory.artist_detail(artist.id + 100),
            Err(Error::NotFound { kind: EntityKind::Artist, .. })
        ));
    }

    #[test]
    fn created_venue_round_trips() {
        let (_dir, directory) = directory();
        let form = VenueForm {
            address: "1805 Geary Blvd".to_owned(),
            phone: "415-346-3000".to_owned(),
            website_link: "https://fillmore.example".to_owned(),
            seeking_talent: true,
            seeking_description: "Openers wanted".to_owned(),
            ..venue_form("The Fillmore", "San Francisco", "CA")
        };
        let created = directory.create_venue(&form).unwrap();
        let loaded = directory.venue(created.id).unwrap();
        assert_eq!(loaded.genres, "Jazz, Rock");
        assert_eq!(VenueForm::from(&loaded), form);
    }

    #[test]
    fn update_overwrites_every_field() {
        let (_dir, directory) = directory();
        let created = directory
            .create_venue(&VenueForm {
                phone: "415-346-3000".to_owned(),
                seeking_talent: true,
                seeking_description: "Openers wanted".to_owned(),
                ..venue_form("The Fillmore", "San Francisco", "CA")
            })
            .unwrap();

        let replacement = VenueForm {
            genres: vec!["Folk".to_owned()],
            ..venue_form("Fillmore West", "Oakland", "CA")
        };
        let updated = directory.update_venue(created.id, &replacement).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(VenueForm::from(&updated), replacement);
        assert_eq!(updated.phone, "");
        assert_eq!(updated.seeking_description, None);
    }

    #[test]
    fn invalid_update_writes_nothing() {
        let (_dir, directory) = directory();
        let created = directory
            .create_venue(&venue_form("The Fillmore", "San Francisco", "CA"))
            .unwrap();
        let result = directory.update_venue(created.id, &venue_form("", "Oakland", "CA"));
        match result {
            Err(Error::Validation(errors)) => assert_eq!(errors.get("name"), Some("is required")),
            other => panic!("expected a validation error, got {:?}", other),
        }
        assert_eq!(directory.venue(created.id).unwrap().city, "San Francisco");

        assert!(matches!(
            directory.update_venue(created.id + 1, &venue_form("x", "y", "CA")),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn artist_update_and_delete() {
        let (_dir, directory) = directory();
        let artist = directory
            .create_artist(&ArtistForm {
                name: "Matt Quevedo".to_owned(),
                city: "New York".to_owned(),
                state: "NY".to_owned(),
                genres: vec!["Jazz".to_owned()],
                ..ArtistForm::default()
            })
            .unwrap();
        let mut form = ArtistForm::from(&artist);
        form.seeking_venue = true;
        form.seeking_description = "Weekend gigs".to_owned();
        let updated = directory.update_artist(artist.id, &form).unwrap();
        assert!(updated.seeking_venue);
        assert_eq!(
            directory.artists().unwrap(),
            vec![Listing {
                id: artist.id,
                name: "Matt Quevedo".to_owned(),
            }]
        );

        assert_eq!(directory.delete_artist(artist.id).unwrap(), "Matt Quevedo");
        assert!(directory.artists().unwrap().is_empty());
    }

    #[test]
    fn deleting_a_missing_venue_is_reported() {
        let (_dir, directory) = directory();
        let err = directory.delete_venue(404).unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: EntityKind::Venue, id: 404 }));
    }

    #[test]
    fn deleting_a_booked_venue_is_refused() {
        let (_dir, directory) = directory();
        let venue = directory
            .create_venue(&venue_form("The Musical Hop", "San Francisco", "CA"))
            .unwrap();
        let artist = directory.store.insert_artist(&new_artist("Guns N Petals")).unwrap();
        book(&directory, artist.id, venue.id, now());

        let err = directory.delete_venue(venue.id).unwrap_err();
        assert!(matches!(err, Error::InUse { shows: 1, .. }));
        assert!(directory.venue(venue.id).is_ok());
    }

    #[test]
    fn shows_need_listed_artist_and_venue() {
        let (_dir, directory) = directory();
        let venue = directory
            .store
            .insert_venue(&new_venue("The Musical Hop", "San Francisco", "CA"))
            .unwrap();
        let form = ShowForm {
            artist_id: "77".to_owned(),
            venue_id: venue.id.to_string(),
            start_time: "2035-04-01 20:00".to_owned(),
        };
        match directory.create_show(&form) {
            Err(Error::Validation(errors)) => {
                assert!(errors.get("artist_id").is_some());
                assert!(errors.get("venue_id").is_none());
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
        assert!(directory.shows().unwrap().is_empty());
    }

    #[test]
    fn show_listing_resolves_names() {
        let (_dir, directory) = directory();
        let venue = directory
            .store
            .insert_venue(&new_venue("The Musical Hop", "San Francisco", "CA"))
            .unwrap();
        let artist = directory.store.insert_artist(&new_artist("Guns N Petals")).unwrap();
        directory
            .create_show(&ShowForm {
                artist_id: artist.id.to_string(),
                venue_id: venue.id.to_string(),
                start_time: "2019-05-21T21:30".to_owned(),
            })
            .unwrap();

        let shows = directory.shows().unwrap();
        assert_eq!(
            shows,
            vec![ShowListing {
                venue_id: venue.id,
                venue_name: "The Musical Hop".to_owned(),
                artist_id: artist.id,
                artist_name: "Guns N Petals".to_owned(),
                artist_image_link: "https://images.example/band.png".to_owned(),
                start_time: "2019-05-21 21:30:00".to_owned(),
            }]
        );
    }
}
