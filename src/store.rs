use crate::models::{Artist, NewArtist, NewShow, NewVenue, Show, Venue};
use crate::schema::{artists, shows, venues};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sql_types::Text;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::path::Path;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

diesel::define_sql_function!(fn lower(x: Text) -> Text);

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database connection error")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("Database error")]
    Database(#[from] diesel::result::Error),
    #[error("Migration error: {0}")]
    Migration(String),
}

/// Result of a delete by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deletion {
    Deleted,
    Missing,
    /// Refused because this many shows still reference the row.
    InUse(i64),
}

/// Durable storage for venues, artists and shows.
///
/// Reads return raw rows. Writes run in a transaction of their own and leave
/// nothing behind when they fail.
pub trait Store {
    fn venues(&self) -> Result<Vec<Venue>, StoreError>;
    fn venue(&self, id: i32) -> Result<Option<Venue>, StoreError>;
    fn search_venues(&self, term: &str) -> Result<Vec<Venue>, StoreError>;
    fn insert_venue(&self, venue: &NewVenue) -> Result<Venue, StoreError>;
    fn update_venue(&self, id: i32, venue: &NewVenue) -> Result<Option<Venue>, StoreError>;
    fn delete_venue(&self, id: i32) -> Result<Deletion, StoreError>;

    fn artists(&self) -> Result<Vec<Artist>, StoreError>;
    fn artist(&self, id: i32) -> Result<Option<Artist>, StoreError>;
    fn search_artists(&self, term: &str) -> Result<Vec<Artist>, StoreError>;
    fn insert_artist(&self, artist: &NewArtist) -> Result<Artist, StoreError>;
    fn update_artist(&self, id: i32, artist: &NewArtist) -> Result<Option<Artist>, StoreError>;
    fn delete_artist(&self, id: i32) -> Result<Deletion, StoreError>;

    fn shows(&self) -> Result<Vec<Show>, StoreError>;
    fn shows_at_venue(&self, venue_id: i32) -> Result<Vec<(Show, Artist)>, StoreError>;
    fn shows_by_artist(&self, artist_id: i32) -> Result<Vec<(Show, Venue)>, StoreError>;
    /// Shows of each given artist, in the same order as `artists`.
    fn shows_by_artists(&self, artists: &[Artist]) -> Result<Vec<Vec<Show>>, StoreError>;
    fn insert_show(&self, show: &NewShow) -> Result<Show, StoreError>;
}

/// Sets up every pooled connection: foreign keys enforced, a busy timeout, and
/// a `lower()` that folds case across all of Unicode rather than ASCII only.
#[derive(Debug)]
struct PrepareConnection;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for PrepareConnection {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)?;
        lower_utils::register_impl(conn, |text: String| text.to_lowercase())
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

#[derive(Clone)]
pub struct SqliteStore {
    pool: Pool<ConnectionManager<SqliteConnection>>,
}

// The pool is only ever used through `get()`, which leaves it consistent even
// if a handler panics while holding a connection.
impl std::panic::RefUnwindSafe for SqliteStore {}

impl SqliteStore {
    /// Opens (creating if needed) the database at `path` and brings its schema
    /// up to date.
    pub fn open(path: &Path) -> Result<SqliteStore, StoreError> {
        let manager = ConnectionManager::<SqliteConnection>::new(path.display().to_string());
        let pool = Pool::builder()
            .connection_customizer(Box::new(PrepareConnection))
            .build(manager)?;
        let store = SqliteStore { pool };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        let mut conn = self.conn()?;
        let conn: &mut SqliteConnection = &mut conn;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| StoreError::Migration(err.to_string()))?;
        for migration in applied {
            tracing::info!(%migration, "applied migration");
        }
        Ok(())
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, StoreError> {
        Ok(self.pool.get()?)
    }

    /// Runs `f` on a pooled connection. The connection goes back to the pool
    /// when this returns, whatever the outcome.
    fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError>,
    {
        let mut conn = self.conn()?;
        f(&mut *conn)
    }

    /// Runs `f` in a transaction: committed on `Ok`, rolled back on `Err`.
    fn in_transaction<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, StoreError>,
    {
        self.with_conn(|conn| conn.transaction(f))
    }
}

/// `%term%` for a LIKE match, with the term's own wildcards escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl Store for SqliteStore {
    fn venues(&self) -> Result<Vec<Venue>, StoreError> {
        self.with_conn(|conn| {
            Ok(venues::table
                .select(Venue::as_select())
                .order(venues::id)
                .load(conn)?)
        })
    }

    fn venue(&self, id: i32) -> Result<Option<Venue>, StoreError> {
        self.with_conn(|conn| {
            Ok(venues::table
                .find(id)
                .select(Venue::as_select())
                .first(conn)
                .optional()?)
        })
    }

    fn search_venues(&self, term: &str) -> Result<Vec<Venue>, StoreError> {
        let pattern = contains_pattern(term);
        self.with_conn(|conn| {
            Ok(venues::table
                .filter(
                    lower(venues::name)
                        .like(pattern.as_str())
                        .escape('\\')
                        .or(lower(venues::city).like(pattern.as_str()).escape('\\'))
                        .or(lower(venues::state).like(pattern.as_str()).escape('\\')),
                )
                .select(Venue::as_select())
                .order(venues::id)
                .load(conn)?)
        })
    }

    fn insert_venue(&self, venue: &NewVenue) -> Result<Venue, StoreError> {
        self.in_transaction(|conn| {
            Ok(diesel::insert_into(venues::table)
                .values(venue)
                .returning(Venue::as_returning())
                .get_result(conn)?)
        })
    }

    fn update_venue(&self, id: i32, venue: &NewVenue) -> Result<Option<Venue>, StoreError> {
        self.in_transaction(|conn| {
            Ok(diesel::update(venues::table.find(id))
                .set(venue)
                .returning(Venue::as_returning())
                .get_result(conn)
                .optional()?)
        })
    }

    fn delete_venue(&self, id: i32) -> Result<Deletion, StoreError> {
        self.in_transaction(|conn| {
            let booked: i64 = shows::table
                .filter(shows::venue_id.eq(id))
                .count()
                .get_result(conn)?;
            if booked > 0 {
                return Ok(Deletion::InUse(booked));
            }
            let deleted = diesel::delete(venues::table.find(id)).execute(conn)?;
            Ok(if deleted == 0 {
                Deletion::Missing
            } else {
                Deletion::Deleted
            })
        })
    }

    fn artists(&self) -> Result<Vec<Artist>, StoreError> {
        self.with_conn(|conn| {
            Ok(artists::table
                .select(Artist::as_select())
                .order(artists::id)
                .load(conn)?)
        })
    }

    fn artist(&self, id: i32) -> Result<Option<Artist>, StoreError> {
        self.with_conn(|conn| {
            Ok(artists::table
                .find(id)
                .select(Artist::as_select())
                .first(conn)
                .optional()?)
        })
    }

    fn search_artists(&self, term: &str) -> Result<Vec<Artist>, StoreError> {
        let pattern = contains_pattern(term);
        self.with_conn(|conn| {
            Ok(artists::table
                .filter(lower(artists::name).like(pattern.as_str()).escape('\\'))
                .select(Artist::as_select())
                .order(artists::id)
                .load(conn)?)
        })
    }

    fn insert_artist(&self, artist: &NewArtist) -> Result<Artist, StoreError> {
        self.in_transaction(|conn| {
            Ok(diesel::insert_into(artists::table)
                .values(artist)
                .returning(Artist::as_returning())
                .get_result(conn)?)
        })
    }

    fn update_artist(&self, id: i32, artist: &NewArtist) -> Result<Option<Artist>, StoreError> {
        self.in_transaction(|conn| {
            Ok(diesel::update(artists::table.find(id))
                .set(artist)
                .returning(Artist::as_returning())
                .get_result(conn)
                .optional()?)
        })
    }

    fn delete_artist(&self, id: i32) -> Result<Deletion, StoreError> {
        self.in_transaction(|conn| {
            let booked: i64 = shows::table
                .filter(shows::artist_id.eq(id))
                .count()
                .get_result(conn)?;
            if booked > 0 {
                return Ok(Deletion::InUse(booked));
            }
            let deleted = diesel::delete(artists::table.find(id)).execute(conn)?;
            Ok(if deleted == 0 {
                Deletion::Missing
            } else {
                Deletion::Deleted
            })
        })
    }

    fn shows(&self) -> Result<Vec<Show>, StoreError> {
        self.with_conn(|conn| {
            Ok(shows::table
                .select(Show::as_select())
                .order(shows::id)
                .load(conn)?)
        })
    }

    fn shows_at_venue(&self, venue_id: i32) -> Result<Vec<(Show, Artist)>, StoreError> {
        self.with_conn(|conn| {
            Ok(shows::table
                .inner_join(artists::table)
                .filter(shows::venue_id.eq(venue_id))
                .select((Show::as_select(), Artist::as_select()))
                .order((shows::start_time, shows::id))
                .load(conn)?)
        })
    }

    fn shows_by_artist(&self, artist_id: i32) -> Result<Vec<(Show, Venue)>, StoreError> {
        self.with_conn(|conn| {
            Ok(shows::table
                .inner_join(venues::table)
                .filter(shows::artist_id.eq(artist_id))
                .select((Show::as_select(), Venue::as_select()))
                .order((shows::start_time, shows::id))
                .load(conn)?)
        })
    }

    fn shows_by_artists(&self, artists: &[Artist]) -> Result<Vec<Vec<Show>>, StoreError> {
        self.with_conn(|conn| {
            let shows = Show::belonging_to(artists)
                .select(Show::as_select())
                .load::<Show>(conn)?;
            Ok(shows.grouped_by(artists))
        })
    }

    fn insert_show(&self, show: &NewShow) -> Result<Show, StoreError> {
        self.in_transaction(|conn| {
            Ok(diesel::insert_into(shows::table)
                .values(show)
                .returning(Show::as_returning())
                .get_result(conn)?)
        })
    }
}
