//! A directory of music venues and artists, and the shows booking one at the
//! other, served as server-rendered HTML over gotham.

pub mod directory;
pub mod error;
pub mod forms;
pub mod models;
pub mod schema;
pub mod settings;
pub mod store;
pub mod views;
pub mod web;

pub use crate::directory::Directory;
pub use crate::error::Error;
pub use crate::settings::Settings;
pub use crate::store::{SqliteStore, Store};

include!(concat!(env!("OUT_DIR"), "/templates.rs"));
