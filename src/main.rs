use clap::Parser;
use gig_directory::web::{self, AppState};
use gig_directory::{Directory, Error, Settings, SqliteStore};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Serves the venue and artist directory")]
struct Cli {
    /// Settings file, with or without its extension.
    #[arg(long, default_value = "settings")]
    config: String,
    #[arg(long)]
    port: Option<u16>,
    #[arg(long)]
    db_path: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.config, cli.port, cli.db_path.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| Error::Startup(err.to_string()))?;

    let store = SqliteStore::open(&settings.db_path)?;
    let app = AppState::new(Directory::new(store), &settings.site_name);

    let addr = settings.bind_address();
    info!(%addr, db = %settings.db_path.display(), "listening");
    gotham::start(addr, web::router(app)).map_err(|err| Error::Startup(err.to_string()))
}
