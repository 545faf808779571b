use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sailing_venues_core::{DEFAULT_QUERY_LIMIT, ENV_DATABASE_URL, ENV_DB_PATH};
use sailing_venues_service::VenueFormat;
use sailing_venues_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "sailing-venues", version)]
#[command(about = "Idempotent loader for OpenStreetMap sailing venues", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = ENV_DB_PATH)]
    db: Option<PathBuf>,

    /// PostgreSQL URL; used instead of SQLite when set
    #[arg(long, global = true, env = ENV_DATABASE_URL, hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upsert venues from JSON Lines or SQL fixture files
    Load {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Input format; inferred from each file's extension when omitted
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Venues per transaction [env: SAILING_VENUES_BATCH_SIZE]
        #[arg(long)]
        batch_size: Option<usize>,
    },
    /// Convert a venue file into an upsert fixture script
    Render {
        file: PathBuf,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Dump every stored venue, ordered by id
    Export {
        #[arg(long, value_enum, default_value = "sql")]
        format: FormatArg,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    Get {
        id: String,
    },
    List {
        #[arg(long, default_value = "0")]
        offset: usize,
        #[arg(short, long, default_value_t = DEFAULT_QUERY_LIMIT)]
        limit: usize,
    },
    Stats,
    /// Copy the SQLite store into DATABASE_URL
    Migrate {
        #[arg(long)]
        batch_size: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Jsonl,
    Sql,
}

impl From<FormatArg> for VenueFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Jsonl => Self::Jsonl,
            FormatArg::Sql => Self::Sql,
        }
    }
}

pub(crate) fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sailing-venues")
        .join("venues.db")
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(feature = "sqlite")]
pub(crate) fn open_sqlite(db: Option<&Path>) -> Result<StorageBackend> {
    let db_path = db.map_or_else(default_db_path, Path::to_path_buf);
    ensure_db_dir(&db_path)?;
    StorageBackend::new_sqlite(&db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))
}

#[cfg(not(feature = "sqlite"))]
pub(crate) fn open_sqlite(_db: Option<&Path>) -> Result<StorageBackend> {
    anyhow::bail!("no DATABASE_URL given and this build lacks the `sqlite` feature")
}

async fn open_backend(db: Option<&Path>, database_url: Option<&str>) -> Result<Arc<StorageBackend>> {
    #[cfg(feature = "postgres")]
    {
        if let Some(url) = database_url {
            let backend = StorageBackend::new_postgres(url)
                .await
                .context("failed to connect to PostgreSQL")?;
            return Ok(Arc::new(backend));
        }
    }
    #[cfg(not(feature = "postgres"))]
    {
        if database_url.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the `postgres` feature");
        }
    }
    Ok(Arc::new(open_sqlite(db)?))
}

/// Write to `output`, or stdout when no path is given.
pub(crate) fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{content}");
            Ok(())
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db = cli.db.as_deref();
    let database_url = cli.database_url.as_deref();

    match cli.command {
        Commands::Load { files, format, batch_size } => {
            let storage = open_backend(db, database_url).await?;
            commands::load::run_load(storage, &files, format.map(Into::into), batch_size).await?;
        },
        Commands::Render { file, format, output } => {
            commands::render::run_render(&file, format.map(Into::into), output.as_deref())
                .await?;
        },
        Commands::Export { format, output } => {
            let storage = open_backend(db, database_url).await?;
            commands::export::run_export(storage, format.into(), output.as_deref()).await?;
        },
        Commands::Get { id } => {
            let storage = open_backend(db, database_url).await?;
            commands::query::run_get(storage, &id).await?;
        },
        Commands::List { offset, limit } => {
            let storage = open_backend(db, database_url).await?;
            commands::query::run_list(storage, offset, limit).await?;
        },
        Commands::Stats => {
            let storage = open_backend(db, database_url).await?;
            commands::query::run_stats(storage).await?;
        },
        Commands::Migrate { batch_size } => {
            #[cfg(all(feature = "sqlite", feature = "postgres"))]
            {
                commands::migrate::run(db, database_url, batch_size).await?;
            }
            #[cfg(not(all(feature = "sqlite", feature = "postgres")))]
            {
                let _ = batch_size;
                anyhow::bail!("migrate requires both the `sqlite` and `postgres` features");
            }
        },
    }

    Ok(())
}
