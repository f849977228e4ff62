//! Bug tracker server binary.
//!
//! Creates the concrete database implementation and passes it to the web
//! layer, which stays agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use bugtrack::db::{Database, DbError, SqliteDatabase};
use bugtrack::web::{self, Config, WebError};
use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(bugtrack::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(bugtrack::binary::io))]
    Io(#[from] std::io::Error),

    #[error("Web server error: {0}")]
    #[diagnostic(code(bugtrack::binary::web))]
    Web(#[from] WebError),
}

#[derive(Parser)]
#[command(name = "bugtrack")]
#[command(author, version, about = "Bug tracker web server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// SQLite database file path
    #[arg(long, default_value = "bugtrack.db")]
    db: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    println!("Opening database at {:?}", cli.db);

    // Ensure parent directory exists
    if let Some(parent) = cli.db.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&cli.db).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    println!("Database migrations complete");

    web::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        db,
    )
    .await?;

    Ok(())
}
