use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database};

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Parser)]
#[command(name = "migration")]
#[command(about = "Star Wars catalogue database migration tool")]
struct Args {
    /// Migration command to run
    #[arg(value_enum, default_value = "up")]
    command: Command,

    /// Database connection string (Postgres or SQLite file)
    #[arg(long, env = "DB_CONNECTION_STRING")]
    database_url: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    if args.database_url.contains(":memory:") {
        eprintln!("❌ SQLite in-memory databases are not supported for CLI operations.");
        eprintln!("   Each CLI run would migrate a fresh database that is discarded on exit.");
        std::process::exit(1);
    }

    let mut opt = ConnectOptions::new(&args.database_url);
    opt.sqlx_logging(false);

    let db = match Database::connect(opt).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, args.command.into()).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
