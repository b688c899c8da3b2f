use autoslug_core::{
    application::{
        commands::records::CreateRecordCommand,
        ports::{time::Clock, util::SlugGenerator},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::record::{RecordReadRepository, RecordWriteRepository},
    infrastructure::{
        database,
        repositories::{SqliteRecordReadRepository, SqliteRecordWriteRepository},
        time::SystemClock,
        util::DefaultSlugGenerator,
    },
};
use anyhow::{Context, Result, bail};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: autoslug_core <scope> <text>...";

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut args = std::env::args().skip(1);
    let Some(scope) = args.next() else {
        bail!(USAGE);
    };
    let texts: Vec<String> = args.collect();
    if texts.is_empty() {
        bail!(USAGE);
    }

    let config = AppConfig::from_env()?;
    let options = config.slug_field_options()?;
    let source_field = options
        .populate_from()
        .first()
        .cloned()
        .context("SLUG_POPULATE_FROM names no field")?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .with_context(|| format!("connecting to {}", config.database_url()))?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let write_repo: Arc<dyn RecordWriteRepository> =
        Arc::new(SqliteRecordWriteRepository::new(Arc::clone(&pool)));
    let read_repo: Arc<dyn RecordReadRepository> =
        Arc::new(SqliteRecordReadRepository::new(Arc::clone(&pool)));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(
        write_repo,
        read_repo,
        clock,
        slugger,
        options,
        config.slug_max_save_attempts(),
    );
    let commands = services.record_commands();

    for text in texts {
        let command = CreateRecordCommand::builder()
            .scope(scope.clone())
            .field(source_field.clone(), text)
            .build()
            .map_err(anyhow::Error::msg)?;
        let record = commands.create_record(command).await?;
        println!("{}", serde_json::to_string(&record)?);
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
