use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::util::SubscriberInitExt;
use waitlist::{app::App, config::get_configuration, telemetry::get_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let db = PgPoolOptions::new()
        .max_connections(50)
        .connect_lazy_with(config.database.with_db());

    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .context("Could not run database migrations")?;

    let app = App::with(&config)
        .await
        .context("Could not bind the application address")?;

    tracing::info!(addr = %app.local_addr()?, "starting server");
    app.serve(db).await.context("The server stopped unexpectedly")?;

    Ok(())
}
