mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client()?;
        let oauth_client = startup::setup_oauth_client(&config)?;
        let cors = startup::setup_cors(&config)?;

        tracing::info!("Starting server for {}", config.app_url);

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(db, http_client, oauth_client, config))
            .layer(session)
            .layer(cors);
        router = router.merge(server_routes);

        Ok(router)
    })
}
