use std::sync::{Arc, RwLock};

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use apys_balances::{
    api, config::Config, BalanceSynchronizer, BalanceTable, FixedSession, InfoServerClient,
    NearFungibleTokenClient,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let synchronizer = BalanceSynchronizer::new(
        Arc::new(FixedSession::new(config.account_id.clone())),
        Arc::new(InfoServerClient::new(config.info_server_url.clone())),
        Arc::new(NearFungibleTokenClient::new(config.near_rpc_url.clone())),
    );
    let table = web::Data::new(RwLock::new(BalanceTable::new()));

    match synchronizer.load_info(&table).await {
        Ok(info) => info!(
            "Tracking {} tokens across {} vaults",
            info.tokens.len(),
            info.vaults.len()
        ),
        Err(e) => warn!("Starting with an empty balance table: {}", e),
    }

    let synchronizer = web::Data::new(synchronizer);
    let allowed_origins = config.allowed_origins.clone();

    info!("Listening on 127.0.0.1:{}", config.port);
    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ])
            .supports_credentials();
        App::new()
            .app_data(table.clone())
            .app_data(synchronizer.clone())
            .configure(api::config)
            .wrap(cors)
    })
    .bind(("127.0.0.1", config.port))?
    .run()
    .await
}
