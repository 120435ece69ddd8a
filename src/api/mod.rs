use actix_web::web;
mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::list_balances)
            .service(handlers::init_balances)
            .service(handlers::load_info)
            .service(handlers::get_balance)
            .service(handlers::get_app_balance)
            .service(handlers::get_wallet_balance)
            .service(handlers::fetch_app_balance)
            .service(handlers::fetch_wallet_balance)
            .service(handlers::deposit)
            .service(handlers::withdraw),
    );
}
