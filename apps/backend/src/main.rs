use actix_web::{web, App, HttpServer};
use ludo_backend::config::AppConfig;
use ludo_backend::infra::state::build_state;
use ludo_backend::middleware::cors::cors_middleware;
use ludo_backend::middleware::request_trace::RequestTrace;
use ludo_backend::middleware::structured_logger::StructuredLogger;
use ludo_backend::routes;
use tracing::info;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // LUDO_HOST, LUDO_PORT and LUDO_DICE_SEED come from the runtime environment.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let host = config.host.clone();
    let port = config.port;
    let seeded = config.dice_seed.is_some();

    let app_state = build_state().with_config(config).build();
    info!(%host, port, seeded_dice = seeded, "starting ludo backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
