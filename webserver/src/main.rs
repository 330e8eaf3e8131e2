use std::path::PathBuf;
use actix_web::{App, HttpServer, middleware, web};
use bookstore::config::{self, Config};
use clap::Parser;

mod api;
mod configrefs;
mod server;

/// Prefix for environment variables read as configuration.
const ENV_PREFIX: &str = "BOOKSTORE_";

/// HTTP service for storing book records.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
struct Args {
    /// YAML configuration file.  Environment variables starting with
    /// BOOKSTORE_ override values in the file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn cfg_factory(args: &Args) -> Result<Box<dyn Config>, String> {
    let mut layers: Vec<Box<dyn Config>> =
        vec![Box::new(config::env::new(ENV_PREFIX))];
    if let Some(path) = &args.config {
        layers.push(Box::new(config::file::new(path)?));
    }
    Ok(Box::new(config::layered::new(layers)))
}

#[actix_web::main]
async fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();

    let global_cfg = cfg_factory(&args)?;
    let root_path =
        config::get_ref(global_cfg.as_ref(), &configrefs::SERVER_ROOT_PATH)?;
    let addr = server::addr(global_cfg.as_ref())?;
    // workers open their own connections; fail now if that can't work
    server::State::new(global_cfg.as_ref())
        .map_err(|e| format!("error connecting to database: {e}"))?;
    log::info!("connected to database");

    log::info!("listening on {addr}");
    HttpServer::new(move || {
        let args = args.clone();
        App::new()
            .data_factory(move || {
                let args = args.clone();
                async move {
                    let cfg = cfg_factory(&args)?;
                    server::State::new(cfg.as_ref())
                }
            })
            .wrap(middleware::Logger::default())
            .service(api::service(&root_path))
            .default_service(web::to(api::notfound::get))
    })
        .bind_auto_h2c(addr)
        .map_err(|e| format!("error binding port: {e}"))?
        .run()
        .await
        .map_err(|e| format!("error initialising or interrupted: {e}"))
}
