use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use std::path::PathBuf;

mod config;

use config::SiteConfig;

async fn spa(index: web::Data<PathBuf>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(index.get_ref())?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // a missing .env is fine
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env()?;
    config.check_dist()?;
    log::info!(
        "serving {} on http://{}:{}",
        config.dist_dir.display(),
        config.host,
        config.port
    );

    let index = web::Data::new(config.index_file());
    let (dist, assets) = (config.dist_dir.clone(), config.assets_dir.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(index.clone())
            .service(Files::new("/assets", &assets))
            // anchors only, but keep deep links landing on the page
            .service(Files::new("/", &dist).index_file("index.html"))
            .default_service(web::get().to(spa))
    })
    .bind((config.host, config.port))
    .with_context(|| format!("bind {}:{}", config.host, config.port))?
    .run()
    .await
    .context("server exited")
}
