use std::sync::Arc;

use clap::Parser;

use formpost::smtp::SmtpMailer;

mod config;
mod controllers;
mod errors;
mod routes;

#[derive(Debug, Parser)]
#[command(name = "formpost-server", about = "Form-to-email relay server.")]
struct Opt {
    /// Path to a config file; defaults to the system path plus
    /// FORMPOST_* environment variables
    #[arg(short, long)]
    config: Option<String>,

    /// Override the configured HTTP port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    env_logger::builder().format_timestamp_micros().init();

    let opt = Opt::parse();

    let app_config = formpost::config::load(opt.config.as_deref()).expect("Failed to load config");
    let port = opt.port.unwrap_or(app_config.http_port);

    let mailer = SmtpMailer::from_config(&app_config).expect("Failed to build SMTP transport");

    log::info!("Starting HTTP server at 0.0.0.0:{}...", port);

    let router = routes::router(Arc::new(app_config), Arc::new(mailer));

    warp::serve(router).run(([0, 0, 0, 0], port)).await;
}
