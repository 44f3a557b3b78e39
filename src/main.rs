#[tokio::main]
async fn main() -> anyhow::Result<()> {
    htmlbox::telemetry::init();
    let cfg = htmlbox::config::Config::load()?;

    let (app, port) = htmlbox::build_app(cfg).await;

    use tracing::info;
    let addr = std::net::SocketAddr::from(([0,0,0,0], port));
    info!(%addr, "server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutting down, stored entries are dropped");
        })
        .await?;
    Ok(())
}
