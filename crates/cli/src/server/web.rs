use axum::Router;
use std::net::SocketAddr;
use tracing::info;

pub async fn start_web_server(bind_address: &str, port: u16, app: Router) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = format!("{bind_address}:{port}").parse()?;

    info!(bind_address = %socket_addr, "Starting status server");

    let listener = tokio::net::TcpListener::bind(socket_addr).await?;

    info!("Status server ready to accept requests");

    axum::serve(listener, app).await?;

    Ok(())
}
