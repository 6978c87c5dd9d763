#[tokio::main]
async fn main() {
    onboard_observability::init();

    let app = onboard_api::app::build_app();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:1212")
        .await
        .expect("failed to bind 0.0.0.0:1212");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
