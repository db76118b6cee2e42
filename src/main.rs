use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use ml_backend::{
    AppState,
    config::Config,
    groq::GroqClient,
    middleware::RateLimiter,
    model::InferenceModel,
    routes,
};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    // 启动时加载模型，首个请求不承担加载开销
    let model = Arc::new(InferenceModel::load(&config));
    let groq = Arc::new(GroqClient::new(&config));

    let state = AppState {
        config: config.clone(),
        model,
        groq,
    };

    // 全站限流器
    let limiter = Arc::new(RateLimiter::new(&config));

    let router = routes::create_router(state, limiter);

    // 前端联调需要跨域
    let app = router.layer(CorsLayer::permissive());

    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Failed to start server");
}
