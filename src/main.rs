use std::sync::Arc;

use axum::http::Method;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use commodity_api_server::domains::auth::models::*;
use commodity_api_server::domains::trading::models::*;
use commodity_api_server::routes::create_router;
use commodity_api_server::shared::clients::PayPalClient;
use commodity_api_server::shared::config::AppConfig;
use commodity_api_server::shared::services::AppState;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        commodity_api_server::domains::auth::handlers::auth_handler::signup,
        commodity_api_server::domains::auth::handlers::auth_handler::login,
        commodity_api_server::domains::trading::handlers::market_handler::list_commodities,
        commodity_api_server::domains::trading::handlers::order_handler::buy,
        commodity_api_server::domains::trading::handlers::order_handler::sell,
        commodity_api_server::domains::trading::handlers::withdraw_handler::withdraw,
        commodity_api_server::domains::trading::handlers::trade_handler::admin_list_trades
    ),
    components(schemas(
        SignupRequest,
        SignupResponse,
        LoginRequest,
        LoginResponse,
        BuyRequest,
        SellRequest,
        OrderResponse,
        WithdrawRequest,
        WithdrawResponse,
        Commodity,
        Trade,
        TradeSide
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Signup and login endpoints"),
        (name = "Market", description = "Commodity price listing"),
        (name = "Trading", description = "Buy, sell and withdraw endpoints"),
        (name = "Admin", description = "Privileged trade-ledger access")
    ),
    info(
        title = "Commodity API Server",
        description = "API server for commodity trading and payouts",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() {
    // 로깅 초기화
    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 설정 로드
    // Load configuration
    let config = AppConfig::from_env();
    let bind_addr = config.bind_addr.clone();

    // 결제 제공자 클라이언트 생성
    // Payout provider client
    let payout = Arc::new(PayPalClient::new(&config.payout).expect("Failed to create payout client"));

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(config, payout);

    // CORS 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ]);

    // Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind listen address");

    info!("Server running on http://{bind_addr}");
    info!("Swagger UI available at http://{bind_addr}/docs");

    // 서버 실행
    axum::serve(listener, app).await.expect("Server error");
}
