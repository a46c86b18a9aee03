//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    extract::FromRef,
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BillingService, ConsumerService, DashboardService, PaymentService};
use crate::config::CorsConfig;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ErrorBody;
use crate::interfaces::http::middleware::require_database;
use crate::interfaces::http::modules::{
    bills, consumers, dashboard, health, metrics, payments, request_id, tariffs,
};

/// Unified state for every API route.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub db: DatabaseConnection,
    pub consumers: Arc<ConsumerService>,
    pub billing: Arc<BillingService>,
    pub payments: Arc<PaymentService>,
    pub dashboard: Arc<DashboardService>,
}

impl ApiState {
    pub fn new(repos: Arc<dyn RepositoryProvider>, db: DatabaseConnection) -> Self {
        Self {
            db,
            consumers: Arc::new(ConsumerService::new(repos.clone())),
            billing: Arc::new(BillingService::new(repos.clone())),
            payments: Arc::new(PaymentService::new(repos.clone())),
            dashboard: Arc::new(DashboardService::new(repos)),
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<ApiState> for health::HealthState {
    fn from_ref(s: &ApiState) -> Self {
        health::HealthState { db: s.db.clone() }
    }
}

impl FromRef<ApiState> for consumers::ConsumerState {
    fn from_ref(s: &ApiState) -> Self {
        consumers::ConsumerState {
            service: Arc::clone(&s.consumers),
        }
    }
}

impl FromRef<ApiState> for bills::BillState {
    fn from_ref(s: &ApiState) -> Self {
        bills::BillState {
            service: Arc::clone(&s.billing),
        }
    }
}

impl FromRef<ApiState> for payments::PaymentState {
    fn from_ref(s: &ApiState) -> Self {
        payments::PaymentState {
            service: Arc::clone(&s.payments),
        }
    }
}

impl FromRef<ApiState> for dashboard::DashboardState {
    fn from_ref(s: &ApiState) -> Self {
        dashboard::DashboardState {
            service: Arc::clone(&s.dashboard),
        }
    }
}

impl FromRef<ApiState> for DatabaseConnection {
    fn from_ref(s: &ApiState) -> Self {
        s.db.clone()
    }
}

impl FromRef<ApiState> for tariffs::TariffState {
    fn from_ref(s: &ApiState) -> Self {
        tariffs::TariffState {
            service: Arc::clone(&s.billing),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::root_banner,
        health::health_check,
        // Consumers
        consumers::list_consumers,
        consumers::get_consumer,
        consumers::create_consumer,
        // Bills
        bills::list_bills,
        bills::get_bill,
        bills::generate_bill,
        // Payments
        payments::list_payments,
        payments::record_payment,
        // Dashboard
        dashboard::dashboard_stats,
        // Tariffs
        tariffs::preview_tariff,
    ),
    components(
        schemas(
            ErrorBody,
            health::HealthResponse,
            health::BannerResponse,
            consumers::ConsumerDto,
            consumers::CreateConsumerRequest,
            consumers::CreateConsumerResponse,
            bills::BillDto,
            bills::GenerateBillRequest,
            bills::GenerateBillResponse,
            payments::PaymentDto,
            payments::RecordPaymentRequest,
            payments::RecordPaymentResponse,
            dashboard::DashboardStatsDto,
            tariffs::TariffPreviewRequest,
            tariffs::TariffPreviewResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service banner and health check"),
        (name = "Consumers", description = "Consumer registration and lookup"),
        (name = "Bills", description = "Bill generation from meter readings"),
        (name = "Payments", description = "Payments against bills"),
        (name = "Dashboard", description = "Aggregate billing statistics"),
        (name = "Tariffs", description = "Tiered tariff pricing preview"),
    ),
    info(
        title = "Electricity Billing System API",
        version = "1.0.0",
        description = "REST API for consumers, meter-reading bills and payments",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    cors: &CorsConfig,
    prometheus: PrometheusHandle,
) -> Router {
    let state = ApiState::new(repos, db.clone());

    // Reads ping the datastore before the handler; writes check their
    // body first (`GuardedJson`) and ping afterwards.
    let guard = middleware::from_fn_with_state(db, require_database);
    let entity_routes: Router<ApiState> = Router::new()
        .route(
            "/api/consumers",
            get(consumers::list_consumers)
                .route_layer(guard.clone())
                .post(consumers::create_consumer),
        )
        .route(
            "/api/consumers/{id}",
            get(consumers::get_consumer).route_layer(guard.clone()),
        )
        .route(
            "/api/bills",
            get(bills::list_bills)
                .route_layer(guard.clone())
                .post(bills::generate_bill),
        )
        .route("/api/bills/{id}", get(bills::get_bill).route_layer(guard.clone()))
        .route(
            "/api/payments",
            get(payments::list_payments)
                .route_layer(guard.clone())
                .post(payments::record_payment),
        )
        .route(
            "/api/dashboard/stats",
            get(dashboard::dashboard_stats).route_layer(guard),
        );

    let open_routes: Router<ApiState> = Router::new()
        .route("/", get(health::root_banner))
        .route("/api/health", get(health::health_check))
        .route("/api/tariffs/preview", post(tariffs::preview_tariff));

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics::MetricsState { handle: prometheus });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(entity_routes)
        .merge(open_routes)
        .with_state(state)
        .merge(metrics_routes)
        .merge(swagger_routes)
        // Middleware
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}
