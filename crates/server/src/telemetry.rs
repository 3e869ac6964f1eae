use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const TRACER_NAME: &str = "storefront-account";

/// Keep the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Tokio runtime for the OTLP gRPC exporters. Tonic's `connect_lazy()`
/// calls `tokio::spawn`, and `dioxus::serve` may run our init closure
/// before a runtime context is entered.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// gRPC metadata carrying the collector ingestion key, if one is set.
fn ingestion_metadata() -> Option<opentelemetry_otlp::tonic_types::metadata::MetadataMap> {
    let key = std::env::var("OTEL_INGESTION_KEY").ok().filter(|k| !k.is_empty())?;
    let value = match key.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("OTEL_INGESTION_KEY is not a valid header value, sending without it");
            return None;
        }
    };
    let mut metadata = opentelemetry_otlp::tonic_types::metadata::MetadataMap::new();
    metadata.insert("ingestion-key", value);
    Some(metadata)
}

fn tls_config(endpoint: &str) -> Option<opentelemetry_otlp::tonic_types::transport::ClientTlsConfig> {
    endpoint.starts_with("https://").then(|| {
        opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots()
    })
}

/// Set up OpenTelemetry trace and log export.
///
/// Dioxus owns the `tracing` subscriber, so this only configures the OTLP
/// exporters so HTTP spans (via `OtelTraceLayer`) and `log` records reach
/// the collector.
///
/// Reads config from environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address
///   - `OTEL_SERVICE_NAME`: service name tag (default: `storefront-account`)
///   - `OTEL_INGESTION_KEY`: collector access token (optional)
///   - `DEPLOY_ENV`: deployment environment tag (default: `development`)
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let endpoint = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(ep) => ep,
        Err(_) => {
            eprintln!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
            return;
        }
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| TRACER_NAME.to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let rt = match OTEL_RUNTIME.get() {
        Some(rt) => rt,
        None => match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(1)
            .build()
        {
            Ok(rt) => OTEL_RUNTIME.get_or_init(|| rt),
            Err(e) => {
                eprintln!("Failed to create OTEL runtime ({e}), skipping OTLP telemetry");
                return;
            }
        },
    };
    let _guard = rt.enter();

    let mut span_builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);
    if let Some(tls) = tls_config(&endpoint) {
        span_builder = span_builder.with_tls_config(tls);
    }
    if let Some(md) = ingestion_metadata() {
        span_builder = span_builder.with_metadata(md);
    }
    let span_exporter = match span_builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            eprintln!("Failed to create OTLP span exporter: {e}");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(provider);

    // -- Log exporter (uses the `log` crate, not `tracing` subscriber) --
    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);
    if let Some(tls) = tls_config(&endpoint) {
        log_builder = log_builder.with_tls_config(tls);
    }
    if let Some(md) = ingestion_metadata() {
        log_builder = log_builder.with_metadata(md);
    }
    let log_exporter = match log_builder.build() {
        Ok(exporter) => exporter,
        Err(e) => {
            eprintln!("Failed to create OTLP log exporter: {e}");
            return;
        }
    };

    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    // Bridge the `log` crate → OpenTelemetry. Separate from the `tracing`
    // subscriber (owned by Dioxus) so there's no conflict.
    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => eprintln!("Log bridge skipped, log crate logger already set"),
    }

    log::info!("Telemetry initialized v{APP_VERSION}, exporting to {endpoint}");
}

/// Detect client platform from User-Agent and optional X-Client-Platform header.
///
/// Priority: explicit `X-Client-Platform` header > User-Agent heuristic.
/// Dioxus native clients (desktop/mobile) don't send User-Agent, so they
/// show as "native" unless the app sets X-Client-Platform.
fn detect_platform(ua: &str, explicit: Option<&str>) -> &'static str {
    if let Some(p) = explicit {
        return match p {
            "ios" => "ios",
            "android" => "android",
            "desktop" => "desktop",
            "mobile" => "mobile",
            "web" => "web",
            _ => "unknown",
        };
    }

    if ua == "unknown" || ua.is_empty() {
        return "native";
    }
    if ua.contains("iPhone") || ua.contains("iPad") || ua.contains("CFNetwork") {
        "ios"
    } else if ua.contains("Android") {
        "android"
    } else if ua.contains("Mozilla") || ua.contains("Chrome") || ua.contains("Safari") {
        "web"
    } else {
        "native"
    }
}

fn header_str<'a>(req: &'a Request<Body>, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Captures: method, path, user-agent, client platform, request ID and
/// response status.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(TRACER_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let user_agent = header_str(&req, "user-agent").unwrap_or("unknown").to_string();
        let client_platform = detect_platform(&user_agent, header_str(&req, "x-client-platform"));
        let request_id = header_str(&req, "x-request-id").unwrap_or("").to_string();

        let attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.user_agent", user_agent),
            KeyValue::new("client.platform", client_platform),
            KeyValue::new("http.request_id", request_id),
        ];

        let span = tracer
            .span_builder(format!("{} {}", &method, &path))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}
