use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    Router,
};
use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
    sync::Arc,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS: u64 = 365 * 24 * 60 * 60;
const DEFAULT_IMAGE_CACHE_MAX_AGE_SECONDS: u64 = 60 * 60;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const MAX_ASSET_CACHE_MAX_AGE_SECONDS: u64 = 365 * 24 * 60 * 60;
const MAX_IMAGE_CACHE_MAX_AGE_SECONDS: u64 = 7 * 24 * 60 * 60;
const REQUEST_ID_HEADER: &str = "x-request-id";
const INDEX_FILE: &str = "index.html";
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "svg", "webp", "ico"];

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error)]
pub enum HostError {
    #[error("{} not found; run `trunk build --release` first", .0.display())]
    MissingBundle(PathBuf),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Declaration order is severity order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
struct HostConfig {
    port: u16,
    dist_dir: PathBuf,
    asset_cache_max_age_seconds: u64,
    image_cache_max_age_seconds: u64,
    log_level: LogLevel,
}

impl HostConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Missing, blank, malformed or out of range settings keep their default.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let setting = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            port: setting("PORT")
                .and_then(|value| value.parse::<u16>().ok())
                .filter(|port| *port != 0)
                .unwrap_or(DEFAULT_PORT),
            dist_dir: setting("DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR)),
            asset_cache_max_age_seconds: seconds_up_to(
                setting("ASSET_CACHE_MAX_AGE_SECONDS"),
                MAX_ASSET_CACHE_MAX_AGE_SECONDS,
            )
            .unwrap_or(DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS),
            image_cache_max_age_seconds: seconds_up_to(
                setting("IMAGE_CACHE_MAX_AGE_SECONDS"),
                MAX_IMAGE_CACHE_MAX_AGE_SECONDS,
            )
            .unwrap_or(DEFAULT_IMAGE_CACHE_MAX_AGE_SECONDS),
            log_level: setting("LOG_LEVEL")
                .and_then(|value| LogLevel::parse(&value))
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

fn seconds_up_to(value: Option<String>, max: u64) -> Option<u64> {
    value
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|seconds| *seconds <= max)
}

pub async fn run() -> Result<(), HostError> {
    let config = Arc::new(HostConfig::from_env());
    let index = config.dist_dir.join(INDEX_FILE);
    if !index.is_file() {
        return Err(HostError::MissingBundle(index));
    }

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|source| HostError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    log_event(
        &config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "address": bind_address,
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(Arc::clone(&config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_event(&config, LogLevel::Info, "server_stopped", serde_json::json!({}));
    Ok(())
}

fn router(config: Arc<HostConfig>) -> Router {
    let static_service = ServeDir::new(&config.dist_dir)
        .not_found_service(ServeFile::new(config.dist_dir.join(INDEX_FILE)));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(config, log_and_tag_response))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn log_and_tag_response(
    State(config): State<Arc<HostConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let status = response.status();

    if method == Method::GET || method == Method::HEAD {
        let policy = cache_policy_for_path(&path, &config);
        response
            .headers_mut()
            .insert(header::CACHE_CONTROL, cache_control(&policy));
    }
    insert_request_id(response.headers_mut(), &request_id);

    let level = if status.is_client_error() || status.is_server_error() {
        LogLevel::Info
    } else {
        LogLevel::Debug
    };
    log_event(
        &config,
        level,
        "request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path,
            "status": status.as_u16(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    response
}

fn cache_policy_for_path(path: &str, config: &HostConfig) -> String {
    let file_name = path.rsplit('/').next().unwrap_or_default();
    let extension = Path::new(file_name)
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        None | Some("html") => "no-cache".to_string(),
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext) => {
            format!("public, max-age={}", config.image_cache_max_age_seconds)
        }
        Some(_) => format!(
            "public, max-age={}, immutable",
            config.asset_cache_max_age_seconds
        ),
    }
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn unix_now() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", unix_now().as_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn insert_request_id(headers: &mut HeaderMap, request_id: &str) {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
}

fn log_event(config: &HostConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut line = serde_json::json!({
        "ts": unix_now().as_secs(),
        "level": level.as_str(),
        "event": event,
    });
    if let (Some(line), serde_json::Value::Object(extra)) = (line.as_object_mut(), fields) {
        line.extend(extra);
    }

    println!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
    };
    use std::collections::HashMap;
    use tower::ServiceExt;

    fn test_config(dist_dir: PathBuf) -> HostConfig {
        HostConfig {
            port: DEFAULT_PORT,
            dist_dir,
            asset_cache_max_age_seconds: DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS,
            image_cache_max_age_seconds: DEFAULT_IMAGE_CACHE_MAX_AGE_SECONDS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    fn bundle_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "portfolio-host-{}-{name}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("create bundle dir");
        std::fs::write(dir.join(INDEX_FILE), "<div id=\"app\"></div>").expect("write index");
        std::fs::write(dir.join("app-1a2b.js"), "export {};").expect("write script");
        dir
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    #[test]
    fn cache_policy_distinguishes_documents_images_and_assets() {
        let config = test_config(PathBuf::from("dist"));

        assert_eq!(cache_policy_for_path("/", &config), "no-cache");
        assert_eq!(cache_policy_for_path("/index.html", &config), "no-cache");
        assert_eq!(cache_policy_for_path("/projects", &config), "no-cache");
        assert_eq!(
            cache_policy_for_path("/cert-java.JPG", &config),
            "public, max-age=3600"
        );
        assert_eq!(
            cache_policy_for_path("/portfolio-9f8e_bg.wasm", &config),
            "public, max-age=31536000, immutable"
        );
    }

    fn config_from(pairs: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        HostConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn log_levels_order_debug_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info.as_str(), "info");
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn config_defaults_when_nothing_is_set() {
        let config = config_from(&[]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.asset_cache_max_age_seconds, DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS);
        assert_eq!(config.image_cache_max_age_seconds, DEFAULT_IMAGE_CACHE_MAX_AGE_SECONDS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn config_accepts_values_within_bounds() {
        let config = config_from(&[
            ("PORT", " 3000 "),
            ("DIST_DIR", "site/build"),
            ("ASSET_CACHE_MAX_AGE_SECONDS", "0"),
            ("IMAGE_CACHE_MAX_AGE_SECONDS", "604800"),
            ("LOG_LEVEL", "DEBUG"),
        ]);

        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("site/build"));
        assert_eq!(config.asset_cache_max_age_seconds, 0);
        assert_eq!(config.image_cache_max_age_seconds, MAX_IMAGE_CACHE_MAX_AGE_SECONDS);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn config_rejects_out_of_range_and_blank_values() {
        let config = config_from(&[
            ("PORT", "0"),
            ("DIST_DIR", "   "),
            ("ASSET_CACHE_MAX_AGE_SECONDS", "31536001"),
            ("IMAGE_CACHE_MAX_AGE_SECONDS", "604801"),
            ("LOG_LEVEL", "verbose"),
        ]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.asset_cache_max_age_seconds, DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS);
        assert_eq!(config.image_cache_max_age_seconds, DEFAULT_IMAGE_CACHE_MAX_AGE_SECONDS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);

        let malformed = config_from(&[("PORT", "80a"), ("IMAGE_CACHE_MAX_AGE_SECONDS", "-1")]);
        assert_eq!(malformed.port, DEFAULT_PORT);
        assert_eq!(malformed.image_cache_max_age_seconds, DEFAULT_IMAGE_CACHE_MAX_AGE_SECONDS);
    }

    #[test]
    fn request_id_prefers_caller_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123  "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        assert!(resolve_request_id(&headers).starts_with("req-"));
    }

    #[test]
    fn generated_request_ids_are_unique() {
        assert_ne!(generate_request_id(), generate_request_id());
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let dir = bundle_dir("fallback");
        let app = router(Arc::new(test_config(dir)));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/certifications")
                    .header(REQUEST_ID_HEADER, "req-test")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "req-test");
        assert_eq!(response.headers().get(header::CACHE_CONTROL).unwrap(), "no-cache");
        assert!(body_text(response).await.contains("id=\"app\""));
    }

    #[tokio::test]
    async fn hashed_assets_are_cached_immutably() {
        let dir = bundle_dir("assets");
        let app = router(Arc::new(test_config(dir)));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/app-1a2b.js")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=31536000, immutable"
        );
        assert!(response.headers().get(REQUEST_ID_HEADER).is_some());
    }

    #[test]
    fn missing_bundle_error_names_the_index_path() {
        let err = HostError::MissingBundle(PathBuf::from("dist/index.html"));
        assert!(err.to_string().starts_with("dist/index.html not found"));
    }
}
