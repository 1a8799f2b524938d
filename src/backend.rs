use crate::logging::{log_event, LogLevel};
use axum::{
    http::{header, HeaderValue},
    Router,
};
use serde_json::json;
use std::path::PathBuf;
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS: u64 = 300;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 31_536_000);

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub static_cache_max_age_seconds: u64,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = parse_port(std::env::var("PORT").ok().as_deref(), DEFAULT_PORT);
        let dist_dir = parse_env_non_empty_string("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let static_cache_max_age_seconds = parse_u64_with_bounds(
            std::env::var("STATIC_CACHE_MAX_AGE_SECONDS").ok().as_deref(),
            DEFAULT_STATIC_CACHE_MAX_AGE_SECONDS,
            STATIC_CACHE_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_env_non_empty_string("LOG_LEVEL")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            static_cache_max_age_seconds,
            log_level,
        }
    }
}

pub fn router(config: &ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));

    Router::new()
        .fallback_service(static_service)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control(config.static_cache_max_age_seconds),
        ))
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let app = router(&config);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        config.log_level,
        LogLevel::Info,
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
            "cache_max_age_seconds": config.static_cache_max_age_seconds,
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

fn cache_control(max_age_seconds: u64) -> HeaderValue {
    HeaderValue::from_str(&format!("public, max-age={max_age_seconds}"))
        .unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_port(raw: Option<&str>, default: u16) -> u16 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value != 0)
        .unwrap_or(default)
}

fn parse_u64_with_bounds(raw: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn dist_fixture(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("marketing-site-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create fixture dir");
        fs::write(dir.join("index.html"), "<main id=\"app\"></main>").expect("write index");
        fs::write(dir.join("styles.css"), ".reveal { opacity: 0; }").expect("write stylesheet");
        dir
    }

    fn test_config(dist_dir: PathBuf) -> ServerConfig {
        ServerConfig {
            port: 0,
            dist_dir,
            static_cache_max_age_seconds: 60,
            log_level: LogLevel::Warn,
        }
    }

    async fn spawn_server(config: &ServerConfig) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let address = listener.local_addr().expect("local address");
        let app = router(config);
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{address}")
    }

    #[test]
    fn port_parsing_rejects_garbage_and_zero() {
        assert_eq!(parse_port(Some(" 3000 "), DEFAULT_PORT), 3000);
        assert_eq!(parse_port(Some("0"), DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(parse_port(Some("http"), DEFAULT_PORT), DEFAULT_PORT);
        assert_eq!(parse_port(None, DEFAULT_PORT), DEFAULT_PORT);
    }

    #[test]
    fn bounded_values_outside_range_use_default() {
        let bounds = (10, 20);
        assert_eq!(parse_u64_with_bounds(Some("15"), 12, bounds), 15);
        assert_eq!(parse_u64_with_bounds(Some("25"), 12, bounds), 12);
        assert_eq!(parse_u64_with_bounds(Some("-1"), 12, bounds), 12);
    }

    #[test]
    fn cache_control_header_carries_max_age() {
        assert_eq!(cache_control(60), HeaderValue::from_static("public, max-age=60"));
    }

    #[tokio::test]
    async fn serves_static_assets_with_cache_control() {
        let config = test_config(dist_fixture("assets"));
        let base = spawn_server(&config).await;

        let response = reqwest::get(format!("{base}/styles.css"))
            .await
            .expect("request succeeds");

        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL.as_str())
                .and_then(|value| value.to_str().ok()),
            Some("public, max-age=60")
        );
        let body = response.text().await.expect("body");
        assert!(body.contains(".reveal"));
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let config = test_config(dist_fixture("fallback"));
        let base = spawn_server(&config).await;

        let body = reqwest::get(format!("{base}/pricing/enterprise"))
            .await
            .expect("request succeeds")
            .text()
            .await
            .expect("body");

        assert!(body.contains("id=\"app\""));
    }
}
