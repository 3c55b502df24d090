use axum::extract::{Extension, Path};
use axum::http::{Method, Uri};
use axum::routing::any;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use card_service::card::CardService;
use card_service::config;
use card_service::gateway::protocol::PATH_PARAM_ID;
use card_service::gateway::{dispatch, GatewayRequest, GatewayResponse};
use card_service::storage::{CardStore, MemoryStore};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let bind_addr = match parse_bind_addr(&args) {
        Ok(addr) => addr,
        Err(error) => {
            eprintln!("{}", error);
            eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting card service on {}", bind_addr);

    // 1. Storage layer:
    let store = Arc::new(MemoryStore::new(config::table_name()));

    // 2. Business logic:
    let service = Arc::new(CardService::new(store.clone()));

    // 3. HTTP router:
    let app = Router::new()
        .route("/cards", any(handle_cards))
        .route("/cards/:id", any(handle_card_by_id))
        .fallback(handle_unmatched)
        .layer(Extension(service));

    // 4. Spawn stats reporter:
    let stats_store = store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30));

        loop {
            interval.tick().await;
            match stats_store.count() {
                Ok(count) => tracing::info!(
                    "Table '{}' holds {} cards",
                    stats_store.table_name(),
                    count
                ),
                Err(error) => tracing::warn!("Failed to count cards: {}", error),
            }
        }
    });

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn parse_bind_addr(args: &[String]) -> anyhow::Result<SocketAddr> {
    let mut bind_addr: SocketAddr = DEFAULT_BIND_ADDR.parse()?;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--bind requires <addr:port>"))?;
                bind_addr = value.parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }
    Ok(bind_addr)
}

// Thin adapters: each builds the gateway-shaped request and delegates to the
// dispatcher, which owns all status-code and error-code decisions.

async fn handle_cards(
    Extension(service): Extension<Arc<CardService>>,
    method: Method,
    body: String,
) -> GatewayResponse {
    let mut request = GatewayRequest::new(method, "/cards");
    if !body.is_empty() {
        request = request.with_body(body);
    }
    dispatch(&service, &request)
}

async fn handle_card_by_id(
    Extension(service): Extension<Arc<CardService>>,
    method: Method,
    Path(id): Path<String>,
) -> GatewayResponse {
    let request = GatewayRequest::new(method, format!("/cards/{}", id))
        .with_path_parameter(PATH_PARAM_ID, id);
    dispatch(&service, &request)
}

async fn handle_unmatched(
    Extension(service): Extension<Arc<CardService>>,
    method: Method,
    uri: Uri,
) -> GatewayResponse {
    dispatch(&service, &GatewayRequest::new(method, uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        std::iter::once("card-service")
            .chain(values.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_bind_addr_defaults_without_flag() {
        let addr = parse_bind_addr(&args(&[])).unwrap();
        assert_eq!(addr, DEFAULT_BIND_ADDR.parse().unwrap());
    }

    #[test]
    fn test_parse_bind_addr_reads_flag_value() {
        let addr = parse_bind_addr(&args(&["--bind", "0.0.0.0:8080"])).unwrap();
        assert_eq!(addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_parse_bind_addr_with_trailing_flag_is_an_error() {
        // A bare trailing --bind must fail cleanly, not index past the args
        assert!(parse_bind_addr(&args(&["--bind"])).is_err());
    }
}
