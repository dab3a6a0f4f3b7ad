//! Beers Dispatcher
//!
//! Translates one inbound request on `/beers` into one service call and the
//! service result into one response. Successful results are always a JSON
//! array of beers, even for a single entity; that asymmetry is part of the
//! wire contract.

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::application::BeerService;
use crate::domain::Beer;
use crate::infrastructure::http::error::DispatchError;
use crate::infrastructure::http::state::AppState;

/// POST carries no body; created beers get these fixed values.
const PLACEHOLDER_NAME: &str = "Fake Beer";
const PLACEHOLDER_COUNTRY: &str = "uk";

/// Entry point for every method on `/beers` and `/beers/{id}`.
pub async fn dispatch_beers(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Response {
    let results = handle_request(&state.beer_service, &method, uri.path()).await;

    let beers = match results {
        Ok(beers) => beers,
        Err(err) => return err.into_response(),
    };

    match serde_json::to_vec(&beers) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Method dispatch. Every success is a list, single entities array-wrapped.
async fn handle_request(
    service: &BeerService,
    method: &Method,
    path: &str,
) -> Result<Vec<Beer>, DispatchError> {
    match *method {
        Method::GET => {
            tracing::info!("GET - {}", path);

            // request for a specific beer: /beers/{id}
            if let Some(id) = extract_entity_id(path) {
                let beer = service.get_by_id(id).await?;
                return Ok(vec![beer]);
            }

            // request for the whole collection
            service
                .list_all()
                .await
                .map_err(|e| DispatchError::Internal(e.to_string()))
        }

        Method::POST => {
            tracing::info!("POST - {}", path);
            let beer = service
                .create(PLACEHOLDER_NAME, PLACEHOLDER_COUNTRY)
                .await
                .map_err(|e| DispatchError::Internal(e.to_string()))?;
            Ok(vec![beer])
        }

        _ => Err(DispatchError::UnknownMethod(method.to_string())),
    }
}

/// Pull the entity identifier out of the raw path.
///
/// Strips the `/beers` prefix, one leading separator, and at most one
/// trailing separator. Whatever remains is the identifier, verbatim:
/// embedded separators stay part of it (`/beers/2222/tap` -> `2222/tap`).
/// That behavior is part of the wire contract.
fn extract_entity_id(path: &str) -> Option<&str> {
    let rest = path.strip_prefix("/beers").unwrap_or(path);
    if rest.len() <= 1 {
        return None;
    }

    let id = &rest[1..];
    Some(id.strip_suffix('/').unwrap_or(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::create_routes;
    use crate::infrastructure::memory::InMemoryBeerRepository;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum::Router;
    use chrono::Utc;
    use tower::util::ServiceExt;

    #[test]
    fn test_extract_entity_id() {
        assert_eq!(extract_entity_id("/beers"), None);
        assert_eq!(extract_entity_id("/beers/"), None);
        assert_eq!(extract_entity_id("/beers/1111"), Some("1111"));
        assert_eq!(extract_entity_id("/beers/2222/"), Some("2222"));
        assert_eq!(
            extract_entity_id("/beers/2222/someprefix"),
            Some("2222/someprefix")
        );
    }

    #[test]
    fn test_extract_entity_id_double_separator() {
        // "/beers//" leaves an empty identifier rather than none
        assert_eq!(extract_entity_id("/beers//"), Some(""));
    }

    #[test]
    fn test_extract_entity_id_strips_one_trailing_separator() {
        assert_eq!(extract_entity_id("/beers/2222//"), Some("2222/"));
    }

    fn fixture(id: &str, name: &str) -> Beer {
        Beer {
            id: id.to_string(),
            name: name.to_string(),
            country_iso: "uk".to_string(),
            created_at: Utc::now(),
        }
    }

    fn test_app(beers: Vec<Beer>) -> Router {
        let repo = Arc::new(InMemoryBeerRepository::with_beers(beers));
        create_routes().with_state(Arc::new(AppState::new(repo)))
    }

    async fn send(app: Router, method: &str, path: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_get_collection_returns_all_beers() {
        let app = test_app(vec![
            fixture("1111", "Punk IPA"),
            fixture("2222", "Augustiner Helles"),
            fixture("3333", "Pilsner Urquell"),
        ]);

        let (status, body) = send(app, "GET", "/beers").await;
        assert_eq!(status, StatusCode::OK);

        let beers: Vec<Beer> = serde_json::from_slice(&body).unwrap();
        assert_eq!(beers.len(), 3);
    }

    #[tokio::test]
    async fn test_get_empty_collection_is_empty_array() {
        let (status, body) = send(test_app(vec![]), "GET", "/beers").await;
        assert_eq!(status, StatusCode::OK);

        let beers: Vec<Beer> = serde_json::from_slice(&body).unwrap();
        assert!(beers.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id_wraps_entity_in_array() {
        let stored = fixture("1111", "Punk IPA");
        let app = test_app(vec![stored.clone(), fixture("2222", "Helles")]);

        let (status, body) = send(app, "GET", "/beers/1111").await;
        assert_eq!(status, StatusCode::OK);

        let beers: Vec<Beer> = serde_json::from_slice(&body).unwrap();
        assert_eq!(beers, vec![stored]);
    }

    #[tokio::test]
    async fn test_get_by_id_accepts_one_trailing_separator() {
        let app = test_app(vec![fixture("2222", "Helles")]);

        let (status, body) = send(app, "GET", "/beers/2222/").await;
        assert_eq!(status, StatusCode::OK);

        let beers: Vec<Beer> = serde_json::from_slice(&body).unwrap();
        assert_eq!(beers[0].id, "2222");
    }

    #[tokio::test]
    async fn test_get_by_id_with_embedded_separator() {
        let app = test_app(vec![fixture("2222/someprefix", "Nested")]);

        let (status, body) = send(app, "GET", "/beers/2222/someprefix").await;
        assert_eq!(status, StatusCode::OK);

        let beers: Vec<Beer> = serde_json::from_slice(&body).unwrap();
        assert_eq!(beers[0].id, "2222/someprefix");
    }

    #[tokio::test]
    async fn test_get_missing_beer_is_405_with_empty_body() {
        let app = test_app(vec![fixture("1111", "Punk IPA")]);

        let (status, body) = send(app, "GET", "/beers/9999").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_post_creates_with_placeholder_values() {
        let before = Utc::now();
        let (status, body) = send(test_app(vec![]), "POST", "/beers").await;
        assert_eq!(status, StatusCode::OK);

        let beers: Vec<Beer> = serde_json::from_slice(&body).unwrap();
        assert_eq!(beers.len(), 1);
        assert!(!beers[0].id.is_empty());
        assert_eq!(beers[0].name, "Fake Beer");
        assert_eq!(beers[0].country_iso, "uk");
        assert!(beers[0].created_at >= before);
        assert!(beers[0].created_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_unsupported_methods_are_405_with_empty_body() {
        for method in ["PUT", "DELETE", "PATCH", "HEAD"] {
            let app = test_app(vec![fixture("1111", "Punk IPA")]);
            let (status, body) = send(app, method, "/beers/1111").await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{}", method);
            assert!(body.is_empty(), "{}", method);
        }
    }

    #[tokio::test]
    async fn test_success_response_is_json() {
        let response = test_app(vec![])
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/beers")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
