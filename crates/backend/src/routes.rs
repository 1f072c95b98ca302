use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::config::Config;

/// Конфигурация всех роутов приложения
pub fn configure_routes(config: &Config) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Stacks
        .route(
            "/api/stacks",
            get(handlers::a001_stack::list_all).post(handlers::a001_stack::create),
        )
        .route("/api/stacks/:id", get(handlers::a001_stack::get_by_id))
        // Upload + retrieval chat
        .route(
            "/upload",
            post(handlers::upload::upload_file)
                .layer(DefaultBodyLimit::max(config.upload.max_bytes)),
        )
        .route("/chat", post(handlers::chat::chat_endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        configure_routes(&Config::default())
    }

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_and_fetch_stack() {
        let res = app()
            .oneshot(json_request(
                "POST",
                "/api/stacks",
                serde_json::json!({"name": "Router test"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        let created = body_json(res).await;
        assert_eq!(created["name"], "Router test");
        let id = created["id"].as_str().unwrap().to_string();

        let req = Request::builder()
            .uri(format!("/api/stacks/{id}"))
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["id"], id.as_str());

        let req = Request::builder()
            .uri("/api/stacks")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        let list = body_json(res).await;
        assert!(list
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s["id"] == id.as_str()));
    }

    #[tokio::test]
    async fn test_create_blank_stack_is_bad_request() {
        let res = app()
            .oneshot(json_request(
                "POST",
                "/api/stacks",
                serde_json::json!({"name": "   "}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(res).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_stack_errors() {
        let req = Request::builder()
            .uri("/api/stacks/not-a-uuid")
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let req = Request::builder()
            .uri(format!("/api/stacks/{}", uuid::Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upload_then_chat() {
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"zebra.txt\"\r\n\
             Content-Type: text/plain\r\n\r\nZebras graze across the savanna at dawn.\r\n--{b}--\r\n",
            b = boundary
        );
        let req = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["filename"], "zebra.txt");
        assert_eq!(json["kind"], "text");
        assert_eq!(json["chunks"], 1);

        let res = app()
            .oneshot(json_request(
                "POST",
                "/chat",
                serde_json::json!({"question": "Where do zebras graze?"}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let answer = body_json(res).await["answer"].as_str().unwrap().to_string();
        assert!(answer.contains("Zebras graze across the savanna at dawn."));
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{b}--\r\n",
            b = boundary
        );
        let req = Request::builder()
            .method("POST")
            .uri("/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_with_empty_question_reports_error_in_answer() {
        let res = app()
            .oneshot(json_request(
                "POST",
                "/chat",
                serde_json::json!({"question": " "}),
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let answer = body_json(res).await["answer"].as_str().unwrap().to_string();
        assert!(answer.starts_with("Backend Error:"));
    }
}
