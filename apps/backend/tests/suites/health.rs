use actix_web::http::StatusCode;
use actix_web::test;
use backend::AppError;

use crate::support::create_test_app;
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn health_returns_ok() -> Result<(), AppError> {
    let (state, _media) = build_test_state().await?;
    let app = create_test_app(state).build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    // Every response carries the request id assigned by the middleware.
    assert!(resp.headers().get("x-request-id").is_some());

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"ok");

    Ok(())
}
