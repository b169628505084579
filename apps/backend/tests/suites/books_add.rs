use actix_web::http::StatusCode;
use actix_web::test;
use backend::entities::books;
use backend::AppError;
use backend_test_support::problem_details::assert_problem_details;

use crate::support::create_test_app;
use crate::support::multipart::{book_form, content_type_header, MultipartBody};
use crate::support::test_state::build_test_state;

fn add_request(body: Vec<u8>) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/books/add")
        .insert_header(content_type_header())
        .set_payload(body)
        .to_request()
}

#[tokio::test]
async fn add_without_image_echoes_fields_and_generates_id() -> Result<(), AppError> {
    let (state, _media) = build_test_state().await?;
    let app = create_test_app(state).build().await?;

    let body = book_form("Dune", "Frank Herbert", "Chilton", "1965").finish();
    let resp = test::call_service(&app, add_request(body)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let created: books::Model = test::read_body_json(resp).await;
    assert!(created.id >= 1);
    assert_eq!(created.title, "Dune");
    assert_eq!(created.author, "Frank Herbert");
    assert_eq!(created.publisher, "Chilton");
    assert_eq!(created.year, "1965");
    assert_eq!(created.image_url, None);

    Ok(())
}

#[tokio::test]
async fn generated_ids_are_distinct() -> Result<(), AppError> {
    let (state, _media) = build_test_state().await?;
    let app = create_test_app(state).build().await?;

    let first_body = book_form("Dune", "Frank Herbert", "Chilton", "1965").finish();
    let second_body = book_form("Dune Messiah", "Frank Herbert", "Putnam", "1969").finish();

    let first: books::Model =
        test::read_body_json(test::call_service(&app, add_request(first_body)).await).await;
    let second: books::Model =
        test::read_body_json(test::call_service(&app, add_request(second_body)).await).await;

    assert_ne!(first.id, second.id);

    Ok(())
}

#[tokio::test]
async fn add_with_image_stores_file_and_serves_it_back() -> Result<(), AppError> {
    let (state, _media) = build_test_state().await?;
    let media_root = state.media().root().to_path_buf();
    let app = create_test_app(state).build().await?;

    let image_bytes: &[u8] = b"\xff\xd8\xff\xe0 not really a jpeg";
    let body = book_form("The Hobbit", "J.R.R. Tolkien", "Allen & Unwin", "1937")
        .file("image", "cover.jpg", "image/jpeg", image_bytes)
        .finish();

    let resp = test::call_service(&app, add_request(body)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let created: books::Model = test::read_body_json(resp).await;
    assert_eq!(created.image_url.as_deref(), Some("/images/cover.jpg"));

    // The file landed in the media directory...
    assert_eq!(std::fs::read(media_root.join("cover.jpg")).unwrap(), image_bytes);

    // ...and the static service hands it back.
    let req = test::TestRequest::get().uri("/images/cover.jpg").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let served = test::read_body(resp).await;
    assert_eq!(&served[..], image_bytes);

    Ok(())
}

#[tokio::test]
async fn repeat_upload_with_same_filename_overwrites() -> Result<(), AppError> {
    let (state, _media) = build_test_state().await?;
    let app = create_test_app(state).build().await?;

    let first = book_form("First Edition", "A. Author", "House", "2001")
        .file("image", "cover.jpg", "image/jpeg", b"first cover")
        .finish();
    let second = book_form("Second Edition", "A. Author", "House", "2002")
        .file("image", "cover.jpg", "image/jpeg", b"second cover")
        .finish();

    assert_eq!(
        test::call_service(&app, add_request(first)).await.status(),
        StatusCode::OK
    );
    assert_eq!(
        test::call_service(&app, add_request(second)).await.status(),
        StatusCode::OK
    );

    // Last writer wins; the path now serves the second upload's bytes.
    let req = test::TestRequest::get().uri("/images/cover.jpg").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let served = test::read_body(resp).await;
    assert_eq!(&served[..], b"second cover");

    Ok(())
}

#[tokio::test]
async fn missing_image_returns_404() -> Result<(), AppError> {
    let (state, _media) = build_test_state().await?;
    let app = create_test_app(state).build().await?;

    let req = test::TestRequest::get().uri("/images/nope.jpg").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn added_book_is_searchable() -> Result<(), AppError> {
    let (state, _media) = build_test_state().await?;
    let app = create_test_app(state).build().await?;

    let body = book_form("Neuromancer", "William Gibson", "Ace", "1984").finish();
    assert_eq!(
        test::call_service(&app, add_request(body)).await.status(),
        StatusCode::OK
    );

    let req = test::TestRequest::get()
        .uri("/books/search?q=gibson")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let found: Vec<books::Model> = test::read_body_json(resp).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Neuromancer");

    Ok(())
}

#[tokio::test]
async fn missing_required_field_is_rejected_by_extractor() -> Result<(), AppError> {
    let (state, _media) = build_test_state().await?;
    let app = create_test_app(state).build().await?;

    // No author field: the multipart extractor rejects this before the
    // handler runs, so this is a plain 400, not a problem response.
    let body = MultipartBody::new()
        .text("title", "Dune")
        .text("publisher", "Chilton")
        .text("year", "1965")
        .finish();

    let resp = test::call_service(&app, add_request(body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn empty_and_overlong_fields_are_rejected() -> Result<(), AppError> {
    let (state, _media) = build_test_state().await?;
    let app = create_test_app(state).build().await?;

    let empty_title = book_form("", "Frank Herbert", "Chilton", "1965").finish();
    let resp = test::call_service(&app, add_request(empty_title)).await;
    assert_problem_details(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        Some("title"),
    )
    .await;

    let overlong_year = book_form("Dune", "Frank Herbert", "Chilton", "19650").finish();
    let resp = test::call_service(&app, add_request(overlong_year)).await;
    assert_problem_details(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        Some("year"),
    )
    .await;

    Ok(())
}
