use axum::http::{self, Request, StatusCode};
use axum::routing::RouterIntoService;
use http_body_util::BodyExt;
use mock_server::{app, app_with, status_app, Movie};
use tower::{Service, ServiceExt};

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

async fn call(app: &mut RouterIntoService<String>, request: Request<String>) -> axum::response::Response {
    ServiceExt::ready(app).await.unwrap().call(request).await.unwrap()
}

// --- list ---

#[tokio::test]
async fn list_all_returns_fixtures() {
    let resp = app()
        .oneshot(empty_request("GET", "/movieservice/v1/allMovies"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let movies: Vec<Movie> = body_json(resp).await;
    assert_eq!(movies.len(), 7);
    assert_eq!(movies[0].movie_id, Some(1));
    assert_eq!(movies[0].name, "Batman Begins");
}

#[tokio::test]
async fn list_all_empty_store() {
    let resp = app_with(Vec::new())
        .oneshot(empty_request("GET", "/movieservice/v1/allMovies"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let movies: Vec<Movie> = body_json(resp).await;
    assert!(movies.is_empty());
}

// --- search ---

#[tokio::test]
async fn search_by_name_matches_substring() {
    let resp = app()
        .oneshot(empty_request("GET", "/movieservice/v1/movieName?movie_name=Avengers"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let movies: Vec<Movie> = body_json(resp).await;
    assert_eq!(movies.len(), 4);
    assert!(movies.iter().all(|m| m.name.contains("Avengers")));
}

#[tokio::test]
async fn search_by_name_decodes_query() {
    let resp = app()
        .oneshot(empty_request(
            "GET",
            "/movieservice/v1/movieName?movie_name=Dark%20Knight",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let movies: Vec<Movie> = body_json(resp).await;
    assert_eq!(movies.len(), 2);
}

#[tokio::test]
async fn search_by_name_no_match_returns_404() {
    let resp = app()
        .oneshot(empty_request("GET", "/movieservice/v1/movieName?movie_name=ABC"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_by_year() {
    let resp = app()
        .oneshot(empty_request("GET", "/movieservice/v1/movieYear?year=2012"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let movies: Vec<Movie> = body_json(resp).await;
    assert_eq!(movies.len(), 2);
}

#[tokio::test]
async fn search_by_year_no_match_returns_404() {
    let resp = app()
        .oneshot(empty_request("GET", "/movieservice/v1/movieYear?year=1950"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_without_query_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/movieservice/v1/movieYear"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- create ---

#[tokio::test]
async fn create_movie_returns_201_with_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/movieservice/v2/movie",
            r#"{"cast":"Tom Hanks, Tim Allen","name":"ToyStory","release_date":"2020-03-02","year":2020}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let movie: Movie = body_json(resp).await;
    assert_eq!(movie.movie_id, Some(8));
    assert_eq!(movie.name, "ToyStory");
}

#[tokio::test]
async fn create_movie_without_name_returns_400() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/movieservice/v2/movie",
            r#"{"cast":"Tom Hanks","name":"","release_date":"2020-03-02","year":2020}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_bytes(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("name"));
}

#[tokio::test]
async fn create_movie_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/movieservice/v2/movie",
            r#"{"name":"No date"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- get ---

#[tokio::test]
async fn get_movie_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/movieservice/v1/movie/100"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"No Movie Available with the given Id - 100");
}

#[tokio::test]
async fn get_movie_bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/movieservice/v1/movie/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- update ---

#[tokio::test]
async fn update_movie_not_found() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/movieservice/v1/movie/100",
            r#"{"cast":"Nobody"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_movie_appends_cast() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/movieservice/v1/movie/3",
            r#"{"cast":"Tom Hardy"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let movie: Movie = body_json(resp).await;
    assert_eq!(
        movie.cast,
        "Christian Bale, Heath Ledger , Michael Caine, Tom Hardy"
    );
    assert_eq!(movie.name, "The Dark Knight Rises");
}

// --- delete ---

#[tokio::test]
async fn delete_movie_not_found() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/movieservice/v1/movie/100"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_by_name_no_match_returns_404() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/movieservice/v1/movieName?movie_name=ABC"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- fault apps ---

#[tokio::test]
async fn status_app_answers_every_path() {
    let resp = status_app(StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
        .oneshot(empty_request("GET", "/anything/at/all"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"Service Unavailable");
}

// --- full lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    let mut app = app().into_service();

    // create
    let resp = call(
        &mut app,
        json_request(
            "POST",
            "/movieservice/v2/movie",
            r#"{"cast":"Al Pacino","name":"Heat","release_date":"1995-12-15","year":1995}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Movie = body_json(resp).await;
    let id = created.movie_id.unwrap();

    // get
    let resp = call(&mut app, empty_request("GET", &format!("/movieservice/v1/movie/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Movie = body_json(resp).await;
    assert_eq!(fetched, created);

    // update: cast appended, year replaced, name untouched
    let resp = call(
        &mut app,
        json_request(
            "PUT",
            &format!("/movieservice/v1/movie/{id}"),
            r#"{"cast":"Robert De Niro","year":1996}"#,
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Movie = body_json(resp).await;
    assert_eq!(updated.cast, "Al Pacino, Robert De Niro");
    assert_eq!(updated.year, 1996);
    assert_eq!(updated.name, "Heat");

    // delete
    let resp = call(&mut app, empty_request("DELETE", &format!("/movieservice/v1/movie/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], b"Movie Deleted Successfully");

    // get after delete: 404
    let resp = call(&mut app, empty_request("GET", &format!("/movieservice/v1/movie/{id}"))).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // delete by name removes every match
    let resp = call(
        &mut app,
        empty_request("DELETE", "/movieservice/v1/movieName?movie_name=Avengers"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());

    let resp = call(&mut app, empty_request("GET", "/movieservice/v1/allMovies")).await;
    let movies: Vec<Movie> = body_json(resp).await;
    assert_eq!(movies.len(), 3);
    assert!(movies.iter().all(|m| !m.name.contains("Avengers")));
}
