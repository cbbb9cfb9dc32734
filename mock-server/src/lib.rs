//! In-memory stand-in for the movie service, used by contract tests and for
//! local runs of the client.

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub cast: String,
    pub movie_id: Option<i64>,
    pub name: String,
    pub release_date: NaiveDate,
    pub year: i32,
}

#[derive(Deserialize)]
pub struct NewMovie {
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub name: String,
    pub release_date: NaiveDate,
    pub year: i32,
}

#[derive(Deserialize)]
pub struct MovieUpdate {
    pub cast: Option<String>,
    pub name: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub year: Option<i32>,
}

#[derive(Deserialize)]
pub struct NameQuery {
    pub movie_name: String,
}

#[derive(Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

#[derive(Debug, Default)]
pub struct Store {
    movies: BTreeMap<i64, Movie>,
    next_id: i64,
}

impl Store {
    fn insert(&mut self, mut movie: Movie) -> Movie {
        self.next_id += 1;
        movie.movie_id = Some(self.next_id);
        self.movies.insert(self.next_id, movie.clone());
        movie
    }
}

pub type Db = Arc<RwLock<Store>>;

type Rejection = (StatusCode, String);

/// The catalogue the service starts with. Four titles contain "Avengers" and
/// two were released in 2012.
pub fn fixtures() -> Vec<Movie> {
    let movie = |name: &str, cast: &str, (y, m, d): (i32, u32, u32)| Movie {
        cast: cast.to_string(),
        movie_id: None,
        name: name.to_string(),
        release_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        year: y,
    };
    vec![
        movie("Batman Begins", "Christian Bale, Katie Holmes, Liam Neeson", (2005, 6, 15)),
        movie("The Dark Knight", "Christian Bale, Heath Ledger, Michael Caine", (2008, 7, 18)),
        movie("The Dark Knight Rises", "Christian Bale, Heath Ledger , Michael Caine", (2012, 7, 20)),
        movie("The Avengers", "Robert Downey Jr, Chris Evans, Chris Hemsworth", (2012, 5, 4)),
        movie("Avengers: Age of Ultron", "Robert Downey Jr, Chris Evans, Scarlett Johansson", (2015, 5, 1)),
        movie("Avengers: Infinity War", "Robert Downey Jr, Chris Hemsworth, Josh Brolin", (2018, 4, 27)),
        movie("Avengers: End Game", "Robert Downey Jr, Chris Evans, Josh Brolin", (2019, 4, 26)),
    ]
}

/// The movie service seeded with `fixtures()`.
pub fn app() -> Router {
    app_with(fixtures())
}

/// The movie service seeded with `movies`; ids are assigned from 1 in order.
pub fn app_with(movies: Vec<Movie>) -> Router {
    let mut store = Store::default();
    for movie in movies {
        store.insert(movie);
    }
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/movieservice/v1/allMovies", get(list_movies))
        .route(
            "/movieservice/v1/movie/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
        .route(
            "/movieservice/v1/movieName",
            get(movies_by_name).delete(delete_movies_by_name),
        )
        .route("/movieservice/v1/movieYear", get(movies_by_year))
        .route("/movieservice/v2/movie", post(create_movie))
        .with_state(db)
}

/// Answers every request with `status` and `body`.
pub fn status_app(status: StatusCode, body: &'static str) -> Router {
    Router::new().fallback(move || async move { (status, body) })
}

/// Answers every request with `200 []`, but only after `delay`.
pub fn slow_app(delay: Duration) -> Router {
    Router::new().fallback(move || async move {
        tokio::time::sleep(delay).await;
        Json(Vec::<Movie>::new())
    })
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn list_movies(State(db): State<Db>) -> Json<Vec<Movie>> {
    let store = db.read().await;
    Json(store.movies.values().cloned().collect())
}

async fn get_movie(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Movie>, Rejection> {
    let store = db.read().await;
    store.movies.get(&id).cloned().map(Json).ok_or_else(|| missing_id(id))
}

async fn movies_by_name(
    State(db): State<Db>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<Movie>>, Rejection> {
    let store = db.read().await;
    let found: Vec<Movie> = store
        .movies
        .values()
        .filter(|m| m.name.contains(&query.movie_name))
        .cloned()
        .collect();
    if found.is_empty() {
        return Err(missing_name(&query.movie_name));
    }
    Ok(Json(found))
}

async fn movies_by_year(
    State(db): State<Db>,
    Query(query): Query<YearQuery>,
) -> Result<Json<Vec<Movie>>, Rejection> {
    let store = db.read().await;
    let found: Vec<Movie> = store
        .movies
        .values()
        .filter(|m| m.year == query.year)
        .cloned()
        .collect();
    if found.is_empty() {
        return Err((
            StatusCode::NOT_FOUND,
            format!("No Movie Available with the given year - {}", query.year),
        ));
    }
    Ok(Json(found))
}

async fn create_movie(
    State(db): State<Db>,
    Json(input): Json<NewMovie>,
) -> Result<(StatusCode, Json<Movie>), Rejection> {
    let missing: Vec<&str> = [("name", &input.name), ("cast", &input.cast)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();
    if !missing.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Please pass all the input fields : {missing:?}"),
        ));
    }

    let movie = db.write().await.insert(Movie {
        cast: input.cast,
        movie_id: None,
        name: input.name,
        release_date: input.release_date,
        year: input.year,
    });
    tracing::info!(movie_id = movie.movie_id, name = %movie.name, "movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<MovieUpdate>,
) -> Result<Json<Movie>, Rejection> {
    let mut store = db.write().await;
    let movie = store.movies.get_mut(&id).ok_or_else(|| missing_id(id))?;
    // The real service appends cast members rather than replacing them.
    if let Some(cast) = input.cast {
        movie.cast = format!("{}, {cast}", movie.cast);
    }
    if let Some(name) = input.name {
        movie.name = name;
    }
    if let Some(release_date) = input.release_date {
        movie.release_date = release_date;
    }
    if let Some(year) = input.year {
        movie.year = year;
    }
    Ok(Json(movie.clone()))
}

async fn delete_movie(State(db): State<Db>, Path(id): Path<i64>) -> Result<&'static str, Rejection> {
    let mut store = db.write().await;
    store
        .movies
        .remove(&id)
        .map(|_| "Movie Deleted Successfully")
        .ok_or_else(|| missing_id(id))
}

async fn delete_movies_by_name(
    State(db): State<Db>,
    Query(query): Query<NameQuery>,
) -> Result<StatusCode, Rejection> {
    let mut store = db.write().await;
    let before = store.movies.len();
    store.movies.retain(|_, m| !m.name.contains(&query.movie_name));
    if store.movies.len() == before {
        return Err(missing_name(&query.movie_name));
    }
    tracing::info!(removed = before - store.movies.len(), name = %query.movie_name, "movies deleted");
    Ok(StatusCode::OK)
}

fn missing_id(id: i64) -> Rejection {
    (
        StatusCode::NOT_FOUND,
        format!("No Movie Available with the given Id - {id}"),
    )
}

fn missing_name(name: &str) -> Rejection {
    (
        StatusCode::NOT_FOUND,
        format!("No Movie Available with the given name - {name}"),
    )
}
