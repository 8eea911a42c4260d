//! GraphQL client for the CineBase endpoint

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::state::AppState;
use crate::types::{Movie, MovieRecord, Session};

const ALL_MOVIES_QUERY: &str = "\
query {
  allMovies {
    id
    title
    synopsis
    poster_url
    released
    genres
    user_rating
    critic_rating
  }
}";

const LOGIN_MUTATION: &str = "\
mutation Login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    email
    token
  }
}";

const SIGNUP_MUTATION: &str = "\
mutation Signup($name: String!, $email: String!, $password: String!) {
  signup(name: $name, email: $email, password: $password) {
    name
    email
  }
}";

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

/// POST one GraphQL operation and decode the `data` payload
pub async fn graphql_request<T>(
    endpoint: &str,
    query: &str,
    variables: serde_json::Value,
) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let body = serde_json::json!({ "query": query, "variables": variables });

    let resp = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        return Err(format!("Request failed with status {}", resp.status()));
    }

    let parsed: GraphQlResponse<T> = resp
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if let Some(err) = parsed.errors.first() {
        return Err(err.message.clone());
    }
    parsed
        .data
        .ok_or_else(|| "Empty response from server".to_string())
}

#[derive(Deserialize)]
struct AllMoviesData {
    #[serde(rename = "allMovies")]
    all_movies: Vec<MovieRecord>,
}

/// Fetch the full catalog and map it into the view model
pub async fn fetch_all_movies(endpoint: &str) -> Result<Vec<Movie>, String> {
    let data: AllMoviesData =
        graphql_request(endpoint, ALL_MOVIES_QUERY, serde_json::json!({})).await?;
    Ok(data.all_movies.into_iter().map(Movie::from).collect())
}

#[derive(Deserialize)]
struct LoginData {
    login: LoginPayload,
}

#[derive(Deserialize)]
struct LoginPayload {
    email: String,
    token: String,
}

/// Log in and build a session.
///
/// The mutation only returns email and token, so the display name falls
/// back to the local part of the email.
pub async fn login(endpoint: &str, email: &str, password: &str) -> Result<Session, String> {
    let variables = serde_json::json!({ "email": email, "password": password });
    let data: LoginData = graphql_request(endpoint, LOGIN_MUTATION, variables).await?;

    let name = data
        .login
        .email
        .split('@')
        .next()
        .unwrap_or_default()
        .to_string();
    Ok(Session {
        name,
        email: data.login.email,
        token: data.login.token,
    })
}

#[derive(Deserialize)]
struct SignupData {
    signup: SignupPayload,
}

#[derive(Deserialize)]
struct SignupPayload {
    name: String,
    email: String,
}

/// Create an account, then log in with the same credentials.
///
/// The signup mutation does not issue a token, so a login round-trip
/// follows it; the session keeps the signed-up name.
pub async fn signup(
    endpoint: &str,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Session, String> {
    let variables = serde_json::json!({ "name": name, "email": email, "password": password });
    let data: SignupData = graphql_request(endpoint, SIGNUP_MUTATION, variables).await?;

    let session = login(endpoint, &data.signup.email, password).await?;
    Ok(Session {
        name: data.signup.name,
        ..session
    })
}

/// Load the catalog into the store
pub fn load_catalog(state: AppState) {
    spawn_local(async move {
        state.catalog.loading.set(true);
        state.ui.clear_error();

        let endpoint = state.endpoint.get_untracked();
        match fetch_all_movies(&endpoint).await {
            Ok(movies) => {
                tracing::debug!("catalog loaded: {} movies", movies.len());
                state.catalog.ingest(movies);
            }
            Err(e) => {
                tracing::error!("Failed to load catalog: {}", e);
                state.ui.set_error(e);
            }
        }

        state.catalog.loading.set(false);
    });
}
