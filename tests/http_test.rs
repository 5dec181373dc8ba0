use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use lingotracks::{
    Error,
    config::{GeniusConfig, SpotifyConfig},
    lyrics::{GeniusClient, GeniusProvider, GeniusTransport, LyricsProvider},
    spotify::{SpotifyClient, TopTracksSource, tracks::get_top_tracks},
    types::{Artist, TimeRange, Track},
};
use reqwest::Client;
use serde_json::json;

// Serves `app` on an ephemeral local port and returns its base URL
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn test_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

fn spotify_config(base: &str) -> SpotifyConfig {
    SpotifyConfig {
        access_token: "spotify-token".to_string(),
        api_url: format!("{base}/v1"),
    }
}

fn genius_config(base: &str) -> GeniusConfig {
    GeniusConfig {
        access_token: "genius-token".to_string(),
        api_url: base.to_string(),
        web_url: base.to_string(),
    }
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

fn create_test_track(name: &str, artist: &str) -> Track {
    Track {
        id: format!("{}_id", name),
        name: name.to_string(),
        artists: vec![Artist {
            id: format!("{}_artist_id", artist),
            name: artist.to_string(),
        }],
        uri: format!("spotify:track:{}", name),
        href: format!("https://api.spotify.com/v1/tracks/{}", name),
        preview_url: None,
    }
}

async fn top_tracks_ok(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Response {
    if bearer(&headers) != Some("Bearer spotify-token") {
        return (StatusCode::BAD_REQUEST, "missing bearer token").into_response();
    }
    if q.get("limit").map(String::as_str) != Some("2")
        || q.get("time_range").map(String::as_str) != Some("short_term")
    {
        return (StatusCode::BAD_REQUEST, format!("unexpected query {q:?}")).into_response();
    }

    Json(json!({
        "items": [
            {
                "id": "t1",
                "name": "Despacito",
                "artists": [
                    { "id": "a1", "name": "Luis Fonsi" },
                    { "id": "a2", "name": "Daddy Yankee" }
                ],
                "uri": "spotify:track:t1",
                "href": "https://api.spotify.com/v1/tracks/t1",
                "preview_url": null
            },
            {
                "id": null,
                "name": "Local File",
                "artists": [{ "id": null, "name": "Someone" }],
                "uri": "spotify:local:x",
                "href": null,
                "preview_url": null
            }
        ]
    }))
    .into_response()
}

#[tokio::test]
async fn test_top_tracks_are_mapped_from_json() {
    let base = serve(Router::new().route("/v1/me/top/tracks", get(top_tracks_ok))).await;
    let spotify = SpotifyClient::new(test_client(), spotify_config(&base));

    let tracks = spotify.top_tracks(2, TimeRange::ShortTerm).await.unwrap();

    assert_eq!(tracks.len(), 2);
    assert_eq!(
        tracks[0].display_name(),
        "Despacito by Luis Fonsi, Daddy Yankee"
    );
    assert_eq!(tracks[0].id, "t1");
    assert_eq!(tracks[1].id, "");
    assert_eq!(tracks[1].href, "");
    assert_eq!(tracks[1].artists[0].id, "");
}

#[tokio::test]
async fn test_top_tracks_unauthorized() {
    let app = Router::new().route(
        "/v1/me/top/tracks",
        get(|| async { (StatusCode::UNAUTHORIZED, "token expired") }),
    );
    let base = serve(app).await;

    let result = get_top_tracks(
        &test_client(),
        &spotify_config(&base),
        50,
        TimeRange::LongTerm,
    )
    .await;

    assert!(matches!(result, Err(Error::UpstreamAuth)));
}

#[tokio::test]
async fn test_top_tracks_other_status_keeps_body() {
    let app = Router::new().route(
        "/v1/me/top/tracks",
        get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let base = serve(app).await;

    let result = get_top_tracks(
        &test_client(),
        &spotify_config(&base),
        50,
        TimeRange::LongTerm,
    )
    .await;

    match result {
        Err(Error::UpstreamApi { status, body }) => {
            assert_eq!(status.as_u16(), 429);
            assert_eq!(body, "slow down");
        }
        other => panic!("expected UpstreamApi, got {other:?}"),
    }
}

#[tokio::test]
async fn test_top_tracks_malformed_body_is_transport_error() {
    let app = Router::new().route("/v1/me/top/tracks", get(|| async { "not json" }));
    let base = serve(app).await;

    let result = get_top_tracks(
        &test_client(),
        &spotify_config(&base),
        50,
        TimeRange::LongTerm,
    )
    .await;

    assert!(matches!(result, Err(Error::UpstreamTransport(_))));
}

#[tokio::test]
async fn test_genius_search_error_status() {
    let app = Router::new().route(
        "/search",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(app).await;
    let genius = GeniusClient::new(test_client(), genius_config(&base));

    let result = genius.search("Hello Adele").await;

    match result {
        Err(Error::Provider(msg)) => {
            assert!(msg.contains("search"), "{msg}");
            assert!(msg.contains("500"), "{msg}");
            assert!(msg.contains("boom"), "{msg}");
        }
        other => panic!("expected Provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_genius_search_without_response_object_is_empty() {
    let app = Router::new().route(
        "/search",
        get(|| async { Json(json!({ "meta": { "status": 200 } })) }),
    );
    let base = serve(app).await;
    let genius = GeniusClient::new(test_client(), genius_config(&base));

    let hits = genius.search("Hello Adele").await.unwrap();

    assert!(hits.is_empty());
}

#[tokio::test]
async fn test_genius_page_not_found() {
    let base = serve(Router::new()).await;
    let genius = GeniusClient::new(test_client(), genius_config(&base));

    let result = genius.fetch_document(&format!("{base}/missing-lyrics")).await;

    match result {
        Err(Error::Provider(msg)) => {
            assert!(msg.contains("page"), "{msg}");
            assert!(msg.contains("404"), "{msg}");
        }
        other => panic!("expected Provider error, got {other:?}"),
    }
}

async fn genius_search(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Response {
    if bearer(&headers) != Some("Bearer genius-token") {
        return (StatusCode::UNAUTHORIZED, "missing bearer token").into_response();
    }
    if q.get("q").map(String::as_str) != Some("Roar Katy Perry") {
        return Json(json!({ "response": { "hits": [] } })).into_response();
    }

    Json(json!({
        "response": {
            "hits": [
                { "result": { "title": "Roar", "primary_artist": { "name": "Katy Perry" }, "url": null, "path": "/Katy-perry-roar-lyrics" } }
            ]
        }
    }))
    .into_response()
}

async fn roar_page(headers: HeaderMap) -> Response {
    // Song pages are fetched without credentials
    if headers.contains_key(header::AUTHORIZATION) {
        return (StatusCode::BAD_REQUEST, "unexpected credentials").into_response();
    }
    r#"<html><body><div data-lyrics-container="true">I used to bite my tongue<br>and hold my breath</div></body></html>"#
        .into_response()
}

#[tokio::test]
async fn test_genius_provider_resolves_lyrics_over_http() {
    let app = Router::new()
        .route("/search", get(genius_search))
        .route("/Katy-perry-roar-lyrics", get(roar_page));
    let base = serve(app).await;
    let provider = GeniusProvider::from_config(test_client(), genius_config(&base));

    let found = provider
        .resolve_lyrics(&create_test_track("Roar", "Katy Perry"))
        .await
        .unwrap();
    let missing = provider
        .resolve_lyrics(&create_test_track("Unknown", "Nobody"))
        .await
        .unwrap();

    assert_eq!(
        found.as_deref(),
        Some("I used to bite my tongue\nand hold my breath")
    );
    assert!(missing.is_none());
}
