#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! `HttpApodFeed` + `GalleryLoader` against a `wiremock` server.

use std::time::Duration;

use apod_gallery_core::{
    ApodFeed, CardMedia, FeedOptions, FeedPayload, GalleryError, GalleryLoader, HttpApodFeed,
    EMPTY_MESSAGE, ERROR_MESSAGE,
};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_FEED: &str = r#"[
    {
        "title": "The Andromeda Galaxy",
        "date": "2024-10-01",
        "explanation": "Our nearest large galactic neighbour.",
        "media_type": "image",
        "url": "https://apod.nasa.gov/apod/image/m31.jpg"
    },
    {
        "title": "Starship Launch",
        "date": "2024-10-02",
        "explanation": "A replay of the launch.",
        "media_type": "video",
        "url": "https://www.youtube.com/embed/xyz"
    },
    {
        "title": "Interactive Sky",
        "date": "2024-10-03",
        "explanation": "Explore the sky.",
        "media_type": "other",
        "url": "https://apod.nasa.gov/apod/sky.html"
    }
]"#;

/// 启动一个对 `GET /data.json` 固定应答的 mock 服务
async fn serve(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn feed_for(base_url: &str) -> HttpApodFeed {
    HttpApodFeed::new(FeedOptions {
        url: format!("{base_url}/data.json"),
        timeout: Duration::from_secs(5),
        system_proxy: false,
        ..FeedOptions::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_sample_feed() {
    let server = serve(200, SAMPLE_FEED).await;
    let payload = feed_for(&server.uri()).fetch().await.unwrap();

    let FeedPayload::Entries(entries) = payload else {
        panic!("expected entries");
    };
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].title, "The Andromeda Galaxy");
    assert_eq!(entries[2].media_type, "other");
}

#[tokio::test]
async fn test_gallery_renders_sample_feed() {
    let server = serve(200, SAMPLE_FEED).await;
    let feed = feed_for(&server.uri());
    let mut gallery = GalleryLoader::new();

    assert!(gallery.load_from_trigger(&feed).await);

    let cards = gallery.cards();
    assert_eq!(cards.len(), 3);
    assert!(matches!(
        &cards[0].media,
        Some(CardMedia::Image { src, alt })
            if src == "https://apod.nasa.gov/apod/image/m31.jpg" && alt == "The Andromeda Galaxy"
    ));
    assert!(matches!(
        &cards[1].media,
        Some(CardMedia::Video { width: 560, height: 315, .. })
    ));
    assert!(cards[2].media.is_none());
    assert_eq!(cards[2].date_line, "Date: 2024-10-03");
    assert!(!gallery.trigger().unwrap().disabled);
}

#[tokio::test]
async fn test_empty_array_is_empty_state() {
    let server = serve(200, "[]").await;
    let mut gallery = GalleryLoader::new();
    gallery.load(&feed_for(&server.uri())).await;

    assert_eq!(gallery.view().message(), Some(EMPTY_MESSAGE));
    assert!(gallery.cards().is_empty());
}

#[tokio::test]
async fn test_non_array_is_empty_state() {
    let server = serve(200, r#"{"error":"rate limited"}"#).await;
    let payload = feed_for(&server.uri()).fetch().await.unwrap();
    assert_eq!(payload, FeedPayload::Empty);
}

#[tokio::test]
async fn test_error_status_with_json_body_is_empty_state() {
    let server = serve(503, r#"{"error":"rate limited"}"#).await;
    let feed = feed_for(&server.uri());

    assert_eq!(feed.fetch().await, Ok(FeedPayload::Empty));

    let mut gallery = GalleryLoader::new();
    gallery.load(&feed).await;
    assert_eq!(gallery.view().message(), Some(EMPTY_MESSAGE));
}

#[tokio::test]
async fn test_error_status_with_entries_still_renders() {
    let server = serve(404, SAMPLE_FEED).await;
    let payload = feed_for(&server.uri()).fetch().await.unwrap();
    assert_eq!(payload.len(), 3);
}

#[tokio::test]
async fn test_error_status_without_json_body() {
    let server = serve(500, "oops").await;
    let result = feed_for(&server.uri()).fetch().await;
    assert_eq!(result, Err(GalleryError::HttpStatus { status: 500 }));
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let server = serve(200, "<html>not json</html>").await;
    let mut gallery = GalleryLoader::new();
    let feed = feed_for(&server.uri());

    assert!(matches!(
        feed.fetch().await,
        Err(GalleryError::ParseError(_))
    ));

    gallery.load(&feed).await;
    assert_eq!(gallery.view().message(), Some(ERROR_MESSAGE));
}

#[tokio::test]
async fn test_connection_refused_is_contained() {
    // 绑定后立即释放端口，得到一个无人监听的地址
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let feed = feed_for(&format!("http://{addr}"));
    assert!(matches!(
        feed.fetch().await,
        Err(GalleryError::NetworkError(_))
    ));

    let mut gallery = GalleryLoader::new();
    gallery.load(&feed).await;
    assert_eq!(gallery.view().message(), Some(ERROR_MESSAGE));
    assert!(!gallery.trigger().unwrap().disabled);
}
