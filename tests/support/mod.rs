// Shared bootstrap for the decode API and a fixture server that hosts test images.
use axum::{
    Router,
    body::Bytes,
    http::{StatusCode, header},
    routing::{MethodRouter, get},
};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::{
    io::Cursor,
    sync::{Arc, OnceLock},
    time::Duration,
};

pub struct TestServers {
    // Base URL of the decode API under test.
    pub api_url: String,
    // Base URL of the image fixture server.
    pub fixture_url: String,
}

static SERVERS: OnceLock<TestServers> = OnceLock::new();

// Start both servers once per test binary and return their base URLs.
pub fn ensure_servers() -> &'static TestServers {
    SERVERS.get_or_init(|| {
        let published = Arc::new(OnceLock::<(String, String)>::new());
        let published_thread = Arc::clone(&published);

        // Own OS thread and runtime so the servers outlive each `#[tokio::test]` runtime.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let api_listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral api port");
                let fixture_listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral fixture port");
                let api_addr = api_listener.local_addr().expect("get api addr");
                let fixture_addr = fixture_listener.local_addr().expect("get fixture addr");

                tokio::spawn(async move {
                    axum::serve(fixture_listener, fixture_app())
                        .await
                        .expect("fixture server failed");
                });

                let _ = published_thread.set((
                    format!("http://{api_addr}"),
                    format!("http://{fixture_addr}"),
                ));
                qr_decode_server::run(api_listener)
                    .await
                    .expect("server failed");
            });
        });

        let (api_url, fixture_url) = wait_for_published(&published);
        wait_for_readiness(&api_url);
        wait_for_readiness(&fixture_url);

        TestServers {
            api_url,
            fixture_url,
        }
    })
}

fn wait_for_published(published: &OnceLock<(String, String)>) -> (String, String) {
    loop {
        if let Some(urls) = published.get() {
            return urls.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn wait_for_readiness(base_url: &str) {
    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server at {base_url} did not become ready in time");
}

fn fixture_app() -> Router {
    Router::new()
        .route("/hello.png", serve_png(qr_png("HELLO")))
        .route("/world.png", serve_png(qr_png("WORLD")))
        .route("/blank.png", serve_png(blank_png()))
        .route("/page.html", get(|| async { "<html>no image here</html>" }))
        .route(
            "/missing.png",
            get(|| async { (StatusCode::NOT_FOUND, "not found") }),
        )
}

fn serve_png(bytes: Bytes) -> MethodRouter {
    get(move || {
        let bytes = bytes.clone();
        async move { ([(header::CONTENT_TYPE, "image/png")], bytes) }
    })
}

fn qr_png(text: &str) -> Bytes {
    let qr = qrism::QRBuilder::new(text.as_bytes())
        .build()
        .expect("qr should build");
    encode_png(DynamicImage::ImageRgb8(qr.to_image(4)))
}

fn blank_png() -> Bytes {
    encode_png(DynamicImage::ImageRgb8(RgbImage::from_pixel(
        160,
        160,
        Rgb([255, 255, 255]),
    )))
}

fn encode_png(img: DynamicImage) -> Bytes {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .expect("png should encode");
    Bytes::from(buf.into_inner())
}
