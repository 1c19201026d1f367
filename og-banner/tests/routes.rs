use axum::{
    body::{self, Body},
    http::{header, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use sylphx_og_banner::router;
use tower::ServiceExt as _;

/// `🚀`, percent-encoded.
const ROCKET: &str = "%F0%9F%9A%80";

struct TestResponse {
    status: StatusCode,
    content_type: String,
    body: String,
}

async fn get(uri: &str) -> TestResponse {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn send(request: Request<Body>) -> TestResponse {
    let response = router().oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

fn demo_query() -> String {
    format!("title=Demo&tagline=Hello&features=Fast,Safe&gradient=667eea,764ba2&icon={ROCKET}")
}

#[tokio::test]
async fn banner_renders_all_fields() {
    let response = get(&format!("/banner?{}", demo_query())).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.starts_with("text/html"));
    for needle in ["Demo", "Hello", "🚀", "667eea", "764ba2", "Fast", "Safe"] {
        assert!(response.body.contains(needle), "missing {needle}");
    }
}

#[tokio::test]
async fn banner_is_deterministic() {
    let uri = format!("/banner?{}&theme=tech&highlight=New", demo_query());
    assert_eq!(get(&uri).await.body, get(&uri).await.body);
}

#[tokio::test]
async fn default_github_footer() {
    let response = get(&format!(
        "/banner?title=MyProject&tagline=t&features=a&gradient=000000,ffffff&icon={ROCKET}"
    ))
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("<div class=\"github\">github.com/SylphxAI/myproject</div>"));
}

#[tokio::test]
async fn explicit_github_footer() {
    let response = get(&format!(
        "/banner?{}&github=github.com%2Fexample%2Fdemo",
        demo_query()
    ))
    .await;

    assert!(response
        .body
        .contains("<div class=\"github\">github.com/example/demo</div>"));
}

#[tokio::test]
async fn hash_prefixed_colours_are_normalised() {
    let response = get(&format!(
        "/banner?title=Demo&tagline=Hello&features=Fast&gradient=%23667eea,%20%23764ba2&icon={ROCKET}"
    ))
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("#667eea 0%"));
    assert!(response.body.contains("#764ba2 100%"));
    assert!(!response.body.contains("##"));
}

#[tokio::test]
async fn missing_icon_is_rejected() {
    let response =
        get("/banner?title=Demo&tagline=Hello&features=Fast,Safe&gradient=667eea,764ba2").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.content_type.starts_with("text/plain"));
    assert!(response.body.contains("icon"));
    assert_eq!(
        response.body,
        "Missing required parameters: title, tagline, features, gradient, icon"
    );
}

#[tokio::test]
async fn empty_required_parameter_counts_as_missing() {
    let response = get(&format!(
        "/banner?title=&tagline=Hello&features=Fast&gradient=667eea,764ba2&icon={ROCKET}"
    ))
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn five_features_are_rejected() {
    let response = get(&format!(
        "/banner?title=Demo&tagline=Hello&features=A,B,C,D,E&gradient=667eea,764ba2&icon={ROCKET}"
    ))
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "Maximum 4 features allowed");
}

#[tokio::test]
async fn unknown_theme_lists_every_theme() {
    let response = get(&format!("/banner?{}&theme=nonexistent", demo_query())).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    for key in ["modern", "minimal", "vibrant", "gradient", "glass", "tech"] {
        assert!(response.body.contains(key), "missing {key}");
    }
}

#[tokio::test]
async fn every_theme_renders() {
    for key in ["modern", "minimal", "vibrant", "gradient", "glass", "tech"] {
        let response = get(&format!("/banner?{}&theme={key}", demo_query())).await;
        assert_eq!(response.status, StatusCode::OK, "theme {key}");
        assert!(response.body.contains("667eea"), "theme {key}");
    }
}

#[tokio::test]
async fn blank_features_and_bad_colours_still_render() {
    // Only absence is an error; junk goes straight through.
    let response = get(&format!(
        "/banner?title=Demo&tagline=Hello&features=%20&gradient=nothex&icon={ROCKET}"
    ))
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .body
        .contains("<div class=\"feature-icon\">⚡</div><span></span>"));
    assert!(response.body.contains("#nothex"));
}

#[tokio::test]
async fn user_text_is_escaped() {
    let response = get(&format!(
        "/banner?title=%3Cb%3Ebold%3C%2Fb%3E&tagline=Hello&features=Fast&gradient=667eea,764ba2&icon={ROCKET}"
    ))
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(!response.body.contains("<b>"));
}

#[tokio::test]
async fn landing_page_links_every_theme() {
    let response = get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.starts_with("text/html"));
    for name in ["Modern", "Minimal", "Vibrant", "Gradient", "Glass", "Tech"] {
        assert!(response.body.contains(&format!("<h3>{name}</h3>")));
    }
    assert!(response.body.contains("theme=glass"));
}

#[tokio::test]
async fn repeated_key_keeps_first_value() {
    let response = get(&format!("/banner?title=Demo&title=Other&{}", demo_query())).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<h1>Demo</h1>"));
    assert!(!response.body.contains("Other"));
}

#[tokio::test]
async fn repeated_theme_uses_first_value() {
    let response = get(&format!("/banner?{}&theme=nonexistent&theme=glass", demo_query())).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.starts_with("Invalid theme."));
}

#[tokio::test]
async fn banner_answers_post() {
    let request = Request::post(format!("/banner?{}", demo_query()))
        .body(Body::empty())
        .unwrap();
    let response = send(request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<h1>Demo</h1>"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = get("/favicon.ico").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, "Not Found");
}
