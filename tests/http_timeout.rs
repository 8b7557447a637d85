use rquests::options::{proxy, timeout};
use rquests::{ErrorKind, Requests, RquestsError};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_timeout_expires_on_slow_server() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = Requests::new()
        .get(&format!("{}/slow", server.uri()), &[timeout(1)])
        .await
        .expect_err("request should time out");
    assert!(matches!(err, RquestsError::Timeout));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_zero_timeout_waits_for_response() {
    if !can_bind_localhost() {
        return;
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_millis(1200)),
        )
        .mount(&server)
        .await;

    let response = Requests::new()
        .get(&format!("{}/slow", server.uri()), &[timeout(0)])
        .await
        .expect("request should wait");
    assert_eq!(response.content, "late");
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_unreachable_host_is_reported() {
    if !can_bind_localhost() {
        return;
    }

    let err = Requests::new()
        .get(&closed_port_url(), &[timeout(5)])
        .await
        .expect_err("connection should fail");
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_unreachable_proxy_is_reported() {
    if !can_bind_localhost() {
        return;
    }

    let proxy_url = closed_port_url();
    let err = Requests::new()
        .get("http://example.invalid/", &[proxy(proxy_url), timeout(5)])
        .await
        .expect_err("proxy connection should fail");
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_invalid_proxy_is_reported_before_dispatch() {
    let err = Requests::new()
        .get("http://example.invalid/", &[proxy("::not a url::")])
        .await
        .expect_err("invalid proxy");
    assert!(matches!(err, RquestsError::Proxy(_)));
}
