//! Requests sent through a transport that echoes what it received.

use reqwest::header::{HeaderMap, COOKIE};
use rquests::http::TransportResponse;
use rquests::options::{cookies, data, form, headers, options, params, proxy, timeout};
use rquests::{OutgoingRequest, Requests, Result, RquestsError, Transport};
use serde_json::{json, Value};
use std::time::Duration;

#[derive(Clone, Copy, Default)]
struct EchoTransport;

impl Transport for EchoTransport {
    async fn send(&self, request: OutgoingRequest) -> Result<TransportResponse> {
        let wire = request.wire_headers()?;
        let echoed = json!({
            "method": request.method.as_str(),
            "url": request.url.as_str(),
            "query": request.url.query(),
            "header": wire.get("x").and_then(|v| v.to_str().ok()),
            "cookie": wire.get(COOKIE).and_then(|v| v.to_str().ok()),
            "body": String::from_utf8_lossy(&request.body),
            "proxy": request.proxy.as_ref().map(|p| p.as_str()),
            "timeout": request.timeout.map(|t| t.as_secs()),
        });
        Ok(TransportResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: serde_json::to_vec(&echoed)?,
        })
    }
}

fn bag(value: Value) -> rquests::OptionBag {
    match value {
        Value::Object(map) => map,
        _ => panic!("bag must be an object"),
    }
}

#[tokio::test]
async fn test_echo_matches_configuration() {
    let requests = Requests::with_transport(EchoTransport);
    let response = requests
        .request(
            "Post",
            "http://h/p",
            &[
                params([("q", "x")]),
                headers([("X", "1")]),
                cookies([("user", "solos")]),
                form([("a", "1")]),
                proxy("http://127.0.0.1:3128"),
                timeout(7),
            ],
        )
        .await
        .expect("echo");

    let echoed: Value = response.json().expect("json body");
    assert_eq!(echoed["method"], "Post");
    assert_eq!(echoed["url"], "http://h/p?q=x");
    assert_eq!(echoed["query"], "q=x");
    assert_eq!(echoed["header"], "1");
    assert_eq!(echoed["cookie"], "user=solos");
    assert_eq!(echoed["body"], "a=1");
    assert_eq!(echoed["proxy"], "http://127.0.0.1:3128/");
    assert_eq!(echoed["timeout"], 7);
}

#[tokio::test]
async fn test_options_then_timeout_keeps_later_value() {
    let requests = Requests::with_transport(EchoTransport);

    let request = requests
        .build_request("GET", "http://h/p", &[options(bag(json!({"timeout": 5}))), timeout(10)])
        .expect("build");
    assert_eq!(request.timeout, Some(Duration::from_secs(10)));

    let response = requests
        .get("http://h/p", &[form([("a", "1")]), data([("b", "2")])])
        .await
        .expect("echo");
    let echoed: Value = response.json().expect("json body");
    assert_eq!(echoed["body"], r#"{"b":"2"}"#);
}

#[tokio::test]
async fn test_no_timeout_means_no_deadline() {
    let requests = Requests::with_transport(EchoTransport);
    let response = requests.get("http://h/p", &[]).await.expect("echo");
    let echoed: Value = response.json().expect("json body");
    assert!(echoed["timeout"].is_null());
    assert!(echoed["proxy"].is_null());
    assert_eq!(echoed["body"], "");
}

#[tokio::test]
async fn test_wrong_typed_option_fails_the_call() {
    let requests = Requests::with_transport(EchoTransport);
    let err = requests
        .get("http://h/p", &[options(bag(json!({"headers": "X: 1"})))])
        .await
        .expect_err("bad option");
    assert!(matches!(err, RquestsError::Configurator(_)));
}
