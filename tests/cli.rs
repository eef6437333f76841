use assert_cmd::Command;
use axum::http::{HeaderValue, StatusCode};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use predicates::prelude::*;
use serde_json::json;

fn deploy_verify() -> Command {
    Command::cargo_bin("deploy-verify").unwrap()
}

/// Serve `app` on an ephemeral port from a background runtime and return its base URL.
fn spawn_service(app: Router) -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}", rx.recv().unwrap())
}

fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[test]
fn missing_url_is_a_usage_error() {
    deploy_verify()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("TEST:").not());
}

#[test]
fn malformed_url_is_rejected_before_running() {
    deploy_verify()
        .args(["--url", "not a url"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn healthy_deployment_exits_zero() {
    let app = Router::new()
        .route(
            "/health",
            get(|| async { Json(json!({ "status": "ok" })) }).options(|| async { StatusCode::NO_CONTENT }),
        )
        .route("/docs", get(|| async { Html("<html><title>Swagger UI</title></html>") }))
        .route("/users", get(|| async { StatusCode::UNAUTHORIZED }));
    let base = spawn_service(Router::new().nest("/api/v1", app));

    deploy_verify()
        .args(["--url", &format!("{base}/api/v1/")])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Base URL:  {base}/api/v1\n")))
        .stdout(predicate::str::contains(format!("Testing: OPTIONS {base}/api/v1/health")))
        .stdout(predicate::str::contains("Total: 4/4 tests passed"))
        .stdout(predicate::str::contains("All tests passed! Deployment is successful!"));
}

#[test]
fn open_users_endpoint_fails_the_run() {
    let app = Router::new()
        .route(
            "/health",
            get(|| async { Json(json!({ "status": "ok" })) }).options(|| async {
                (
                    [("access-control-allow-origin", HeaderValue::from_static("*"))],
                    StatusCode::OK,
                )
            }),
        )
        .route("/docs", get(|| async { "openapi: 3.0.0" }))
        .route("/users", get(|| async { Json(json!([])) }));
    let base = spawn_service(app);

    deploy_verify()
        .args(["--url", &base])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Expected 401 Unauthorized, got 200"))
        .stdout(predicate::str::contains("Total: 3/4 tests passed"))
        .stdout(predicate::str::contains("1 test(s) failed! Deployment may have issues."));
}

#[test]
fn unreachable_host_fails_every_check_without_crashing() {
    let output = deploy_verify()
        .args(["--url", &closed_port_url()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Total: 0/4 tests passed"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.matches("FAIL: Request failed:").count(), 4);

    let order: Vec<usize> = [
        "TEST: Health Endpoint",
        "TEST: API Documentation",
        "TEST: Protected Endpoints",
        "TEST: CORS Headers",
    ]
    .iter()
    .map(|h| stdout.find(h).unwrap())
    .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
}
