#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Canned loopback stand-in for the prediction service. Serves fixed JSON
/// bodies per path and records every requested path in order.
pub struct MockService {
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    pub fn start(routes: Vec<(&str, u16, Value)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture listener");
        let base = format!("http://{}", listener.local_addr().expect("local addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        let table: HashMap<String, (u16, String)> = routes
            .into_iter()
            .map(|(path, status, body)| (path.to_string(), (status, body.to_string())))
            .collect();

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let mut reader = BufReader::new(&stream);
                let mut line = String::new();
                if reader.read_line(&mut line).is_err() {
                    continue;
                }
                let path = line.split_whitespace().nth(1).unwrap_or("/").to_string();
                drain_headers(&mut reader);
                drop(reader);
                seen.lock().expect("request log").push(path.clone());
                match table.get(&path) {
                    Some((status, body)) => respond(&mut stream, *status, body),
                    None => respond(&mut stream, 404, r#"{"detail":"Not found"}"#),
                }
            }
        });

        Self { base, requests }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log").clone()
    }
}

fn drain_headers(reader: &mut BufReader<&TcpStream>) {
    let mut header = String::new();
    while reader.read_line(&mut header).is_ok() {
        if header == "\r\n" || header.is_empty() {
            break;
        }
        header.clear();
    }
}

fn respond(stream: &mut TcpStream, status: u16, body: &str) {
    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

/// A healthy service for user id 3: 82% probability, two ranked reasons,
/// lapsed subscription.
pub fn standard_routes() -> Vec<(&'static str, u16, Value)> {
    vec![
        (
            "/predict/3",
            200,
            serde_json::json!({
                "user_id": 3,
                "churn_probability": 0.82,
                "is_churn_prediction": false,
                "risk_level": "High",
                "actual_status": 1
            }),
        ),
        (
            "/explain/3",
            200,
            serde_json::json!({
                "user_id": 3,
                "risk_score": 0.82,
                "reasons": [
                    {"feature": "Payments", "value": 2, "impact": "High", "message": "Payment failures"},
                    {"feature": "Usage Trend", "value": 0.3, "impact": "Medium", "message": "Declining usage"}
                ]
            }),
        ),
        (
            "/user-stats/3",
            200,
            serde_json::json!({
                "user_id": 3,
                "membership_days": 400,
                "total_transactions": 12,
                "days_to_expire": -5,
                "last_active_date": "2017-03-31"
            }),
        ),
    ]
}

/// A base URL with nothing listening behind it.
pub fn dead_service_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let base = format!("http://{}", listener.local_addr().expect("local addr"));
    drop(listener);
    base
}

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn cmd(&self, api_base: &str) -> Command {
        let mut cmd = Command::cargo_bin("churnlens").expect("churnlens binary");
        cmd.env("HOME", &self.home)
            .env("NO_PROXY", "127.0.0.1,localhost")
            .env("no_proxy", "127.0.0.1,localhost")
            .arg("--api")
            .arg(api_base);
        cmd
    }

    pub fn run_json(&self, api_base: &str, args: &[&str]) -> Value {
        let mut cmd = self.cmd(api_base);
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, api_base: &str, args: &[&str]) -> Value {
        let mut cmd = self.cmd(api_base);
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
