#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tempfile::TempDir;

pub const JWT_SECRET: &str = "integration-test-secret";
pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "password123";

/// A server process with its own data directory, killed on drop
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub data_dir: TempDir,
    child: Child,
}

impl TestServer {
    fn spawn(cards: &Value) -> Result<Self> {
        let data_dir = tempfile::tempdir().context("failed to create data dir")?;
        let cards_file = data_dir.path().join("cards.json");
        let users_file = data_dir.path().join("users.json");

        std::fs::write(&cards_file, serde_json::to_string_pretty(cards)?)?;
        std::fs::write(
            &users_file,
            serde_json::to_string(&json!([{ "username": USERNAME, "password": PASSWORD }]))?,
        )?;

        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let child = Command::new(env!("CARGO_BIN_EXE_card-game-api"))
            .env("PORT", port.to_string())
            .env("JWT_SECRET", JWT_SECRET)
            .env("CARDS_FILE", &cards_file)
            .env("USERS_FILE", &users_file)
            .env("APP_ENV", "development")
            .env("RUST_LOG", "warn")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .context("failed to spawn server binary")?;

        Ok(Self { port, base_url, data_dir, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = client.get(&self.base_url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn cards_file(&self) -> PathBuf {
        self.data_dir.path().join("cards.json")
    }

    /// Fetch a token with the seeded credentials
    pub async fn token(&self, client: &reqwest::Client) -> Result<String> {
        let body: Value = client
            .post(self.url("/getToken"))
            .json(&json!({ "username": USERNAME, "password": PASSWORD }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        body["token"]
            .as_str()
            .map(str::to_owned)
            .context("token missing from response")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Start a server whose cards file holds `cards`
pub async fn start_server(cards: Value) -> Result<TestServer> {
    let server = TestServer::spawn(&cards)?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}
