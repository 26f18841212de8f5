#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tempfile::TempDir;

pub const ALICE_STORE: &str = r#"[{"username":"alice","password":"secret","level":"admin"}]"#;

/// A running server process with its own users file
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub users_file: PathBuf,
    child: Child,
    _dir: TempDir,
}

impl TestServer {
    /// Spawn the server with `users` written to its users file.
    /// `None` leaves the file absent.
    pub async fn start(users: Option<&str>) -> Result<Self> {
        let server = Self::spawn(users)?;
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    fn spawn(users: Option<&str>) -> Result<Self> {
        let dir = tempfile::tempdir().context("failed to create temp dir")?;
        let users_file = dir.path().join("users.json");
        if let Some(contents) = users {
            let mut f = std::fs::File::create(&users_file).context("failed to create users file")?;
            f.write_all(contents.as_bytes())?;
        }

        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_login-api"));
        cmd.env("LOGIN_API_HOST", "127.0.0.1")
            .env("LOGIN_API_PORT", port.to_string())
            .env("LOGIN_API_USERS_FILE", &users_file)
            .current_dir(dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self {
            port,
            base_url,
            users_file,
            child,
            _dir: dir,
        })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a raw body to /api/login
    pub async fn login_raw(&self, body: impl Into<reqwest::Body>) -> Result<reqwest::Response> {
        Ok(reqwest::Client::new()
            .post(self.url("/api/login"))
            .body(body)
            .send()
            .await?)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<reqwest::Response> {
        Ok(reqwest::Client::new()
            .post(self.url("/api/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
