//! Common test utilities for account-service integration tests.

#![allow(dead_code)]

use account_service::config::AccountConfig;
use account_service::startup::Application;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,account_service=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Running service bound to a random local port.
pub struct TestApp {
    pub address: String,
    pub client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        init_tracing();

        let app = Application::build(AccountConfig::for_tests())
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server by polling the health endpoint
        let client = Client::new();
        for _ in 0..50 {
            if client
                .get(format!("{}/health", address))
                .send()
                .await
                .is_ok()
            {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp { address, client }
    }

    pub async fn create_account(&self, cpf: &str, name: &str) -> Response {
        self.client
            .post(format!("{}/account", self.address))
            .json(&json!({ "cpf": cpf, "name": name }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_account(&self, cpf: &str) -> Response {
        self.client
            .get(format!("{}/account", self.address))
            .header("cpf", cpf)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn update_account(&self, cpf: &str, name: &str) -> Response {
        self.client
            .put(format!("{}/account", self.address))
            .header("cpf", cpf)
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn deposit(&self, cpf: &str, description: &str, amount: Value) -> Response {
        self.client
            .post(format!("{}/deposit", self.address))
            .header("cpf", cpf)
            .json(&json!({ "description": description, "amount": amount }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn withdraw(&self, cpf: &str, amount: Value) -> Response {
        self.client
            .post(format!("{}/withdraw", self.address))
            .header("cpf", cpf)
            .json(&json!({ "amount": amount }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn statement(&self, cpf: &str) -> Response {
        self.client
            .get(format!("{}/statement", self.address))
            .header("cpf", cpf)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn statement_by_date(&self, cpf: &str, date: &str) -> Response {
        self.client
            .get(format!("{}/statement/date", self.address))
            .query(&[("date", date)])
            .header("cpf", cpf)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn balance(&self, cpf: &str) -> Response {
        self.client
            .get(format!("{}/balance", self.address))
            .header("cpf", cpf)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Parse a JSON response body.
pub async fn body(response: Response) -> Value {
    response.json().await.expect("Failed to parse response")
}
