use serde_json::{Value, json};

use roster_adapters::InMemoryUserStore;
use roster_service::UserService;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service on an ephemeral port, backed by the in-memory store.
    pub async fn spawn() -> Self {
        let store = InMemoryUserStore::new();
        let service = UserService::new(store);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().expect("listener address"));

        tokio::spawn(service.run(listener));

        Self {
            address,
            client: reqwest::Client::new(),
        }
    }

    pub async fn post_user(&self, name: &str, email: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/users", self.address))
            .json(&json!({ "name": name, "email": email }))
            .send()
            .await
            .expect("failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("failed to execute request")
    }
}

pub async fn json_body(response: reqwest::Response) -> Value {
    response.json().await.expect("response was not valid JSON")
}
