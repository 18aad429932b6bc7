use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use task_service::domain::task::models::Task;
use task_service::domain::task::models::TaskId;
use task_service::domain::task::ports::TaskRepository;
use task_service::domain::task::service::TaskService;
use task_service::domain::user::models::User;
use task_service::domain::user::models::UserId;
use task_service::domain::user::models::Username;
use task_service::domain::user::ports::UserRepository;
use task_service::domain::user::service::UserService;
use task_service::inbound::http::router::create_router;
use task_service::task::errors::TaskError;
use task_service::user::errors::UserError;

const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server on a random port, backed by
/// in-memory stores.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

/// In-memory user store enforcing username uniqueness.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }
}

/// In-memory task store with owner-filtered, silently-missing writes.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: Mutex<Vec<Task>>,
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn list_for_owner(&self, owner_id: &UserId) -> Result<Vec<Task>, TaskError> {
        let tasks = self.tasks.lock().unwrap();
        let mut owned: Vec<Task> = tasks
            .iter()
            .filter(|t| &t.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn set_completed(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
        completed: bool,
    ) -> Result<(), TaskError> {
        let mut tasks = self.tasks.lock().unwrap();
        if let Some(task) = tasks
            .iter_mut()
            .find(|t| &t.id == task_id && &t.owner_id == owner_id)
        {
            task.completed = completed;
        }
        Ok(())
    }

    async fn delete(&self, owner_id: &UserId, task_id: &TaskId) -> Result<(), TaskError> {
        let mut tasks = self.tasks.lock().unwrap();
        tasks.retain(|t| !(&t.id == task_id && &t.owner_id == owner_id));
        Ok(())
    }
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(InMemoryUserRepository::default());
        let task_repository = Arc::new(InMemoryTaskRepository::default());

        let user_service = Arc::new(UserService::new(user_repository));
        let task_service = Arc::new(TaskService::new(task_repository));

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));

        let router = create_router(user_service, task_service, authenticator);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and log in, returning the bearer token.
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/register")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute register request");
        assert!(response.status().is_success());

        let response = self
            .post("/login")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert!(response.status().is_success());

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }
}
