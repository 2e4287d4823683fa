#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::RwLock;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::TokenCodec;
use axum::body::Body;
use axum::http::header;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use category_service::domain::category::errors::CategoryError;
use category_service::domain::category::models::Category;
use category_service::domain::category::models::CategoryId;
use category_service::domain::category::models::CategoryPage;
use category_service::domain::category::models::CategoryQuery;
use category_service::domain::category::models::NewCategory;
use category_service::domain::category::ports::CategoryRepository;
use category_service::domain::category::ports::CategoryServicePort;
use category_service::domain::category::service::CategoryService;
use category_service::domain::user::errors::UserError;
use category_service::domain::user::models::NewUser;
use category_service::domain::user::models::User;
use category_service::domain::user::models::UserId;
use category_service::domain::user::ports::UserRepository;
use category_service::domain::user::ports::UserServicePort;
use category_service::domain::user::service::UserService;
use category_service::inbound::http::router::create_router;
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application backed by in-memory repositories.
pub struct TestApp {
    pub router: Router,
    pub authenticator: Arc<Authenticator>,
    secret: String,
}

impl TestApp {
    pub fn new() -> Self {
        let user_repository = Arc::new(InMemoryUserRepository::new());
        let user_service: Arc<dyn UserServicePort> = Arc::new(UserService::new(user_repository));
        Self::build(user_service)
    }

    /// App whose user lookups always fail, simulating a storage outage.
    pub fn with_failing_user_storage() -> Self {
        let user_repository = Arc::new(FailingUserRepository);
        let user_service: Arc<dyn UserServicePort> = Arc::new(UserService::new(user_repository));
        Self::build(user_service)
    }

    fn build(user_service: Arc<dyn UserServicePort>) -> Self {
        let category_repository = Arc::new(InMemoryCategoryRepository::new());
        let category_service: Arc<dyn CategoryServicePort> =
            Arc::new(CategoryService::new(category_repository));

        let token_codec = TokenCodec::new(TEST_SECRET.as_bytes(), chrono::Duration::minutes(30));
        let authenticator = Arc::new(Authenticator::new(token_codec));

        let router = create_router(
            user_service,
            category_service,
            Arc::clone(&authenticator),
            vec![
                "/api/auth/register".to_string(),
                "/api/auth/login".to_string(),
                "/health".to_string(),
            ],
        );

        Self {
            router,
            authenticator,
            secret: TEST_SECRET.to_string(),
        }
    }

    /// Sign a token for an arbitrary user id with the app's own secret.
    pub fn issue_token(&self, user_id: i64, username: &str) -> String {
        self.authenticator
            .issue_token(Claims::for_user(user_id).with_extra("username", username))
            .expect("Failed to issue token")
    }

    /// Sign an already-expired token with the app's own secret.
    pub fn issue_expired_token(&self, user_id: i64) -> String {
        let codec = TokenCodec::new(self.secret.as_bytes(), chrono::Duration::minutes(-5));
        codec
            .issue(Claims::for_user(user_id))
            .expect("Failed to issue token")
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.request(Method::GET, path, None, None).await
    }

    pub async fn get_authenticated(&self, path: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, path, Some(token), None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, path, None, Some(body)).await
    }

    pub async fn post_authenticated(
        &self,
        path: &str,
        token: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        self.request(Method::POST, path, Some(token), Some(body))
            .await
    }

    pub async fn patch_authenticated(
        &self,
        path: &str,
        token: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        self.request(Method::PATCH, path, Some(token), Some(body))
            .await
    }

    pub async fn delete_authenticated(&self, path: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, path, Some(token), None).await
    }

    /// Send a request with a raw Authorization header value.
    pub async fn get_with_authorization(&self, path: &str, header_value: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header(header::AUTHORIZATION, header_value)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Failed to parse response body")
        };

        (status, body)
    }

    /// Register a user through the API and return the access token.
    pub async fn register_user(&self, username: &str, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/api/auth/register",
                serde_json::json!({
                    "username": username,
                    "email": email,
                    "password": password,
                }),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED, "registration failed: {}", body);
        body["access_token"]
            .as_str()
            .expect("registration returned no token")
            .to_string()
    }
}

/// User store mirroring the Postgres repository's constraint behavior.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.write().unwrap();

        if users
            .values()
            .any(|u| u.username.as_str() == new_user.username.as_str())
        {
            return Err(UserError::UsernameAlreadyExists(
                new_user.username.as_str().to_string(),
            ));
        }
        if users
            .values()
            .any(|u| u.email.as_str() == new_user.email.as_str())
        {
            return Err(UserError::EmailAlreadyExists(
                new_user.email.as_str().to_string(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: UserId(id),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            full_name: new_user.full_name,
            is_active: true,
            created_at: Utc::now(),
        };
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.read().unwrap();
        Ok(users.get(&id.as_i64()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().unwrap();
        Ok(users
            .values()
            .find(|u| u.username.as_str() == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.email.as_str() == email).cloned())
    }
}

/// User store where every operation fails.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create(&self, _new_user: NewUser) -> Result<User, UserError> {
        Err(UserError::DatabaseError("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, UserError> {
        Err(UserError::DatabaseError("connection refused".to_string()))
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserError> {
        Err(UserError::DatabaseError("connection refused".to_string()))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserError> {
        Err(UserError::DatabaseError("connection refused".to_string()))
    }
}

/// Category store mirroring the Postgres repository's behavior, including
/// the name-sorted, case-insensitively filtered paging.
pub struct InMemoryCategoryRepository {
    categories: RwLock<HashMap<i64, Category>>,
    next_id: AtomicI64,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            categories: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, new_category: NewCategory) -> Result<Category, CategoryError> {
        let mut categories = self.categories.write().unwrap();

        if categories
            .values()
            .any(|c| c.name.as_str() == new_category.name.as_str())
        {
            return Err(CategoryError::NameAlreadyExists(
                new_category.name.as_str().to_string(),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let category = Category {
            id: CategoryId(id),
            name: new_category.name,
            description: new_category.description,
            created_by: new_category.created_by,
            created_at: now,
            updated_at: now,
        };
        categories.insert(id, category.clone());

        Ok(category)
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError> {
        let categories = self.categories.read().unwrap();
        Ok(categories.get(&id.as_i64()).cloned())
    }

    async fn find_page(&self, query: &CategoryQuery) -> Result<CategoryPage, CategoryError> {
        let categories = self.categories.read().unwrap();

        let mut matching: Vec<Category> = categories
            .values()
            .filter(|c| match query.name.as_deref() {
                Some(needle) => c
                    .name
                    .as_str()
                    .to_lowercase()
                    .contains(&needle.to_lowercase()),
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));

        let total_items = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.per_page as usize)
            .collect();

        Ok(CategoryPage {
            categories: page,
            total_items,
        })
    }

    async fn update(&self, category: Category) -> Result<Category, CategoryError> {
        let mut categories = self.categories.write().unwrap();

        if !categories.contains_key(&category.id.as_i64()) {
            return Err(CategoryError::NotFound(category.id));
        }
        if categories
            .values()
            .any(|c| c.id != category.id && c.name.as_str() == category.name.as_str())
        {
            return Err(CategoryError::NameAlreadyExists(
                category.name.as_str().to_string(),
            ));
        }

        let mut updated = category;
        updated.updated_at = Utc::now();
        categories.insert(updated.id.as_i64(), updated.clone());

        Ok(updated)
    }

    async fn delete(&self, id: CategoryId) -> Result<(), CategoryError> {
        let mut categories = self.categories.write().unwrap();
        match categories.remove(&id.as_i64()) {
            Some(_) => Ok(()),
            None => Err(CategoryError::NotFound(id)),
        }
    }
}
