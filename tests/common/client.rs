use account_auth::{
    config::EnvConfig,
    db::postgres_service::PostgresService,
    types::user::DBUserCreate,
    utils::token::hash_password,
};
use actix_web::{web, App};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub config: EnvConfig,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient {
            db,
            config: super::get_test_config(),
        }
    }

    #[allow(dead_code)]
    pub fn with_config(db: Arc<PostgresService>, config: EnvConfig) -> Self {
        TestClient { db, config }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.config.clone()))
            .configure(account_auth::routes::configure_routes)
    }

    /// Insert a user directly, bypassing the register handler.
    #[allow(dead_code)]
    pub async fn create_test_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
        is_active: bool,
    ) -> Uuid {
        let hash = hash_password(password).expect("Failed to hash password");
        self.db
            .create_user(DBUserCreate {
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                email: email.to_string(),
                username: username.to_string(),
                password: hash,
                is_active,
            })
            .await
            .expect("Failed to create test user")
    }
}
