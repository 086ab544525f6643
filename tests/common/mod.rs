#![allow(dead_code)]

use base64::{Engine as _, engine::general_purpose::STANDARD};
use sqlx::SqlitePool;
use std::{collections::HashMap, sync::Arc};
use url_alias::AppState;
use url_alias::infrastructure::persistence::SqliteAliasRepository;

pub async fn create_test_repository(pool: SqlitePool) -> SqliteAliasRepository {
    SqliteAliasRepository::with_pool(pool).await.unwrap()
}

pub async fn create_test_state(pool: SqlitePool) -> AppState {
    AppState {
        aliases: Arc::new(create_test_repository(pool).await),
    }
}

pub fn test_users() -> HashMap<String, String> {
    HashMap::from([("admin".to_string(), "secret".to_string())])
}

pub fn basic_header(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
}
