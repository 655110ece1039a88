use sea_orm::DatabaseConnection;

/// Shared handler state: the connection pool is the only shared mutable
/// resource in the process.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}
