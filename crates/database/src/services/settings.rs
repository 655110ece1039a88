use crate::entities::site_settings;
use crate::error::{ServiceError, ServiceResult};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};
use serde_json::Value as Json;
use uuid::Uuid;

/// Server-side settings, one row per scope. Upserts keep the row unique so
/// every client observes the same configuration.
pub struct SettingsService;

impl SettingsService {
    pub async fn get(db: &DatabaseConnection, scope: &str) -> ServiceResult<site_settings::Model> {
        site_settings::Entity::find()
            .filter(site_settings::Column::Scope.eq(scope))
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("settings scope"))
    }

    pub async fn put(
        db: &DatabaseConnection,
        scope: &str,
        value: Json,
    ) -> ServiceResult<site_settings::Model> {
        if scope.is_empty() {
            return Err(ServiceError::validation("scope must not be empty"));
        }

        let row = site_settings::ActiveModel {
            id: Set(Uuid::new_v4()),
            scope: Set(scope.to_owned()),
            value: Set(value),
        };

        site_settings::Entity::insert(row)
            .on_conflict(
                OnConflict::column(site_settings::Column::Scope)
                    .update_column(site_settings::Column::Value)
                    .to_owned(),
            )
            .exec(db)
            .await?;

        Self::get(db, scope).await
    }
}
