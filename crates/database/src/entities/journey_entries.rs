use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Milestones on the institution's "our journey" timeline page
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "journey_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub year: i16,
    pub title: String,
    pub description: String,
    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
