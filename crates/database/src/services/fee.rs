use crate::entities::{classes, fee_structures};
use crate::error::{ServiceError, ServiceResult, on_conflict};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewFeeStructure {
    pub class_id: Uuid,
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct FeeStructureUpdate {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
}

pub struct FeeService;

impl FeeService {
    pub async fn list(
        db: &DatabaseConnection,
        class_id: Option<Uuid>,
    ) -> ServiceResult<Vec<fee_structures::Model>> {
        let mut query = fee_structures::Entity::find();
        if let Some(class_id) = class_id {
            query = query.filter(fee_structures::Column::ClassId.eq(class_id));
        }
        Ok(query.all(db).await?)
    }

    /// Fee names are unique within a class; duplicates are a conflict
    pub async fn create(
        db: &DatabaseConnection,
        input: NewFeeStructure,
    ) -> ServiceResult<fee_structures::Model> {
        if input.amount < 0.0 {
            return Err(ServiceError::validation("fee amount must not be negative"));
        }

        classes::Entity::find_by_id(input.class_id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("class"))?;

        let fee = fee_structures::ActiveModel {
            id: Set(Uuid::new_v4()),
            class_id: Set(input.class_id),
            name: Set(input.name),
            amount: Set(input.amount),
            due_date: Set(input.due_date),
        };

        fee.insert(db)
            .await
            .map_err(|err| on_conflict(err, "a fee with this name already exists for the class"))
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        changes: FeeStructureUpdate,
    ) -> ServiceResult<fee_structures::Model> {
        if let Some(amount) = changes.amount
            && amount < 0.0
        {
            return Err(ServiceError::validation("fee amount must not be negative"));
        }

        let fee = fee_structures::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound("fee structure"))?;

        let mut active: fee_structures::ActiveModel = fee.into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(amount) = changes.amount {
            active.amount = Set(amount);
        }
        if let Some(due_date) = changes.due_date {
            active.due_date = Set(due_date);
        }

        active
            .update(db)
            .await
            .map_err(|err| on_conflict(err, "a fee with this name already exists for the class"))
    }

    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> ServiceResult<()> {
        let result = fee_structures::Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound("fee structure"));
        }
        Ok(())
    }
}
