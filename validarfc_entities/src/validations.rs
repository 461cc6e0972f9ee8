use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per validation attempt.
///
/// The table has no key column. The ORM identifies a row by `(rfc, created_at)`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "validations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rfc: String,
    pub is_valid: bool,
    #[sea_orm(primary_key, auto_increment = false)]
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
