//! Company entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::entity::Entity;

/// A registered company. Independent of products and categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    /// Tax identification number.
    #[validate(length(min = 1, max = 50))]
    pub nit: String,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub address: Option<String>,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(email, length(max = 100))]
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub modified_by: Option<String>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Entity for Company {
    const KIND: &'static str = "company";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

fn default_active() -> bool {
    true
}
