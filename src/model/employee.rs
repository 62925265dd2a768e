use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "organization_id": 1,
        "employee_code": "EMP-001",
        "full_name": "Maria Lopez",
        "department_id": 10,
        "position_id": 3,
        "is_active": true
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub organization_id: u64,

    #[schema(example = "EMP-001")]
    pub employee_code: String,

    #[schema(example = "Maria Lopez")]
    pub full_name: String,

    #[schema(example = 10, nullable = true)]
    pub department_id: Option<u64>,

    #[schema(example = 3, nullable = true)]
    pub position_id: Option<u64>,

    #[schema(example = true)]
    pub is_active: bool,
}
