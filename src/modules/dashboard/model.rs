use edugate_core::DashboardVariant;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub role: String,
    pub variant: DashboardVariant,
    pub title: String,
}
