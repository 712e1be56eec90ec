use edugate_core::DashboardVariant;
use tracing::instrument;

use super::model::DashboardResponse;

pub struct DashboardService;

impl DashboardService {
    /// Picks the dashboard from the role claim alone. Unrecognized roles get
    /// the restricted view.
    #[instrument]
    pub fn for_role(raw_role: &str) -> DashboardResponse {
        let variant = DashboardVariant::for_role(raw_role);
        if variant == DashboardVariant::Restricted {
            tracing::info!(role = %raw_role, "Serving restricted dashboard");
        }

        DashboardResponse {
            role: raw_role.to_string(),
            variant,
            title: variant.title().to_string(),
        }
    }
}
