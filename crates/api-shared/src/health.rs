use crate::wire::{ApiInfoRes, HealthRes};
use curie_core::SUPPORTED_DISEASE;

/// Name reported by the API root.
pub const SERVICE_NAME: &str = "Curie CDS API";

/// API version reported by the API root and the OpenAPI document.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Simple health service that can be used by any API surface
///
/// This service provides a standardised way to check the health status of the Curie service.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy and CORS is configured.
    pub fn check_health() -> HealthRes {
        HealthRes {
            status: "ok".into(),
            cors: "enabled".into(),
        }
    }

    /// Identifies the service, its version and the disease it supports.
    pub fn api_info() -> ApiInfoRes {
        ApiInfoRes {
            message: SERVICE_NAME.into(),
            version: SERVICE_VERSION.into(),
            disease: SUPPORTED_DISEASE.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_reports_ok_with_cors() {
        let json = serde_json::to_value(HealthService::check_health()).expect("serialize");
        assert_eq!(json, serde_json::json!({"status": "ok", "cors": "enabled"}));
    }

    #[test]
    fn api_info_names_service_and_disease() {
        let info = HealthService::api_info();
        assert_eq!(info.message, "Curie CDS API");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.disease, "HFpEF");
    }
}
