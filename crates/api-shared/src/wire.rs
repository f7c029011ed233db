//! Wire types for service-level responses.

use curie_core::TrialData;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub status: String,
    pub cors: String,
}

/// Service identification returned from the API root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiInfoRes {
    pub message: String,
    pub version: String,
    pub disease: String,
}

/// Full trial reference collection, each record exactly as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListTrialsRes {
    #[schema(value_type = Vec<Object>)]
    pub trials: TrialData,
}
