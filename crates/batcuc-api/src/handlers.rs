use crate::{ApiError, ApiResult};
use axum::Json;
use batcuc_engine::context::UserContext;
use batcuc_engine::{
    analyze_compatibility, analyze_phone, analyze_six_digit, Compatibility, PhoneAnalysis,
    Purpose, SixDigitAnalysis,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneRequest {
    pub phone_number: String,
    #[serde(default)]
    pub context: Option<UserContext>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneResponse {
    pub analysis: PhoneAnalysis,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SixDigitRequest {
    pub number: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SixDigitResponse {
    pub analysis: SixDigitAnalysis,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRequest {
    pub phone_number: String,
    #[serde(default)]
    pub purpose: Purpose,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponse {
    pub purpose: Purpose,
    pub compatibility: Compatibility,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn phone_analysis(Json(request): Json<PhoneRequest>) -> ApiResult<Json<PhoneResponse>> {
    if request.phone_number.trim().is_empty() {
        return Err(ApiError::BadRequest("phoneNumber must not be empty".into()));
    }

    let analysis = analyze_phone(&request.phone_number, request.context)?;
    Ok(Json(PhoneResponse { analysis }))
}

pub async fn six_digit_analysis(
    Json(request): Json<SixDigitRequest>,
) -> ApiResult<Json<SixDigitResponse>> {
    if request.number.trim().is_empty() {
        return Err(ApiError::BadRequest("number must not be empty".into()));
    }

    let analysis = analyze_six_digit(&request.number)?;
    Ok(Json(SixDigitResponse { analysis }))
}

pub async fn compatibility_analysis(
    Json(request): Json<CompatibilityRequest>,
) -> ApiResult<Json<CompatibilityResponse>> {
    if request.phone_number.trim().is_empty() {
        return Err(ApiError::BadRequest("phoneNumber must not be empty".into()));
    }

    let compatibility = analyze_compatibility(&request.phone_number, request.purpose)?;
    Ok(Json(CompatibilityResponse {
        purpose: request.purpose,
        compatibility,
    }))
}
