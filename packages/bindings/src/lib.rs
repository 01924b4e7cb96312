use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Serialize;

use fee_compare_core::comparison::{self, ComparisonInput};
use fee_compare_core::projection::{self, ProjectionInput};
use fee_compare_core::variant::VariantSet;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[napi]
pub fn project_fees(input_json: String) -> NapiResult<String> {
    let input: ProjectionInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = projection::build_projection(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compare_fees(input_json: String) -> NapiResult<String> {
    let input: ComparisonInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = comparison::compare(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ParsedAmount {
    value: rust_decimal::Decimal,
}

/// Parse free-text money ("$25,000,000") into a decimal string.
#[napi]
pub fn parse_amount(text: String) -> NapiResult<String> {
    let value = fee_compare_core::amount::parse_amount(&text).map_err(to_napi_error)?;
    serde_json::to_string(&ParsedAmount { value }).map_err(to_napi_error)
}

#[napi]
pub fn builtin_variants() -> NapiResult<String> {
    serde_json::to_string(&VariantSet::builtin()).map_err(to_napi_error)
}
