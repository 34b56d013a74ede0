//! Launch Commands
//!
//! Frontend bindings for the first-launch flag.

use wasm_bindgen::prelude::*;
use wallet_flow::LaunchState;

use super::{invoke, js_error};

pub async fn load_launch_state() -> Result<LaunchState, String> {
    let result = invoke("load_launch_state", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| format!("Response error: {}", e))
}

pub async fn complete_onboarding() -> Result<(), String> {
    invoke("complete_onboarding", JsValue::NULL).await.map_err(js_error)?;
    Ok(())
}
