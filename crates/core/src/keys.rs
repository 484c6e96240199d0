//! Well-known stash keys
//!
//! Keys shared between services that read and write entity stashes.

#![allow(missing_docs)]

use crate::key::FieldKey;

pub const ERROR: FieldKey = FieldKey::from_static("error");
pub const ERROR_CODE: FieldKey = FieldKey::from_static("error_code");
pub const API_ACCESS_KEY_REF: FieldKey = FieldKey::from_static("api_access_key_ref");
pub const BALANCE_REF: FieldKey = FieldKey::from_static("balance_ref");
pub const MOBILE_PHONE: FieldKey = FieldKey::from_static("mobile_phone");
pub const NOTIFICATION: FieldKey = FieldKey::from_static("notification");
pub const ALLOWED_IP: FieldKey = FieldKey::from_static("allowed_ip");
pub const CALLBACK_URL: FieldKey = FieldKey::from_static("callback_url");
pub const CALLBACK_RESULT: FieldKey = FieldKey::from_static("callback_result");
pub const CALLBACK_COUNTER: FieldKey = FieldKey::from_static("callback_counter");
pub const GM_API_URL: FieldKey = FieldKey::from_static("gm_api_url");
pub const GM_API_POINT: FieldKey = FieldKey::from_static("gm_api_point");
pub const GM_API_SERVICE: FieldKey = FieldKey::from_static("gm_api_service");
pub const ACTION_INITIATOR: FieldKey = FieldKey::from_static("action_initiator");

// Private keys: readable in process, dropped from serialized output.

pub const SALT: FieldKey = FieldKey::from_static("_salt");
