//! FFI bindings for the token core
//!
//! This module provides C-compatible function bindings used by the mobile
//! token screens. Payloads cross the boundary as JSON strings; every call
//! returns a [`SecureResult`] whose `data` must be released with
//! [`token_core_free_string`] or [`token_core_free_result`].
//!
//! Error codes below 100 describe a bad call (null pointer, invalid UTF-8,
//! malformed JSON). Codes from 100 up are token validation failures, see
//! [`EditTokenError::code`].

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::core::denomination::{decimal_places_to_multiplier, multiplier_to_decimal_places};
use crate::core::registry::{merge_visible_tokens, prepare_edit, validate_add, validate_delete};
use crate::domain::entities::{CustomTokenInfo, MetaToken, TokenForm, VisibleTokenSet};
use crate::shared::constants::FFI_MAX_INPUT_LENGTH;
use crate::shared::error::TokenCoreError;

const ERR_INVALID_INPUT: i32 = 1;
const ERR_INVALID_JSON: i32 = 2;
const ERR_SERIALIZATION: i32 = 8;
const ERR_STRING_CONVERSION: i32 = 15;

/// FFI result wrapper
#[repr(C)]
pub struct SecureResult {
    success: bool,
    data: *mut c_char,
    error_code: i32,
}

impl SecureResult {
    fn success(data: String) -> Self {
        match CString::new(data) {
            Ok(c_string) => Self {
                success: true,
                data: c_string.into_raw(),
                error_code: 0,
            },
            Err(_) => Self::error(ERR_STRING_CONVERSION),
        }
    }

    fn error(error_code: i32) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error_code,
        }
    }

    fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(json) => Self::success(json),
            Err(_) => Self::error(ERR_SERIALIZATION),
        }
    }
}

fn read_input(input: *const c_char) -> Result<String, TokenCoreError> {
    if input.is_null() {
        return Err(TokenCoreError::serialization("Null input pointer"));
    }

    let input_str = unsafe { CStr::from_ptr(input) }
        .to_str()
        .map_err(|_| TokenCoreError::serialization("Invalid UTF-8 input"))?;

    if input_str.len() > FFI_MAX_INPUT_LENGTH {
        return Err(TokenCoreError::serialization("Input too long"));
    }

    Ok(input_str.to_string())
}

fn read_json<T: DeserializeOwned>(input: *const c_char) -> Result<T, SecureResult> {
    let raw = read_input(input).map_err(|_| SecureResult::error(ERR_INVALID_INPUT))?;
    serde_json::from_str(&raw).map_err(|e| {
        log::debug!("Rejected FFI payload: {}", e);
        SecureResult::error(ERR_INVALID_JSON)
    })
}

fn read_string(input: *const c_char) -> Result<String, SecureResult> {
    read_input(input).map_err(|_| SecureResult::error(ERR_INVALID_INPUT))
}

macro_rules! try_ffi {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(result) => return result,
        }
    };
}

/// Merge built-in (`MetaToken[]`) and custom (`CustomTokenInfo[]`) token
/// lists into the visible token list
#[no_mangle]
pub extern "C" fn token_core_merge_visible_tokens(
    meta_tokens_json: *const c_char,
    custom_tokens_json: *const c_char,
) -> SecureResult {
    let meta_tokens: Vec<MetaToken> = try_ffi!(read_json(meta_tokens_json));
    let custom_tokens: Vec<CustomTokenInfo> = try_ffi!(read_json(custom_tokens_json));
    SecureResult::json(&merge_visible_tokens(&meta_tokens, &custom_tokens))
}

/// Validate an edit form; on success `data` holds the normalized
/// `CustomTokenInfo` to pass to the wallet core
#[no_mangle]
pub extern "C" fn token_core_validate_edit(
    form_json: *const c_char,
    existing_code: *const c_char,
    visible_tokens_json: *const c_char,
) -> SecureResult {
    let form: TokenForm = try_ffi!(read_json(form_json));
    let existing_code = try_ffi!(read_string(existing_code));
    let visible: VisibleTokenSet = try_ffi!(read_json(visible_tokens_json));

    match prepare_edit(&form, &existing_code, &visible) {
        Ok(token) => SecureResult::json(&token),
        Err(err) => SecureResult::error(err.code()),
    }
}

/// Validate an add form; on success `data` holds the normalized `CustomTokenInfo`
#[no_mangle]
pub extern "C" fn token_core_validate_add(
    form_json: *const c_char,
    visible_tokens_json: *const c_char,
) -> SecureResult {
    let form: TokenForm = try_ffi!(read_json(form_json));
    let visible: VisibleTokenSet = try_ffi!(read_json(visible_tokens_json));

    match validate_add(&form, &visible) {
        Ok(token) => SecureResult::json(&token),
        Err(err) => SecureResult::error(err.code()),
    }
}

/// Check a delete request against the stored custom tokens
#[no_mangle]
pub extern "C" fn token_core_validate_delete(
    currency_code: *const c_char,
    custom_tokens_json: *const c_char,
) -> SecureResult {
    let currency_code = try_ffi!(read_string(currency_code));
    let custom_tokens: Vec<CustomTokenInfo> = try_ffi!(read_json(custom_tokens_json));

    match validate_delete(&currency_code, &custom_tokens) {
        Ok(()) => SecureResult::success("ok".to_string()),
        Err(err) => SecureResult::error(err.code()),
    }
}

#[no_mangle]
pub extern "C" fn token_core_decimal_places_to_multiplier(decimal_places: *const c_char) -> SecureResult {
    let decimal_places = try_ffi!(read_string(decimal_places));
    match decimal_places_to_multiplier(&decimal_places) {
        Ok(multiplier) => SecureResult::success(multiplier),
        Err(err) => SecureResult::error(err.code()),
    }
}

#[no_mangle]
pub extern "C" fn token_core_multiplier_to_decimal_places(multiplier: *const c_char) -> SecureResult {
    let multiplier = try_ffi!(read_string(multiplier));
    match multiplier_to_decimal_places(&multiplier) {
        Ok(decimal_places) => SecureResult::success(decimal_places),
        Err(err) => SecureResult::error(err.code()),
    }
}

/// Free a C string returned in a `SecureResult`
#[no_mangle]
pub extern "C" fn token_core_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

/// Free the data held by a `SecureResult`
#[no_mangle]
pub extern "C" fn token_core_free_result(result: *mut SecureResult) {
    if !result.is_null() {
        unsafe {
            let result_ref = &mut *result;
            if !result_ref.data.is_null() {
                let _ = CString::from_raw(result_ref.data);
                result_ref.data = ptr::null_mut();
            }
        }
    }
}
