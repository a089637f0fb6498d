// Raw pointers and catch_unwind for stability across the host boundary.
// The engine handle returned from `_new` is owned by the host and must be
// passed into every call; there is no shared or static engine.
use crate::core::engine::DEFAULT_SUGGESTION_LIMIT;
use crate::ImeEngine;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

unsafe fn first_char(ptr: *const c_char) -> Option<char> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()?.chars().next()
}

unsafe fn as_str<'a>(ptr: *const c_char) -> &'a str {
    if ptr.is_null() {
        return "";
    }
    CStr::from_ptr(ptr).to_str().unwrap_or("")
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).map(CString::into_raw).unwrap_or(ptr::null_mut())
}

fn limit_or_default(limit: u32) -> usize {
    if limit == 0 {
        DEFAULT_SUGGESTION_LIMIT
    } else {
        limit as usize
    }
}

#[no_mangle]
pub extern "C" fn polytonic_ime_engine_new() -> *mut ImeEngine {
    match catch_unwind(ImeEngine::new) {
        Ok(engine) => {
            eprintln!("[Rust] Polytonic IME engine initialized.");
            Box::into_raw(Box::new(engine))
        }
        Err(_) => {
            eprintln!("[Rust FATAL] A panic occurred during engine initialization.");
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn polytonic_ime_engine_free(engine: *mut ImeEngine) {
    if engine.is_null() {
        return;
    }
    unsafe {
        drop(Box::from_raw(engine));
    }
    eprintln!("[Rust] Polytonic IME engine destroyed.");
}

/// Returns a JSON array of variant strings for a long-pressed base
/// character. The result must be released with `polytonic_ime_free_string`.
#[no_mangle]
pub extern "C" fn polytonic_ime_get_variants(
    engine: *const ImeEngine,
    vowel: *const c_char,
) -> *mut c_char {
    let json = catch_unwind(AssertUnwindSafe(|| {
        let engine = unsafe { engine.as_ref() };
        let vowel = unsafe { first_char(vowel) };
        if let (Some(engine), Some(vowel)) = (engine, vowel) {
            let variants: Vec<String> =
                engine.get_variants(vowel).into_iter().map(String::from).collect();
            serde_json::to_string(&variants).unwrap_or_else(|_| "[]".to_string())
        } else {
            "[]".to_string()
        }
    }))
    .unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in get_variants.");
        "[]".to_string()
    });
    into_c_string(json)
}

#[no_mangle]
pub extern "C" fn polytonic_ime_record_selection(
    engine: *mut ImeEngine,
    selected: *const c_char,
    vowel: *const c_char,
) {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let engine = unsafe { engine.as_mut() };
        let selected = unsafe { first_char(selected) };
        let vowel = unsafe { first_char(vowel) };
        if let (Some(engine), Some(selected), Some(vowel)) = (engine, selected, vowel) {
            engine.record_selection(selected, vowel);
        }
    }));
    if result.is_err() {
        eprintln!("[Rust FATAL] Panic in record_selection.");
    }
}

#[no_mangle]
pub extern "C" fn polytonic_ime_learn_text(engine: *mut ImeEngine, text: *const c_char) {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let engine = unsafe { engine.as_mut() };
        let text = unsafe { as_str(text) };
        if let Some(engine) = engine {
            engine.learn_from_text(text);
        }
    }));
    if result.is_err() {
        eprintln!("[Rust FATAL] Panic in learn_text.");
    }
}

/// Returns a JSON array of word completions for `prefix`. A `limit` of 0
/// selects the engine default.
#[no_mangle]
pub extern "C" fn polytonic_ime_suggest_words(
    engine: *const ImeEngine,
    prefix: *const c_char,
    limit: u32,
) -> *mut c_char {
    let json = catch_unwind(AssertUnwindSafe(|| {
        let engine = unsafe { engine.as_ref() };
        let prefix = unsafe { as_str(prefix) };
        if let Some(engine) = engine {
            let words = engine.get_word_suggestions(prefix, limit_or_default(limit));
            serde_json::to_string(&words).unwrap_or_else(|_| "[]".to_string())
        } else {
            "[]".to_string()
        }
    }))
    .unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in suggest_words.");
        "[]".to_string()
    });
    into_c_string(json)
}

/// Returns a JSON array of single-character strings predicted to follow
/// the last two characters of `text`. A `limit` of 0 selects the engine
/// default.
#[no_mangle]
pub extern "C" fn polytonic_ime_predict_next(
    engine: *const ImeEngine,
    text: *const c_char,
    limit: u32,
) -> *mut c_char {
    let json = catch_unwind(AssertUnwindSafe(|| {
        let engine = unsafe { engine.as_ref() };
        let text = unsafe { as_str(text) };
        if let Some(engine) = engine {
            let chars: Vec<String> = engine
                .get_next_character_predictions(text, limit_or_default(limit))
                .into_iter()
                .map(String::from)
                .collect();
            serde_json::to_string(&chars).unwrap_or_else(|_| "[]".to_string())
        } else {
            "[]".to_string()
        }
    }))
    .unwrap_or_else(|_| {
        eprintln!("[Rust FATAL] Panic in predict_next.");
        "[]".to_string()
    });
    into_c_string(json)
}

#[no_mangle]
pub extern "C" fn polytonic_ime_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
