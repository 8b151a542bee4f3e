//! C FFI tests — call the exported functions the way a native front-end does.

use chordlib::{chordlib_free_string, chordlib_render_json};
use pretty_assertions::assert_eq;
use std::ffi::{CStr, CString};

/// Call `chordlib_render_json`, copy the result out and free it.
fn render_via_ffi(request: &str) -> Option<String> {
    let request = CString::new(request).expect("request has no NUL");
    let ptr = unsafe { chordlib_render_json(request.as_ptr()) };
    if ptr.is_null() {
        return None;
    }
    let text = unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .expect("diagram is UTF-8")
        .to_string();
    unsafe { chordlib_free_string(ptr) };
    Some(text)
}

#[test]
fn ffi_renders_request() {
    let text = render_via_ffi(
        r#"{"config": {"name": "E5", "strings": ["E", "A"], "hide-brief": true},
            "markings": ["2.2.1"]}"#,
    );
    assert_eq!(text.as_deref(), Some("E5\n\n  #a #b \nA ;xl#a_\nE ;x_33=\n"));
}

#[test]
fn ffi_returns_null_for_bad_marking() {
    assert_eq!(render_via_ffi(r#"{"markings": ["9"]}"#), None);
}

#[test]
fn ffi_returns_null_for_bad_json() {
    assert_eq!(render_via_ffi("{not json"), None);
}

#[test]
fn ffi_returns_null_when_diagram_contains_nul() {
    assert_eq!(
        render_via_ffi(r#"{"config": {"name": "G\u0000x"}, "markings": ["1.3"]}"#),
        None
    );
}

#[test]
fn ffi_handles_null_pointers() {
    let ptr = unsafe { chordlib_render_json(std::ptr::null()) };
    assert!(ptr.is_null());
    // Freeing null is a no-op.
    unsafe { chordlib_free_string(std::ptr::null_mut()) };
}
