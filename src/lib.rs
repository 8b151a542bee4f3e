//! chordlib — fretted-instrument chord diagrams as plain or braille text.
//!
//! Markings of the form `string[.fret[.finger]]` are validated against an
//! instrument model and rendered into a one-line brief display plus a
//! column-aligned tab. Every symbol is configurable.
//!
//! # Example
//! ```
//! use chordlib::{render_chord, ChordConfig};
//!
//! let diagram = render_chord(&ChordConfig::default(), &["1.3.2", "2.2.1", "6.3.3"]).unwrap();
//! assert_eq!(diagram.tab.len(), 7);
//! println!("{diagram}");
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod renderer;
pub mod resolver;

use serde::{Deserialize, Serialize};

pub use config::{ChordConfig, OptionValue};
pub use error::ChordError;
pub use model::*;
pub use parser::{parse_marking, Marking};
pub use renderer::{render, transliterate};
pub use resolver::resolve;

/// Resolve markings and render them in one step.
pub fn render_chord<S: AsRef<str>>(
    config: &ChordConfig,
    markings: &[S],
) -> Result<Diagram, ChordError> {
    let board = resolve(config, markings)?;
    Ok(render(config, &board))
}

/// Convert a rendered diagram to a JSON string.
pub fn diagram_to_json(diagram: &Diagram) -> Result<String, ChordError> {
    Ok(serde_json::to_string_pretty(diagram)?)
}

/// A complete render request, as front-ends send it across FFI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    pub config: ChordConfig,
    pub markings: Vec<String>,
}

/// Render a JSON `RenderRequest` into diagram text.
pub fn render_request_json(json: &str) -> Result<String, ChordError> {
    let request: RenderRequest = serde_json::from_str(json)?;
    let diagram = render_chord(&request.config, &request.markings)?;
    Ok(diagram.to_string())
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for native front-ends
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render a JSON render request and return the diagram text as a C string.
/// Returns null if the request is invalid, a marking fails to resolve, or
/// the diagram text contains a NUL byte.
/// The caller must free the returned string with `chordlib_free_string`.
///
/// # Safety
/// `request` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordlib_render_json(request: *const c_char) -> *mut c_char {
    if request.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(request) };
    let json = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let text = match render_request_json(json) {
        Ok(text) => text,
        Err(_) => return std::ptr::null_mut(),
    };
    // Glyphs may carry interior NULs, which C strings cannot hold.
    match CString::new(text) {
        Ok(c_text) => c_text.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by chordlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
