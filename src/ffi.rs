//! C ABI for the area computation.
//!
//! ```c
//! typedef struct { double a; double b; } ellipse_t;
//!
//! double area_ellipse(const ellipse_t *ellipse);
//! int area_ellipse_into(const ellipse_t *ellipse, double *area);
//! ```
//!
//! Null pointers are reported, never dereferenced.

use crate::core::area::ellipse_area;
use crate::domain::model::Ellipse;
use std::ffi::{c_double, c_int};

pub const AREA_OK: c_int = 0;
pub const AREA_NULL_POINTER: c_int = -1;

/// Returns the area of `ellipse`, or NaN when the pointer is null.
///
/// # Safety
///
/// `ellipse` must be null or point to a valid, aligned `Ellipse`.
#[no_mangle]
pub unsafe extern "C" fn area_ellipse(ellipse: *const Ellipse) -> c_double {
    // SAFETY: the caller guarantees the pointer is null or valid.
    match unsafe { ellipse.as_ref() } {
        Some(ellipse) => ellipse_area(ellipse),
        None => c_double::NAN,
    }
}

/// Writes the area of `ellipse` into `area`.
///
/// Returns [`AREA_OK`] on success and [`AREA_NULL_POINTER`], leaving `area`
/// untouched, when either pointer is null.
///
/// # Safety
///
/// Each pointer must be null or valid and aligned for its type, and `area`
/// must not alias `ellipse`.
#[no_mangle]
pub unsafe extern "C" fn area_ellipse_into(
    ellipse: *const Ellipse,
    area: *mut c_double,
) -> c_int {
    // SAFETY: the caller guarantees both pointers are null or valid.
    match unsafe { (ellipse.as_ref(), area.as_mut()) } {
        (Some(ellipse), Some(area)) => {
            *area = ellipse_area(ellipse);
            AREA_OK
        }
        _ => AREA_NULL_POINTER,
    }
}
