//! Scoped process-locale switching and locale-aware numeric text.
//!
//! The C locale is process-global state. Every locale-sensitive operation in
//! this crate goes through [`with_numeric_locale`], which captures the current
//! locale, switches to the requested one, reads the numeric conventions, runs
//! the action, and restores the original locale on every exit path via a
//! `Drop` guard.
//!
//! Restoration alone cannot make concurrent use safe: two threads formatting
//! in different locales still race on the process-wide setting, so all scoped
//! regions are serialized behind one process-wide mutex. Callers that need
//! truly concurrent multi-locale formatting must provide their own isolation.
//!
//! The formatting and parsing helpers themselves are pure functions of a
//! [`NumericConventions`], so they are testable without touching the process
//! locale at all.

use std::ffi::{CStr, CString};
use std::sync::{Mutex, OnceLock};

use crate::error::{Error, Result};
use crate::scalar_values::{IntegerValue, RealValue};

/// Significant digits guaranteed to survive a display round trip.
const DISPLAY_SIGNIFICANT_DIGITS: usize = 15;

/// The numeric conventions of a locale, as reported by `localeconv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericConventions {
    /// The decimal radix character, `.` in the C locale.
    pub decimal_point: String,
    /// The digit-group separator, empty in the C locale.
    pub thousands_sep: String,
}

impl Default for NumericConventions {
    fn default() -> Self {
        NumericConventions {
            decimal_point: ".".to_string(),
            thousands_sep: String::new(),
        }
    }
}

fn locale_mutex() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Restores the captured locale when dropped, including during unwinding.
struct LocaleGuard {
    saved: Option<CString>,
}

impl LocaleGuard {
    fn switch(locale_name: &str) -> Result<LocaleGuard> {
        let requested = CString::new(locale_name)
            .map_err(|_| Error::UnsupportedLocale(locale_name.to_string()))?;
        // SAFETY: setlocale is only reached under the locale mutex; the
        // returned pointer is copied before any further locale call.
        unsafe {
            let current = libc::setlocale(libc::LC_ALL, std::ptr::null());
            let saved = if current.is_null() {
                None
            } else {
                Some(CStr::from_ptr(current).to_owned())
            };
            if libc::setlocale(libc::LC_ALL, requested.as_ptr()).is_null() {
                return Err(Error::UnsupportedLocale(locale_name.to_string()));
            }
            Ok(LocaleGuard { saved })
        }
    }

    fn conventions(&self) -> NumericConventions {
        // SAFETY: called between switch and drop, still under the mutex; the
        // lconv fields are copied out immediately.
        unsafe {
            let lconv = libc::localeconv();
            if lconv.is_null() {
                return NumericConventions::default();
            }
            let read = |ptr: *mut libc::c_char, fallback: &str| -> String {
                if ptr.is_null() {
                    fallback.to_string()
                } else {
                    CStr::from_ptr(ptr).to_string_lossy().into_owned()
                }
            };
            NumericConventions {
                decimal_point: read((*lconv).decimal_point, "."),
                thousands_sep: read((*lconv).thousands_sep, ""),
            }
        }
    }
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        if let Some(saved) = &self.saved {
            // SAFETY: restoring a locale string previously returned by
            // setlocale, still under the mutex held by the caller.
            unsafe {
                libc::setlocale(libc::LC_ALL, saved.as_ptr());
            }
        }
    }
}

/// Runs an action inside the named locale, restoring the previous locale on
/// every exit path.
///
/// # Errors
///
/// Fails with [`Error::UnsupportedLocale`] when the system rejects the locale
/// name. Errors from the action propagate after restoration.
///
/// # Examples
///
/// ```rust
/// use variable_interop::locale::with_numeric_locale;
///
/// let decimal_point = with_numeric_locale("C", |conventions| {
///     Ok(conventions.decimal_point.clone())
/// })
/// .unwrap();
/// assert_eq!(decimal_point, ".");
/// ```
pub fn with_numeric_locale<T>(
    locale_name: &str,
    action: impl FnOnce(&NumericConventions) -> Result<T>,
) -> Result<T> {
    let _serialized = locale_mutex()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let guard = LocaleGuard::switch(locale_name)?;
    let conventions = guard.conventions();
    action(&conventions)
}

/// Formats a real value with 15 significant digits under the given
/// conventions.
///
/// Follows `%.15G` selection: scientific notation when the decimal exponent
/// is below -4 or at least 15, fixed notation otherwise, trailing zeros
/// stripped, no digit grouping. Non-finite values keep their canonical
/// spellings in every locale.
#[must_use]
pub fn format_real(value: RealValue, conventions: &NumericConventions) -> String {
    if !value.0.is_finite() {
        return value.to_api_string();
    }
    let formatted = format_significant(value.0, DISPLAY_SIGNIFICANT_DIGITS);
    if conventions.decimal_point != "." {
        formatted.replace('.', &conventions.decimal_point)
    } else {
        formatted
    }
}

/// Formats an integer for display: plain decimal digits.
///
/// Grouping is deliberately omitted so the result re-parses unambiguously.
#[must_use]
pub fn format_integer(value: IntegerValue) -> String {
    value.to_api_string()
}

/// Formats a boolean for display: `True` or `False`.
#[must_use]
pub fn format_boolean(value: bool) -> String {
    if value {
        "True".to_string()
    } else {
        "False".to_string()
    }
}

/// `%.NG`-style formatting against the C conventions.
fn format_significant(value: f64, significant: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let precision = significant.saturating_sub(1);
    let scientific = format!("{:.*e}", precision, value);
    let (mantissa, exponent_text) = scientific
        .split_once('e')
        .expect("exponential formatting always contains 'e'");
    let exponent: i32 = exponent_text
        .parse()
        .expect("exponential formatting always has a numeric exponent");

    if exponent < -4 || exponent >= significant as i32 {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        format!("{}E{}{:02}", mantissa, if exponent < 0 { "-" } else { "+" }, exponent.abs())
    } else {
        let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        if fixed.contains('.') {
            fixed
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            fixed
        }
    }
}

/// Parses a real numeral written under the given conventions.
///
/// Grouping separators are removed and the locale decimal point is swapped
/// for `.` before parsing with the canonical grammar.
pub fn parse_real(text: &str, conventions: &NumericConventions) -> Result<RealValue> {
    let mut cleaned = text.trim().to_string();
    if !conventions.thousands_sep.is_empty() {
        cleaned = cleaned.replace(&conventions.thousands_sep, "");
    }
    if conventions.decimal_point != "." {
        cleaned = cleaned.replace(&conventions.decimal_point, ".");
    }
    RealValue::from_api_string(&cleaned)
        .map_err(|_| Error::format(format!("{:?} is not a numeral for the active locale", text)))
}

/// Parses an integer numeral written under the given conventions.
///
/// The text is parsed as a real first so scientific notation is accepted,
/// then converted with the real-to-integer rule.
pub fn parse_integer(text: &str, conventions: &NumericConventions) -> Result<IntegerValue> {
    parse_real(text, conventions)?.to_integer_value()
}

/// Parses a display boolean token.
///
/// Accepts, case-insensitively, `y`/`yes`/`t`/`true`/`on`/`1` as true and
/// `n`/`no`/`f`/`false`/`off`/`0` as false.
pub fn parse_boolean(text: &str) -> Result<bool> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Ok(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Ok(false),
        _ => Err(Error::format(format!(
            "{:?} is not a recognized boolean token",
            text
        ))),
    }
}
