//! API String Format Specification
//!
//! This module documents the canonical, locale-invariant wire format as
//! implemented by this library. The format is the persisted interchange
//! representation and must remain stable across implementations.
//!
//! # Scalars
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Integer | Decimal digits, optional `-` | `-42` |
//! | Real | Shortest round-trip decimal or scientific form | `3.2`, `1e300` |
//! | Real (non-finite) | `NaN`, `Infinity`, `-Infinity` | `Infinity` |
//! | Boolean | `True` or `False` | `True` |
//! | String | The text itself, unescaped | `hello world` |
//! | File | A JSON object (see below) | `{"mimeType":"text/plain"}` |
//!
//! **Parsing** is more lenient than emission: integers accept float-looking
//! numerals (truncated toward zero), reals accept anything unambiguously a
//! 64-bit float, and booleans accept case-insensitive
//! `true`/`false`/`yes`/`no`/`y`/`n` plus numeric-nonzero.
//!
//! # Arrays
//!
//! Elements are comma-joined in row-major storage order.
//!
//! - **Zero-dimensional** (one element): just the element's scalar form.
//! - **One-dimensional**: `1,2,3`
//! - **N-dimensional (N≥2)**: `bounds[d0,d1,...]{e0,e1,...}` with dimension
//!   sizes in order, then all elements flattened row-major:
//!
//! ```text
//! bounds[2,2]{1,2,3,4}      // the 2×2 integer array [[1,2],[3,4]]
//! bounds[2,1]{True,False}   // a 2×1 boolean array
//! ```
//!
//! On parse, the `bounds` keyword is case-insensitive, interior whitespace is
//! tolerated, and the element count must equal the product of the declared
//! sizes. Input without a `bounds` prefix is zero-dimensional when it holds a
//! single comma-free element and one-dimensional otherwise; empty input is an
//! empty one-dimensional array. A bare `{...}` wrapper is accepted.
//!
//! # String escaping
//!
//! String-array elements are double-quoted, with these escapes applied:
//!
//! | Character | Escape |
//! |-----------|--------|
//! | backslash | `\\` |
//! | newline | `\n` |
//! | carriage return | `\r` |
//! | tab | `\t` |
//! | double quote | `\"` |
//! | NUL | `\0` |
//!
//! Unescaping maps the four control escapes back and otherwise removes the
//! backslash, keeping the following character, so unknown escapes degrade
//! instead of failing; `unescape(escape(s)) == s` holds for every `s`.
//!
//! Bare scalar strings are **not** escaped: outside array contexts the API
//! form of a string value is the text itself.
//!
//! # Files
//!
//! A file value serializes as a JSON object whose fields are all optional
//! and omitted when absent:
//!
//! ```text
//! {"contents":"<content id>","originalFilename":"in.txt",
//!  "mimeType":"text/plain","encoding":"utf-8","size":"412"}
//! ```
//!
//! `contents` holds the identifier issued by the save context, never the
//! bytes themselves. File arrays serialize as JSON lists of these objects,
//! nested per dimension so the shape survives the trip.
