//! Conversions to and from external representations
//!
//! - [`int`]: constructors from primitive machine integers and checked
//!   conversions back for values that fit.
//! - [`radix`]: signed ASCII strings in any radix from 2 to 16, plus the
//!   `Display` rendering in hexadecimal.
//! - [`bytes`]: unsigned big-endian byte arrays, the persistent format
//!   used by key material, and random magnitude draws.

mod bytes;
mod int;
mod radix;
