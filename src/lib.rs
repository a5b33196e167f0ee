//! # embedscan
//!
//! Tools for studying how embedding coordinates are textually encoded in raw
//! API responses.
//!
//! An embeddings endpoint returns a JSON object whose `embedding` field holds
//! an array of decimal literals. Converting those literals to floats discards
//! the very thing under study: how many significant digits the server chose to
//! emit. So the [parsing] module scans the raw response text instead, pulls
//! out each coordinate exactly as written, and groups the coordinates by
//! mantissa digit count.
//!
//! The [keys] module is the sibling credential lookup used by callers that
//! fetch responses themselves; the parsing core never touches it.

pub mod keys;
pub mod parsing;
