//! Library surface of the `senti` binary: logging bootstrap and the
//! predictions-file reader, exposed separately so they stay testable.

pub mod logging;
pub mod predictions;
