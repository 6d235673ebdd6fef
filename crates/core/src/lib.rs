//! Domain layer of the script intake service: the `Script` record, request
//! body decoding, and flat-file persistence. Contains no HTTP types.

pub mod error;
pub mod script;
pub mod store;
