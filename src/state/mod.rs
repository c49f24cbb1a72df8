//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only process-wide state this shell carries. It has a
//! single writer (the resolver spawned at mount) and arbitrarily many
//! readers, so the module hands out a read-only signal through context and
//! keeps the writable half private to the provider.

pub mod session;
