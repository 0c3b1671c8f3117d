//! Multiversion Compute Engine dispatcher
//!
//! Callers build canonical records from [`shared`] and hand them to
//! [`multiversion::ComputeMultiversionService`] together with the
//! [`version::ApiVersion`] to run the call on. The dispatcher converts to the
//! version's wire types in [`compute`], calls the REST API and converts the
//! answer back.
//!
//! The canonical model and the per-resource dispatcher methods are generated
//! by [`codegen`] from the schemas in `src/schemas/`.

pub mod codegen;
pub mod compute;
pub mod config;
pub mod convert;
pub mod error;
pub mod gcp;
pub mod multiversion;
pub mod shared;
pub mod version;

pub use error::{Error, Result};
