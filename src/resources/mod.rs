//! Typed resource responses
//!
//! Each resource wraps a [`ResponseObject`] and names the subsets its schema
//! defines. All accessors read the same backing mapping.

use crate::core::response::ResponseObject;
use crate::core::schema::ResourceKind;

pub mod claim;
pub mod demographic;
pub mod plan;
pub mod service;

pub use claim::Claim;
pub use demographic::Demographic;
pub use plan::Plan;
pub use service::Service;

/// A resource kind with its typed response wrapper
pub trait Resource: Sized + Send {
    /// Endpoint and schema this resource is served from
    const KIND: ResourceKind;

    fn from_response(response: ResponseObject) -> Self;

    fn response(&self) -> &ResponseObject;
}
