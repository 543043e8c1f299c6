//! HTTP request handlers.
//!
//! One module per resource, one handler per endpoint. Handlers validate the
//! payload, construct the per-request unit of work, perform the staged
//! operations, and map outcomes to HTTP status codes. Each handler carries a
//! `#[utoipa::path]` annotation for the generated OpenAPI document.

pub mod category;
pub mod item;

#[cfg(test)]
mod test;
