pub mod error;
pub mod event;

pub use error::AdapterError;
pub use event::{InvocationEvent, InvocationResponse};
