pub mod contact;
pub mod reflect;

pub use contact::{ContactPayload, ContactRecord, ContactResponse};
pub use reflect::{ReflectRequest, ReflectResponse};
