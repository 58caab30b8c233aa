//! HTTP handlers for the reflection service.

pub mod contact;
pub mod dispatch;
pub mod reflect;
