// @generated

pub mod application;
pub mod message;
pub mod stream;
