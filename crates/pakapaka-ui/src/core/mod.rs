//! Core, DOM-free primitives and helpers for the page behaviors.
pub mod like;
pub mod markers;
pub mod password;
pub mod post;
