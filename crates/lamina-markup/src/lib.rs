//! In-memory markup tree construction and serialization.
//!
//! This crate provides the [`Element`] builder: a mutable tree of tagged
//! elements with ordered attributes, nested children, and optional text,
//! serialized to indentation-nested markup text.

pub mod element;

pub use element::{Child, Element};
