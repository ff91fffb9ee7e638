//! # Character API
//!
//! Wire types for the character endpoint and the HTTP client that pages
//! through it. Everything else in the crate talks to the network through
//! the [`CharacterSource`] trait.

pub mod client;
pub mod types;

pub use client::{CharacterSource, FetchError, RickAndMortyClient};
pub use types::{Character, CharacterPage, PageInfo};
