//! # Core Application Logic
//!
//! This module contains the explorer's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (explorer)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Filter, paging,      │
//!                    │    debounce, scroll     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │    API     │
//!     │  Adapter   │                          │  (reqwest) │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Explorer` struct — all domain state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`filter`]: Status filter and the set of observed statuses
//! - [`paging`]: Start page, max page and the fetch phase
//! - [`debounce`] / [`scroll`]: When a scroll burst should trigger a load
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod paging;
pub mod scroll;
pub mod state;
