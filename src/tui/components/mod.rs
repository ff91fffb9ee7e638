//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status line with counts and the page cursor
//! - `CharacterCard`: one character (name, status, image URL)
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `CharacterList`: scrollable card column; its state feeds the scroll monitor
//! - `StatusPicker`: dropdown overlay for the status filter
//!
//! Components receive external data as props rather than reaching into the
//! core `Explorer`, so each one can be rendered against a `TestBackend` in
//! isolation.
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! ├── character_card.rs  (Single card renderer)
//! ├── character_list.rs  (Scrollable card container)
//! └── status_picker.rs   (Filter dropdown overlay)
//! ```

pub mod character_card;
pub mod character_list;
pub mod status_picker;
mod title_bar;

pub use character_card::CharacterCard;
pub use character_list::{CharacterList, CharacterListState};
pub use status_picker::{StatusPicker, StatusPickerEvent, StatusPickerState};
pub use title_bar::TitleBar;
