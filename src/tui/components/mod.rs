//! # TUI Components
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status line)
//! ├── species_card.rs  (sprite + stats panels)
//! ├── id_input.rs      (ID search box)
//! └── notification.rs  (modal message overlay)
//! ```
//!
//! Stateless components (`TitleBar`, `SpeciesCard`, `Notification`) get all
//! their data as props. `IdInput` owns its buffer and emits `IdInputEvent`s.

mod title_bar;
pub use title_bar::TitleBar;

pub mod id_input;
pub mod notification;
pub mod species_card;
pub use id_input::{IdInput, IdInputEvent};
pub use notification::{Notification, NotificationEvent, NotificationKeys};
pub use species_card::SpeciesCard;
