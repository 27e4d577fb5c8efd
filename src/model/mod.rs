//! Domain model types (pure).

pub mod error;
pub mod item;
pub mod key_action;

pub use error::{AppError, InputError, ParseError};
pub use item::{uniform_item_width, ItemDescriptor, CARD_PADDING};
pub use key_action::KeyAction;
