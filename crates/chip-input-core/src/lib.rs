//! Core logic of the chip input: token model, list transitions and the
//! clipboard interchange codec.
//!
//! Everything here is a pure function over a caller-owned token list. The
//! presentation layer lives in `chip-input-ui`.

pub mod action;
pub mod codec;
pub mod controller;
pub mod factory;
pub mod token;

pub use action::{apply, ChipAction, CreateStatus, Transition};
pub use codec::{decode, encode, is_recognized_format, to_display_text, DecodeError, MARKER};
pub use controller::CreateOutcome;
pub use factory::{Creation, LabelFactory, TokenFactory};
pub use token::{IdGenerator, SequentialIdGenerator, Token, TokenId, UuidIdGenerator};
