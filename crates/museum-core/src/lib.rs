//! Platform-independent logic for the walk-through museum.
//!
//! Nothing in here touches the DOM or a real speech engine. The web frontend
//! owns a [`Gallery`] and re-renders from its view models after every
//! mutation; tests drive the same type with a fake [`SpeechEngine`].

pub mod config;
pub mod constants;
pub mod error;
pub mod exhibit;
pub mod gallery;
pub mod navigation;
pub mod session;
pub mod speech;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use exhibit::*;
pub use gallery::*;
pub use navigation::*;
pub use session::*;
pub use speech::*;
