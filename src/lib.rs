#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
#[cfg(feature = "std")]
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;
mod shot;
mod win;

pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
#[cfg(feature = "std")]
pub use player::{ConsoleSource, ScriptedSource, TargetSource};
#[cfg(feature = "std")]
pub use session::{run_session, SessionSummary};
pub use shot::*;
pub use win::*;
