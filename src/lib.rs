//! Library exports for the sketchboard shape editor.
//!
//! The editor core is the shape model ([`draw`]), the hit-tester ([`draw::hit`])
//! and the gesture state machine ([`input::EditorState`]). Shells feed it pointer
//! and key events, poll [`input::EditorState::needs_redraw`], and replay the
//! resulting draw commands on a Cairo surface.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
