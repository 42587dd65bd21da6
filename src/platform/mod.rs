//! Platform capabilities and effect application.
//!
//! Page scroll and audio are opaque external calls behind traits, so the core
//! engine runs headlessly; the shell here bridges engine effects onto whatever
//! implements them.

/// Scroll host, audio sink and the effect applier.
pub mod host;
