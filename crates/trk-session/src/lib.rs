//! Interactive track authoring session: input events in, cached geometry and exports out.

pub mod event;
pub mod session;

// Re-export main types
pub use event::{EdgeTrigger, SessionEvent};
pub use session::{DisplayBuffers, ExportOutcome, RefreshReport, TrackSession};
