#![deny(missing_debug_implementations)]

//! Reconciliation core for the PUDO locator map.
//!
//! Keeps a map's visible pin set consistent with a remote,
//! viewport-dependent search result while the visitor pans, zooms and
//! searches: markers that scrolled out of sight are pruned, new results are
//! merged without creating duplicate pins, and a successful postal-code
//! search re-centers the viewport on its first hit.
//!
//! The concrete map widget and the remote directory are collaborators
//! behind the [`map::MapAdapter`] and [`directory::PudoDirectory`] traits,
//! so the whole pipeline can be driven with synthetic events and fakes.

pub mod directory;
pub mod map;
pub mod registry;
pub mod session;
pub mod usecases;

pub use self::{
    directory::{DirectoryError, DirectorySearch, PudoDirectory, SearchQuery},
    map::{MapAdapter, Viewport},
    registry::MarkerRegistry,
    session::{MapSession, SessionConfig},
    usecases::{
        begin_refresh, complete_refresh, locate_device, refresh_markers, RefreshCycle,
        RefreshOutcome, RefreshTrigger,
    },
};
