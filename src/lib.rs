//! Islamic calendar and astronomy engine: prayer times, Hijri dates and a
//! handful of worship and finance calculators.
//!
//! Everything here is a pure function of its inputs. The `api` module offers
//! the same operations with primitive arguments only.

pub mod api;
pub mod astro;
pub mod config;
pub mod error;
pub mod hijri;
pub mod models;
pub mod prayer_times;
pub mod ritual;
pub mod utils;

pub use error::{EngineError, Result};
