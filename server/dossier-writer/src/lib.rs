//! Onboarding Dossier Writer: persists one submission as a JSON file.
//!
//! Used by the binary for argv-driven invocation; the intake service calls
//! it as a library so failures come back typed instead of as scraped text.

mod clock;
mod error;
mod naming;
mod writer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DossierError;
pub use naming::{dossier_file_name, slugify, timestamp};
pub use writer::{DossierWriter, Written};

/// Environment variable naming the output directory for the binary.
pub const DOSSIER_DIR_ENV: &str = "DOSSIER_DIR";

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = ".tmp";

/// Token that prefixes the success line printed by the binary.
pub const SUCCESS_MARKER: &str = "ONBOARDING_SUCCESS";
