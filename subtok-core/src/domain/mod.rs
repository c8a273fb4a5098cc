//! Domain layer: the subtoken extraction engine
//!
//! Everything here is pure and synchronous. Per-word state (tracker and
//! windows) lives only for the duration of one word; the registry and the
//! depth policy are read-only and may be shared.

pub mod boundary;
pub mod classifier;
pub mod depth_policy;
pub mod detector;
pub mod generator;
pub mod script;
pub mod types;

pub use boundary::BoundaryTracker;
pub use classifier::{classify, RuneClassifier};
pub use depth_policy::{DepthPolicy, InterpolatedDepth};
pub use detector::{detect, LanguageDetector, MAX_SEGMENTS};
pub use generator::SubtokenGenerator;
pub use script::{
    CharRanges, FnScript, LanguageRegistry, ScriptMembership, UnicodeScript, COMMON_SCRIPTS,
};
pub use types::{
    Annotation, BoundaryState, Detection, RuneClass, Span, SubtokenMetadata, Subtokens,
};
