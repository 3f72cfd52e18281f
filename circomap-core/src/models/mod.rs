pub mod feature_set;
pub mod interval;

// re-export for cleaner imports
pub use self::feature_set::ScaffoldFeatureSet;
pub use self::interval::{Interval, MergeOutcome};
