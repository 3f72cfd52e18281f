use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeatmapError {
    #[error("Malformed feature line, expected at least 5 tab-delimited fields: {0}")]
    MalformedFeatureLine(String),

    #[error("Can't parse coordinate in feature line: {0}")]
    BadCoordinate(String),

    #[error("Feature coordinates are 1-based, 0 is not a valid position: {0}")]
    ZeroCoordinate(String),

    #[error("Feature start is greater than feature end: {0}")]
    ReversedInterval(String),

    #[error("Malformed scaffold length line, expected name<TAB>length: {0}")]
    MalformedLengthLine(String),

    #[error("Window length must be greater than zero")]
    InvalidWindowLength,

    #[error("No length known for scaffold: {0}")]
    MissingLength(String),

    #[error("Feature on scaffold {scaffold} ends at {end} (0-based) but the scaffold is only {length} bases long")]
    FeatureBeyondScaffold {
        scaffold: String,
        end: u32,
        length: u32,
    },

    #[error("Covered bases ({covered}) exceed window length ({window_len}) in window {window} of scaffold {scaffold}; an overlap escaped the merge pass")]
    CoverageOverflow {
        scaffold: String,
        window: usize,
        covered: u32,
        window_len: u32,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
