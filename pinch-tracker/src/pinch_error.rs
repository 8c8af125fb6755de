use thiserror::Error;

/// Things that can go wrong at the edges of the tracker.
///
/// Processing events never fails; these only come from loading recorded streams.
#[derive(Error, Debug)]
pub enum PinchError {
    /// A line in a recording could not be parsed
    #[error("Line {line} of the recording is not a valid event")]
    InvalidRecord {
        /// 1-based line number
        line: usize,
        /// What the parser objected to
        #[source]
        source: serde_json::Error,
    },
    /// The recording contained no events at all
    #[error("The recording was empty")]
    EmptyRecording,
    /// Reading the recording failed
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
