use thiserror::Error;

pub type SeekResult<T> = Result<T, SeekError>;

#[derive(Debug, Error)]
pub enum SeekError {
    #[error("selection width resolves to {selection_width_px}px; range cannot be mapped")]
    DegenerateRange { selection_width_px: i32 },

    #[error(
        "invalid time range: start={start_time}, end={end_time}, min_duration={min_duration_ms}"
    )]
    InvalidTimeRange {
        start_time: i64,
        end_time: i64,
        min_duration_ms: i64,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
