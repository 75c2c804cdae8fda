use thiserror::Error;

use crate::input::InputError;
use crate::instrument::loader::InstrumentError;
use crate::pipeline::PipelineError;
use crate::pipeline::stage8_report::ReportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Instrument(#[from] InstrumentError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("cannot encode instrument: {0}")]
    Encode(#[from] serde_json::Error),
}
