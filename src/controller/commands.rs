use crate::api::PredictionApi;
use crate::intake;

use super::{Command, Completion};

/// Execute one command to completion. Blocking; call from a worker thread.
pub fn run_command(command: Command, api: &dyn PredictionApi) -> Completion {
    match command {
        Command::ReadFile { ticket, candidate } => Completion::FileRead {
            ticket,
            result: intake::read_upload(&candidate),
        },
        Command::Predict { ticket, file } => {
            tracing::info!(ticket = ticket.0, file = %file.filename, size = file.size(), "uploading for prediction");
            Completion::Prediction {
                ticket,
                result: api.predict(file),
            }
        }
        Command::FetchStatistics => Completion::Statistics(api.statistics()),
        Command::CheckHealth => Completion::Health(api.health()),
    }
}
