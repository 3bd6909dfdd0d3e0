//! Entry point for the user interface: text in, result out.

use medbook_events::Subscription;
use medbook_model::{BookChangeEnvelope, ClinicBook, Model};
use medbook_storage::BookStorage;

use crate::commands::CommandResult;
use crate::error::LogicError;
use crate::input_history::InputHistory;
use crate::parser::parse_command;

/// Owns the model and writes it back through `S` whenever a command changed it.
pub struct LogicManager<S> {
    model: Model,
    storage: S,
    changes: Subscription<BookChangeEnvelope>,
    inputs: InputHistory,
}

impl<S: BookStorage> LogicManager<S> {
    pub fn new(model: Model, storage: S) -> Self {
        let changes = model.subscribe();
        Self {
            model,
            storage,
            changes,
            inputs: InputHistory::default(),
        }
    }

    /// Loads the book from `storage`, starting empty when there is no data file.
    ///
    /// Unreadable or invalid data is an error; nothing is loaded partially.
    pub fn open(storage: S, history_limit: usize) -> Result<Self, LogicError> {
        let book = match storage.read_book()? {
            Some(snapshot) => ClinicBook::from_snapshot(snapshot).map_err(LogicError::Load)?,
            None => {
                tracing::info!(
                    path = %storage.file_path().display(),
                    "starting with an empty record book"
                );
                ClinicBook::new()
            }
        };
        Ok(Self::new(Model::new(book, history_limit), storage))
    }

    /// Parses and runs one command line.
    ///
    /// The line is recorded for `history` once it has run, even when it
    /// fails, so `history` never lists itself. A failed command leaves the
    /// book untouched; a successful one that changed the book is saved before
    /// returning. A failed save does not fail the command; it is reported in
    /// [`CommandResult::save_warning`].
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, LogicError> {
        let result = self.run(input);
        self.inputs.record(input);
        result
    }

    fn run(&mut self, input: &str) -> Result<CommandResult, LogicError> {
        let command = parse_command(input).inspect_err(|err| {
            tracing::debug!(%err, "rejected input");
        })?;
        let undoable = command.is_undoable();
        let outcome = command.execute(&mut self.model, &self.inputs);

        let changes = self.changes.drain();
        let mut result = outcome.inspect_err(|err| {
            tracing::warn!(%err, "command failed");
        })?;

        if !changes.is_empty() {
            tracing::debug!(changes = changes.len(), undoable, "book changed; saving");
            if let Err(err) = self.storage.save_book(&self.model.book().snapshot()) {
                tracing::error!(%err, "failed to save record book");
                result.save_warning = Some(format!("Could not save data to file: {err}"));
            }
        }
        Ok(result)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn input_history(&self) -> &InputHistory {
        &self.inputs
    }
}
