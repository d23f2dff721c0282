use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    infra::{
        self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError,
        storage_layout::StorageLayout,
    },
    usecases::context::AppContext,
};

/// Loads config and installs file logging. The guard must outlive the app.
pub fn bootstrap(config_path: Option<&Path>) -> Result<(AppContext, WorkerGuard), AppError> {
    let context = build_context(&FileConfigAdapter::new(config_path))?;
    let layout = StorageLayout::resolve()?;
    let guard = infra::logging::init(&context.config.logging, &layout)?;

    tracing::debug!(
        log_file = %layout.log_file(&context.config.logging.file_name).display(),
        "logging initialized"
    );

    Ok((context, guard))
}

fn build_context(config_adapter: &dyn ConfigAdapter) -> Result<AppContext, AppError> {
    let config = config_adapter.load().map_err(AppError::Other)?;
    let settings = config.shell_settings()?;

    Ok(AppContext::new(config, settings))
}
