use tokio::process::Command;

use crate::application::ports::{ShareRequest, ShareSheet, ShareSheetError};

/// Runs `<program> <path>` with the share metadata in `SHARE_MIME_TYPE`,
/// `SHARE_DIALOG_TITLE` and `SHARE_UTI`.
pub struct CommandShareSheet {
    program: String,
}

impl CommandShareSheet {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait::async_trait]
impl ShareSheet for CommandShareSheet {
    async fn is_available(&self) -> bool {
        !self.program.trim().is_empty()
    }

    async fn share(&self, request: ShareRequest<'_>) -> Result<(), ShareSheetError> {
        tracing::debug!(program = %self.program, path = %request.path.display(), "Launching share command");

        let status = Command::new(&self.program)
            .arg(request.path)
            .env("SHARE_MIME_TYPE", request.mime_type)
            .env("SHARE_DIALOG_TITLE", request.dialog_title)
            .env("SHARE_UTI", request.uti)
            .status()
            .await
            .map_err(|e| ShareSheetError::LaunchFailed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(ShareSheetError::Exited(status.to_string()))
        }
    }
}
