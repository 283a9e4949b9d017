use std::path::Path;

/// Presentation details passed along when offering a file to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest<'a> {
    pub path: &'a Path,
    pub mime_type: &'a str,
    pub dialog_title: &'a str,
    pub uti: &'a str,
}

#[async_trait::async_trait]
pub trait ShareSheet: Send + Sync {
    async fn is_available(&self) -> bool;

    async fn share(&self, request: ShareRequest<'_>) -> Result<(), ShareSheetError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ShareSheetError {
    #[error("share launch failed: {0}")]
    LaunchFailed(String),
    #[error("share exited with {0}")]
    Exited(String),
}
