use crate::marker::Marker;
use clipboard::{ClipboardContext, ClipboardProvider};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,

    #[error("clipboard write failed: {0}")]
    Write(String),

    #[error("could not serialize dots: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Renders the dots as a JSON array in placement order.
pub fn dots_to_json(markers: &[Marker]) -> Result<String, ClipboardError> {
    Ok(serde_json::to_string_pretty(markers)?)
}

/// Thin wrapper so a missing system clipboard only disables copying.
pub struct Clipboard {
    context: Option<ClipboardContext>,
}

impl Clipboard {
    pub fn new() -> Self {
        let context = match ClipboardProvider::new() {
            Ok(context) => Some(context),
            Err(err) => {
                tracing::warn!(error = %err, "system clipboard unavailable");
                None
            }
        };
        Self { context }
    }

    pub fn copy_dots(&mut self, markers: &[Marker]) -> Result<usize, ClipboardError> {
        let json = dots_to_json(markers)?;
        let context = self.context.as_mut().ok_or(ClipboardError::Unavailable)?;
        context
            .set_contents(json)
            .map_err(|err| ClipboardError::Write(err.to_string()))?;
        Ok(markers.len())
    }
}
