use std::fmt;

/// Fatal conditions raised while bringing up the window and GPU.
#[derive(Debug)]
pub enum StartupError {
    /// The platform refused to create the window.
    Window(String),
    /// No adapter/device/surface could be set up for the window.
    Gpu(String),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window(msg) => write!(f, "failed to create window: {msg}"),
            Self::Gpu(msg) => write!(f, "failed to initialize GPU: {msg}"),
        }
    }
}

impl std::error::Error for StartupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_stage() {
        let e = StartupError::Window("no display".into());
        assert_eq!(e.to_string(), "failed to create window: no display");
        let e = StartupError::Gpu("no adapter".into());
        assert_eq!(e.to_string(), "failed to initialize GPU: no adapter");
    }

    #[test]
    fn survives_anyhow_round_trip() {
        let err = anyhow::Error::new(StartupError::Window("x".into()));
        assert!(matches!(err.downcast_ref::<StartupError>(), Some(StartupError::Window(_))));
    }
}
