/// Failures reported by the platform layer.
///
/// Everything except [`Error::MessageRetrieval`] can only happen while the
/// window is being set up.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("RegisterClass() failed: Cannot register window class.")]
    RegisterClass,
    #[error("CreateWindow() failed: Cannot create a window.")]
    CreateWindow,
    #[error("ChoosePixelFormat() failed: Cannot find a suitable pixel format.")]
    ChoosePixelFormat,
    #[error("SetPixelFormat() failed: Cannot set format specified.")]
    SetPixelFormat,
    #[error("wglCreateContext() failed: Cannot create a rendering context.")]
    CreateContext,
    #[error("GetMessage() failed: Cannot read the message queue.")]
    MessageRetrieval,
    #[error("No windowing backend is available for this platform.")]
    Unsupported,
}

impl Error {
    /// True for failures that happen before the message loop starts.
    #[must_use]
    pub fn is_startup(&self) -> bool {
        !matches!(self, Self::MessageRetrieval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_retrieval_is_a_runtime_failure() {
        assert!(Error::CreateWindow.is_startup());
        assert!(Error::SetPixelFormat.is_startup());
        assert!(Error::Unsupported.is_startup());
        assert!(!Error::MessageRetrieval.is_startup());
    }

    #[test]
    fn messages_name_the_failed_call() {
        assert_eq!(
            Error::ChoosePixelFormat.to_string(),
            "ChoosePixelFormat() failed: Cannot find a suitable pixel format."
        );
    }
}
