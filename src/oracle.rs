use log::warn;
use thiserror::Error;

pub const MISSING_CREDENTIAL_REPLY: &str =
    "The Oracle's connection is not yet established (Missing API Key).";
pub const SILENT_REPLY: &str = "The Oracle is silent today...";
pub const FAILURE_REPLY: &str =
    "The winds of the VoxelVerse are too chaotic to hear the Oracle right now.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdviceError {
    #[error("No credential configured for the advice service")]
    MissingCredential,

    #[error("Advice service request failed: {0}")]
    Transport(String),

    #[error("Advice service returned a malformed response: {0}")]
    Malformed(String),

    #[error("Advice service returned an empty response")]
    Empty,
}

/// Text-in, text-out advisor living outside the game core.
pub trait AdviceService {
    fn ask(&self, prompt: &str, context: &str) -> Result<String, AdviceError>;
}

/// Queries `service` and never fails: every error becomes an in-character
/// fallback line. Game state is not involved either way.
pub fn ask_oracle(service: &dyn AdviceService, prompt: &str, context: &str) -> String {
    match service.ask(prompt, context) {
        Ok(reply) if !reply.trim().is_empty() => reply,
        Ok(_) | Err(AdviceError::Empty) => SILENT_REPLY.to_string(),
        Err(AdviceError::MissingCredential) => MISSING_CREDENTIAL_REPLY.to_string(),
        Err(err) => {
            warn!("Advice service error: {}", err);
            FAILURE_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<String, AdviceError>);

    impl AdviceService for Fixed {
        fn ask(&self, _prompt: &str, _context: &str) -> Result<String, AdviceError> {
            self.0.clone()
        }
    }

    struct Echo;

    impl AdviceService for Echo {
        fn ask(&self, prompt: &str, context: &str) -> Result<String, AdviceError> {
            Ok(format!("{prompt} | {context}"))
        }
    }

    #[test]
    fn test_passes_reply_through() {
        assert_eq!(ask_oracle(&Echo, "how?", "Mode: survival."), "how? | Mode: survival.");
    }

    #[test]
    fn test_failures_become_fallbacks() {
        let cases = [
            (Err(AdviceError::MissingCredential), MISSING_CREDENTIAL_REPLY),
            (Err(AdviceError::Transport("timeout".into())), FAILURE_REPLY),
            (Err(AdviceError::Malformed("{".into())), FAILURE_REPLY),
            (Err(AdviceError::Empty), SILENT_REPLY),
            (Ok("   ".to_string()), SILENT_REPLY),
        ];
        for (result, expected) in cases {
            assert_eq!(ask_oracle(&Fixed(result), "hi", ""), expected);
        }
    }
}
