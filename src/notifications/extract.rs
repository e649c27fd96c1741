// SPDX-License-Identifier: MPL-2.0
//! Turning an error value into toast description text.

use std::error::Error;

/// Produces a displayable description for an error.
///
/// Implementations must be total: every error yields some text.
pub trait ExtractError {
    fn extract(&self, error: &(dyn Error + 'static)) -> String;
}

impl<F> ExtractError for F
where
    F: Fn(&(dyn Error + 'static)) -> String,
{
    fn extract(&self, error: &(dyn Error + 'static)) -> String {
        self(error)
    }
}

/// Joins the messages of an error and its `source()` chain with `": "`.
///
/// A source already appended to the previous message as `": <source>"`
/// (the usual `"{context}: {0}"` wrapper form) is skipped, as are empty
/// messages. When nothing is left, the `Debug` form is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainExtractor;

impl ExtractError for ChainExtractor {
    fn extract(&self, error: &(dyn Error + 'static)) -> String {
        let mut parts: Vec<String> = Vec::new();
        let mut current = Some(error);

        while let Some(err) = current {
            let message = err.to_string();
            let repeated = parts.last().is_some_and(|prev| embeds_source(prev, &message));
            if !message.is_empty() && !repeated {
                parts.push(message);
            }
            current = err.source();
        }

        if parts.is_empty() {
            format!("{error:?}")
        } else {
            parts.join(": ")
        }
    }
}

fn embeds_source(outer: &str, source: &str) -> bool {
    outer == source
        || outer
            .strip_suffix(source)
            .is_some_and(|head| head.ends_with(": "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Wrapped {
        message: &'static str,
        source: Option<std::io::Error>,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.message)
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.source.as_ref().map(|e| e as &(dyn Error + 'static))
        }
    }

    #[test]
    fn single_error_uses_its_message() {
        let err = std::io::Error::other("connection reset");
        assert_eq!(ChainExtractor.extract(&err), "connection reset");
    }

    #[test]
    fn source_chain_is_joined() {
        let err = Wrapped {
            message: "request failed",
            source: Some(std::io::Error::other("connection reset")),
        };
        assert_eq!(ChainExtractor.extract(&err), "request failed: connection reset");
    }

    #[test]
    fn source_already_in_message_is_skipped() {
        let err = Wrapped {
            message: "request failed: connection reset",
            source: Some(std::io::Error::other("connection reset")),
        };
        assert_eq!(ChainExtractor.extract(&err), "request failed: connection reset");
    }

    #[test]
    fn source_matching_only_a_word_of_the_message_is_kept() {
        let err = Wrapped {
            message: "upload failed",
            source: Some(std::io::Error::other("failed")),
        };
        assert_eq!(ChainExtractor.extract(&err), "upload failed: failed");
    }

    #[test]
    fn identical_source_message_is_skipped() {
        let err = Wrapped {
            message: "connection reset",
            source: Some(std::io::Error::other("connection reset")),
        };
        assert_eq!(ChainExtractor.extract(&err), "connection reset");
    }

    #[test]
    fn empty_message_falls_back_to_debug() {
        let err = Wrapped {
            message: "",
            source: None,
        };
        let text = ChainExtractor.extract(&err);
        assert!(text.starts_with("Wrapped"), "got {text}");
    }

    #[test]
    fn closures_are_extractors() {
        let upper = |e: &(dyn Error + 'static)| e.to_string().to_uppercase();
        let err = std::io::Error::other("nope");
        assert_eq!(upper.extract(&err), "NOPE");
    }
}
