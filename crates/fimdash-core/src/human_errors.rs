// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the operator.
//
// Every failure reaching a view boundary is turned into exactly one message
// shown inline (banner or toast). Messages coming from the backend are kept
// verbatim; everything else gets a plain-English summary and a suggestion.

use crate::error::FimError;

/// How the UI should present an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network blip or timeout. Re-triggering the action may succeed.
    Transient,
    /// The operator must do something first (sign in, fix the config).
    ActionRequired,
    /// The backend rejected the request; repeating it will not help.
    Rejected,
}

/// A presentable error.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Main line (shown in the banner / toast).
    pub message: String,
    /// What to try next.
    pub suggestion: String,
    pub severity: Severity,
}

impl HumanError {
    /// Banner text: the message, followed by the suggestion when there is one.
    pub fn banner(&self) -> String {
        if self.suggestion.is_empty() {
            self.message.clone()
        } else {
            format!("{} {}", self.message, self.suggestion)
        }
    }
}

/// Convert a `FimError` into the single message the operator sees.
pub fn humanize_error(err: &FimError) -> HumanError {
    match err {
        FimError::Api { status, message } => humanize_api_error(*status, message),

        FimError::Transport(detail) => {
            let lower = detail.to_ascii_lowercase();
            if lower.contains("connection refused") || lower.contains("connect") {
                HumanError {
                    message: "Could not reach the monitoring backend.".into(),
                    suggestion: "Make sure the backend service is running, then try again.".into(),
                    severity: Severity::Transient,
                }
            } else {
                HumanError {
                    message: "The connection to the backend failed.".into(),
                    suggestion: format!("Try again. ({detail})"),
                    severity: Severity::Transient,
                }
            }
        }

        FimError::Timeout { secs } => HumanError {
            message: format!("The backend did not answer within {secs} seconds."),
            suggestion: "It may be busy. Try again in a moment.".into(),
            severity: Severity::Transient,
        },

        FimError::Decode(_) => HumanError {
            message: "The backend sent data the dashboard could not read.".into(),
            suggestion: "Check that the dashboard and backend versions match.".into(),
            severity: Severity::Rejected,
        },

        FimError::InvalidUrl(url) => HumanError {
            message: "The backend address is not valid.".into(),
            suggestion: format!("Fix `api_base_url` in the settings. (Got: {url})"),
            severity: Severity::ActionRequired,
        },

        FimError::Config(detail) => HumanError {
            message: "The dashboard settings could not be used.".into(),
            suggestion: detail.clone(),
            severity: Severity::ActionRequired,
        },

        FimError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The dashboard could not write its settings file.".into(),
                    suggestion: "Check the permissions of the data directory.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "A local file could not be read or written.".into(),
                    suggestion: "Try again.".into(),
                    severity: Severity::Transient,
                }
            }
        }

        FimError::Serialization(_) => HumanError {
            message: "The dashboard had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            severity: Severity::Transient,
        },
    }
}

fn humanize_api_error(status: u16, message: &str) -> HumanError {
    match status {
        401 | 403 => HumanError {
            message: message.to_string(),
            suggestion: "Please sign in again.".into(),
            severity: Severity::ActionRequired,
        },
        500..=599 => HumanError {
            message: message.to_string(),
            suggestion: String::new(),
            severity: Severity::Transient,
        },
        _ => HumanError {
            message: message.to_string(),
            suggestion: String::new(),
            severity: Severity::Rejected,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_message_is_verbatim() {
        let err = FimError::Api {
            status: 404,
            message: "Log tidak ditemukan".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.message, "Log tidak ditemukan");
        assert_eq!(human.banner(), "Log tidak ditemukan");
        assert_eq!(human.severity, Severity::Rejected);
    }

    #[test]
    fn rejected_session_needs_sign_in() {
        let err = FimError::Api {
            status: 401,
            message: "Token tidak valid".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert_eq!(human.banner(), "Token tidak valid Please sign in again.");
    }

    #[test]
    fn server_error_is_transient() {
        let err = FimError::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(humanize_error(&err).severity, Severity::Transient);
    }

    #[test]
    fn timeout_mentions_duration() {
        let human = humanize_error(&FimError::Timeout { secs: 15 });
        assert!(human.message.contains("15"));
        assert_eq!(human.severity, Severity::Transient);
    }

    #[test]
    fn refused_connection_points_at_backend() {
        let err = FimError::Transport("error trying to connect: Connection refused".into());
        let human = humanize_error(&err);
        assert!(human.message.contains("backend"));
    }
}
