mod report;
mod summary;

pub(crate) use report::{format_abort, format_report};
pub(crate) use summary::format_summary;

/// Renders an error and its sources on one line, joined by `: `.
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
