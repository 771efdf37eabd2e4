//! Error helper functions for turning per-file failures into short readable reasons

use std::io;

/// Check if an IO error is a permission denied error
pub fn is_permission_denied(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::PermissionDenied
}

/// Check if an IO error is a "not found" error
pub fn is_not_found(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

/// Check if an IO error came from decoding non UTF-8 content
pub fn is_invalid_text(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::InvalidData
}

/// Find the innermost `io::Error` in an anyhow chain
pub fn find_io_error(err: &anyhow::Error) -> Option<&io::Error> {
    err.chain().find_map(|cause| cause.downcast_ref::<io::Error>())
}

/// Describe why a file could not be processed.
///
/// The context message (which names the operation) is kept, and the
/// underlying cause is rewritten in plain terms where it is recognised.
pub fn describe_failure(err: &anyhow::Error) -> String {
    let Some(io_err) = find_io_error(err) else {
        return format!("{:#}", err);
    };

    let cause = if is_permission_denied(io_err) {
        "permission denied".to_string()
    } else if is_not_found(io_err) {
        "file disappeared during the sweep".to_string()
    } else if is_invalid_text(io_err) {
        "content is not valid UTF-8 text".to_string()
    } else {
        io_err.to_string()
    };

    format!("{} ({})", err, cause)
}
