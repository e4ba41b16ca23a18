use crate::ResolverError;

/// Validates a resource path relative to a location to prevent path traversal
pub fn validate_resource_path(path: &str) -> Result<(), ResolverError> {
    if path.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(ResolverError::InvalidPath(
            "Path contains '..' (path traversal attempt)".to_string(),
        ));
    }

    if path.contains('\0') {
        return Err(ResolverError::InvalidPath(
            "Path contains null byte".to_string(),
        ));
    }

    if path.starts_with('/') || path.starts_with('\\') {
        return Err(ResolverError::InvalidPath(
            "Absolute paths are not allowed".to_string(),
        ));
    }

    // Windows drive letters (C:, D:, etc.)
    if path.len() >= 2 && path.chars().nth(1) == Some(':') {
        return Err(ResolverError::InvalidPath(
            "Drive letters are not allowed".to_string(),
        ));
    }

    Ok(())
}
