//! Path resolution implementation

/// Resolves a user-supplied path token against the current directory.
///
/// Only a single leading `..` token is recognized specially; multi-segment
/// relative inputs containing `..` pass through structurally unresolved.
/// This is a deliberate simplification, not general path algebra.
pub fn resolve_path(input: &str, current: &str) -> String {
    if input.is_empty() || input == "." {
        return current.to_string();
    }

    if input == ".." {
        if current == "/" {
            return "/".to_string();
        }
        let parts: Vec<&str> = current.trim_matches('/').split('/').collect();
        return format!("/{}", parts[..parts.len() - 1].join("/"));
    }

    if input.starts_with('/') {
        return input.to_string();
    }

    if current == "/" {
        format!("/{}", input)
    } else {
        format!("{}/{}", current, input)
    }
}

/// Normalizes a resolved path before lookup: an empty path becomes the
/// root, and any trailing `/` other than the bare root is stripped.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    if path != "/" && path.ends_with('/') {
        path.trim_end_matches('/').to_string()
    } else {
        path.to_string()
    }
}
