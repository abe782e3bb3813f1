/// Extract the host from a git remote URL.
///
/// Handles the three URL shapes git remotes come in: `ssh://` URLs, scp-like
/// `git@host:owner/repo` URLs, and plain http(s) URLs.
pub fn host_from_url(url: &str) -> Option<String> {
    let url = url.trim_end_matches(".git");

    if url.starts_with("ssh://") {
        host_from_ssh_url_with_scheme(url)
    } else if url.starts_with("git@") {
        host_from_scp_url(url)
    } else if url.starts_with("https://") || url.starts_with("http://") {
        host_from_https_url(url)
    } else {
        None
    }
}

fn host_from_scp_url(url: &str) -> Option<String> {
    // Format: git@github.com:owner/repo
    let url = url.strip_prefix("git@")?;
    let host = url.split(':').next()?;
    if host.is_empty() {
        return None;
    }
    Some(host.to_string())
}

fn host_from_ssh_url_with_scheme(url: &str) -> Option<String> {
    // Format: ssh://git@github.com/owner/repo
    let url = url.strip_prefix("ssh://")?;
    let host_part = url.split('/').next()?;
    let host = host_part.strip_prefix("git@").unwrap_or(host_part);
    if host.is_empty() {
        return None;
    }
    Some(host.to_string())
}

fn host_from_https_url(url: &str) -> Option<String> {
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let host = url.split('/').next()?;
    if host.is_empty() {
        return None;
    }
    Some(host.to_string())
}

/// Whether a remote host is GitHub (github.com or a GHE install).
pub fn is_github_host(host: &str) -> bool {
    let host_lower = host.to_lowercase();
    host_lower == "github.com" || host_lower.contains("github") || host_lower.contains("ghe")
}

/// Whether a remote URL points at a GitHub-hosted repository.
pub fn is_github_url(url: &str) -> bool {
    host_from_url(url)
        .map(|host| is_github_host(&host))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_from_scp_url() {
        let url = "git@github.com:octo/widgets.git";
        assert_eq!(host_from_url(url), Some("github.com".to_string()));
    }

    #[test]
    fn test_host_from_ssh_url_with_scheme() {
        let url = "ssh://git@codeberg.org/octo/widgets.git";
        assert_eq!(host_from_url(url), Some("codeberg.org".to_string()));
    }

    #[test]
    fn test_host_from_https_url() {
        let url = "https://gitlab.com/octo/widgets.git";
        assert_eq!(host_from_url(url), Some("gitlab.com".to_string()));
    }

    #[test]
    fn test_unrecognized_url_has_no_host() {
        assert_eq!(host_from_url("/srv/git/widgets.git"), None);
    }

    #[test]
    fn test_github_hosts() {
        assert!(is_github_host("github.com"));
        assert!(is_github_host("GitHub.com"));
        assert!(is_github_host("github.example.com"));
        assert!(!is_github_host("gitlab.com"));
        assert!(!is_github_host("codeberg.org"));
    }

    #[test]
    fn test_github_url_detection() {
        assert!(is_github_url("git@github.com:octo/widgets.git"));
        assert!(is_github_url("https://github.com/octo/widgets"));
        assert!(!is_github_url("https://gitlab.com/octo/widgets"));
        assert!(!is_github_url("/srv/git/widgets.git"));
    }
}
