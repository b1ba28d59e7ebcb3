use crate::version_fetch::error::FetchError;
use crate::version_fetch::http::HttpClient;
use semver::Version;

#[derive(Debug, Clone)]
pub struct GitHubRelease {
    pub tag_name: String,
    pub prerelease: bool,
    pub draft: bool,
}

/// One release channel entry, with the tag parsed for ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRecord {
    pub tag: String,
    pub version: Version,
}

impl ReleaseRecord {
    /// Version as published, without the leading `v`.
    pub fn version_str(&self) -> &str {
        let trimmed = self.tag.trim();
        trimmed.strip_prefix('v').unwrap_or(trimmed)
    }
}

/// Latest release per channel; either side may be absent.
#[derive(Debug, Clone, Default)]
pub struct ReleaseInfo {
    pub stable: Option<ReleaseRecord>,
    pub candidate: Option<ReleaseRecord>,
}

pub fn parse_version_tag(tag: &str) -> Result<Version, semver::Error> {
    let trimmed = tag.trim();
    let normalized = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(normalized)
}

pub fn fetch_releases(
    client: &HttpClient,
    owner: &str,
    repo: &str,
) -> Result<Vec<GitHubRelease>, FetchError> {
    let url = format!("https://api.github.com/repos/{owner}/{repo}/releases?per_page=100");
    let body = client.get(&url)?;
    parse_releases_json(&body)
}

pub fn parse_releases_json(body: &str) -> Result<Vec<GitHubRelease>, FetchError> {
    let json = serde_json::from_str::<serde_json::Value>(body)?;
    let Some(items) = json.as_array() else {
        if let Some(message) = json.get("message").and_then(|value| value.as_str()) {
            return Err(FetchError::ApiMessage(message.to_string()));
        }
        return Err(FetchError::ApiMessage("unexpected response".to_string()));
    };
    let mut releases = Vec::new();
    for item in items {
        let tag_name = item
            .get("tag_name")
            .and_then(|value| value.as_str())
            .ok_or(FetchError::MissingField("tag_name"))?;
        let prerelease = item
            .get("prerelease")
            .and_then(|value| value.as_bool())
            .ok_or(FetchError::MissingField("prerelease"))?;
        let draft = item
            .get("draft")
            .and_then(|value| value.as_bool())
            .ok_or(FetchError::MissingField("draft"))?;
        releases.push(GitHubRelease {
            tag_name: tag_name.to_string(),
            prerelease,
            draft,
        });
    }
    Ok(releases)
}

/// Pick the highest stable and highest release-candidate version from the list.
/// Drafts and tags that do not parse as semver are skipped.
pub fn select_release_info(releases: &[GitHubRelease]) -> ReleaseInfo {
    let mut info = ReleaseInfo::default();
    for release in releases.iter().filter(|release| !release.draft) {
        let Ok(version) = parse_version_tag(&release.tag_name) else {
            continue;
        };
        let record = ReleaseRecord {
            tag: release.tag_name.clone(),
            version,
        };
        let slot = if release.prerelease {
            &mut info.candidate
        } else {
            &mut info.stable
        };
        let replace = match slot {
            None => true,
            Some(current) => record.version > current.version,
        };
        if replace {
            *slot = Some(record);
        }
    }
    info
}

pub fn latest_release_info(
    client: &HttpClient,
    owner: &str,
    repo: &str,
) -> Result<ReleaseInfo, FetchError> {
    let releases = fetch_releases(client, owner, repo)?;
    let info = select_release_info(&releases);
    if info.stable.is_none() && info.candidate.is_none() {
        return Err(FetchError::NoUsableRelease(
            "no release with a parseable version tag".to_string(),
        ));
    }
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(tag: &str, prerelease: bool, draft: bool) -> GitHubRelease {
        GitHubRelease {
            tag_name: tag.to_string(),
            prerelease,
            draft,
        }
    }

    #[test]
    fn parse_version_tag_accepts_v_prefix() {
        let version = parse_version_tag("v24.2.1").unwrap();

        assert_eq!(version, Version::new(24, 2, 1));
    }

    #[test]
    fn parse_version_tag_accepts_release_candidate() {
        let version = parse_version_tag("v24.3.1-rc3").unwrap();

        assert_eq!(version.to_string(), "24.3.1-rc3");
    }

    #[test]
    fn version_str_strips_v_prefix() {
        let record = ReleaseRecord {
            tag: "v24.2.1".to_string(),
            version: Version::new(24, 2, 1),
        };

        assert_eq!(record.version_str(), "24.2.1");
    }

    #[test]
    fn parse_releases_json_reads_required_fields() {
        let body = r#"[
            {"tag_name":"v24.2.1","prerelease":false,"draft":false},
            {"tag_name":"v24.3.1-rc1","prerelease":true,"draft":false}
        ]"#;

        let releases = parse_releases_json(body).unwrap();

        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].tag_name, "v24.2.1");
        assert!(releases[1].prerelease);
    }

    #[test]
    fn parse_releases_json_reports_api_message() {
        let body = r#"{"message":"API rate limit exceeded"}"#;

        let error = parse_releases_json(body).unwrap_err();

        assert!(matches!(error, FetchError::ApiMessage(_)));
    }

    #[test]
    fn parse_releases_json_rejects_missing_tag() {
        let body = r#"[{"prerelease":false,"draft":false}]"#;

        let error = parse_releases_json(body).unwrap_err();

        assert!(matches!(error, FetchError::MissingField("tag_name")));
    }

    #[test]
    fn select_release_info_picks_highest_per_channel() {
        let releases = vec![
            release("v24.1.9", false, false),
            release("v24.2.1", false, false),
            release("v24.3.1-rc1", true, false),
            release("v24.3.1-rc3", true, false),
        ];

        let info = select_release_info(&releases);

        assert_eq!(info.stable.unwrap().tag, "v24.2.1");
        assert_eq!(info.candidate.unwrap().tag, "v24.3.1-rc3");
    }

    #[test]
    fn select_release_info_skips_drafts_and_invalid_tags() {
        let releases = vec![
            release("nightly", false, false),
            release("v25.1.1", false, true),
            release("v24.2.1", false, false),
        ];

        let info = select_release_info(&releases);

        assert_eq!(info.stable.unwrap().tag, "v24.2.1");
        assert!(info.candidate.is_none());
    }

    #[test]
    fn select_release_info_handles_empty_list() {
        let info = select_release_info(&[]);

        assert!(info.stable.is_none());
        assert!(info.candidate.is_none());
    }
}
