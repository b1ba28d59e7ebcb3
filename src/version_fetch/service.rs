use crate::version_fetch::{
    config::FetchConfig,
    error::FetchError,
    http::HttpClient,
    release::{ReleaseInfo, ReleaseRecord, latest_release_info},
};

pub const DOCKER_REPO: &str = "redpanda";
pub const DOCKER_REPO_UNSTABLE: &str = "redpanda-unstable";

/// Outcome of a fetch: what the downstream pipeline consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub version: String,
    pub docker_repo: &'static str,
}

/// Choose version and Docker repo for the requested channel.
///
/// Beta mode prefers the release candidate verbatim; without one it falls
/// back to the stable release, which carries a `v` prefix. The unstable
/// Docker repo is only used when a candidate actually exists.
pub fn resolve(info: &ReleaseInfo, beta: bool) -> Result<Resolution, FetchError> {
    let docker_repo = if beta && info.candidate.is_some() {
        DOCKER_REPO_UNSTABLE
    } else {
        DOCKER_REPO
    };
    let version = match &info.candidate {
        Some(candidate) if beta => candidate.version_str().to_string(),
        _ => format!("v{}", stable_release(info)?.version_str()),
    };
    Ok(Resolution {
        version,
        docker_repo,
    })
}

fn stable_release(info: &ReleaseInfo) -> Result<&ReleaseRecord, FetchError> {
    info.stable.as_ref().ok_or(FetchError::MissingStableRelease)
}

pub struct FetchService;

impl FetchService {
    pub fn resolve_latest(config: &FetchConfig) -> Result<Resolution, FetchError> {
        let client = HttpClient::new(config.token.as_deref());
        let info = latest_release_info(&client, &config.owner, &config.repo)?;
        resolve(&info, config.beta)
    }
}
