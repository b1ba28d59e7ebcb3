use crate::version_fetch::traits::FetchEnv;

pub const BETA_VAR: &str = "BETA";
pub const TOKEN_VAR: &str = "REDPANDA_GITHUB_TOKEN";

pub const GITHUB_OWNER: &str = "redpanda-data";
pub const GITHUB_REPO: &str = "redpanda";

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub owner: String,
    pub repo: String,
    pub beta: bool,
    pub token: Option<String>,
}

impl FetchConfig {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        beta: bool,
        token: Option<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            beta,
            token,
        }
    }

    /// Beta mode requires the exact value `true`; anything else is stable mode.
    pub fn from_env(env: &dyn FetchEnv) -> Self {
        let beta = env
            .get(BETA_VAR)
            .is_some_and(|value| value == "true");
        let token = env
            .get(TOKEN_VAR)
            .filter(|value| !value.trim().is_empty());
        Self::new(GITHUB_OWNER, GITHUB_REPO, beta, token)
    }
}
