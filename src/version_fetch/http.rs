use crate::version_fetch::error::FetchError;
use std::io::Read;
use ureq::{Agent, AgentBuilder};

const USER_AGENT: &str = concat!("fetch-redpanda/", env!("CARGO_PKG_VERSION"));

pub struct HttpClient {
    agent: Agent,
    auth: Option<String>,
}

impl HttpClient {
    /// Unauthenticated when no token is supplied.
    pub fn new(token: Option<&str>) -> Self {
        Self {
            agent: AgentBuilder::new().build(),
            auth: token.map(|token| format!("Bearer {token}")),
        }
    }

    pub fn get(&self, url: &str) -> Result<String, FetchError> {
        let mut request = self
            .agent
            .get(url)
            .set("User-Agent", USER_AGENT)
            .set("Accept", "application/vnd.github+json");
        if let Some(auth) = &self.auth {
            request = request.set("Authorization", auth);
        }
        let response = request.call()?;
        let mut body = String::new();
        response.into_reader().read_to_string(&mut body)?;
        Ok(body)
    }
}
