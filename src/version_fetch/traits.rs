#[derive(Debug, Default)]
pub struct SystemFetchEnv;

pub trait FetchEnv {
    fn get(&self, key: &str) -> Option<String>;
}

impl FetchEnv for SystemFetchEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
