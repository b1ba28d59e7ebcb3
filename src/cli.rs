#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run,
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    UnknownOption(String),
}

pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut iter = args.into_iter();
    let _ = iter.next();
    let Some(first) = iter.next() else {
        return Ok(Command::Run);
    };
    match first.as_str() {
        "--version" | "-V" => Ok(Command::Version),
        "--help" | "-h" => Ok(Command::Help),
        other => Err(CliError::UnknownOption(other.to_string())),
    }
}

pub fn usage() -> &'static str {
    "Usage:\n  fetch-redpanda\n  fetch-redpanda --version\n\nEnvironment:\n  BETA=true                use the latest release candidate when one exists\n  REDPANDA_GITHUB_TOKEN    GitHub token for authenticated API requests"
}

pub fn render_error(error: &CliError) -> String {
    match error {
        CliError::UnknownOption(option) => format!("unknown option: {option}"),
    }
}

pub fn version_line(cargo_version: &str) -> String {
    format!("fetch-redpanda {cargo_version}")
}
