use git_version::git_version;

// include -modified if the working tree has uncommitted changes
const COMMIT: &str = git_version!(
    args = ["--abbrev=10", "--always", "--dirty=-modified"],
    fallback = "unknown"
);

fn describe_version() -> String {
    let latest = option_env!("LATEST_TAG").unwrap_or("");
    let ahead = option_env!("COMMITS_AHEAD").unwrap_or("");
    match option_env!("RELEASE_VERSION") {
        Some(tag) if !tag.is_empty() => format!("release {tag}"),
        _ if !latest.is_empty() && !ahead.is_empty() => {
            format!("development branch {ahead} commits ahead of {latest}")
        }
        _ if !latest.is_empty() => format!("development branch ahead of {latest}"),
        _ => format!("development {}", env!("CARGO_PKG_VERSION")),
    }
}

pub fn get_system_info() -> String {
    let build = if cfg!(debug_assertions) {
        "Dev"
    } else {
        "Release"
    };
    format!(
        "{} - {}\nCommit: {COMMIT}\n{build} build",
        env!("CARGO_PKG_NAME"),
        describe_version(),
    )
}
