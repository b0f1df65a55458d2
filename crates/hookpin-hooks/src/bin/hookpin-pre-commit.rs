// Rust guideline compliant 2026-02-06

//! CLI entry point for Hookpin pre-commit hook.

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let repo_path = std::env::current_dir()?;
    hookpin_hooks::pre_commit_hook(&repo_path)?;
    Ok(())
}
