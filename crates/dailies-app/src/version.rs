//! Version string reported by `dailies --version`.

/// Returns `pkg_version (git_hash)`.
///
/// The hash is `unknown` when the build had no git metadata, for example when
/// built from a source archive.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");

    format!("{pkg_version} ({git_hash})")
}
