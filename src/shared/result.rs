/// Type alias for Result with anyhow::Error as the error type.
/// Adapters and use cases return this; the domain raises typed
/// `LicenseCheckError`s that convert into it with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
