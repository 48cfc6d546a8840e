//! Result type for the binary.
//!
//! Library code returns [`crate::error::Result`]; the CLI entry point
//! reports through `color-eyre` for colored, contextual error output.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used by the binary.
///
/// Library errors convert into it with `?`, and `.wrap_err()` adds context
/// as they propagate:
///
/// ```rust,ignore
/// use color_eyre::eyre::Context;
///
/// fn run(args: &Args) -> Result<()> {
///     let token = args.get_api_token().wrap_err("no credential configured")?;
///     Ok(())
/// }
/// ```
pub type Result<T> = EyreResult<T>;
