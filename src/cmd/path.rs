//! `precheck path`: run a filesystem check.

use std::path::Path;

use crate::{Check, Error, Expect, Result, cmd::parse_check};

/// Executes the path command against `expect`.
pub fn execute(expect: Expect<'_>, check: &str, path: &Path) -> Result<()> {
   let check = parse_check(check)?;
   match check {
      Check::IsFile => expect.is_file(path),
      Check::IsReadableFile => expect.is_readable_file(path),
      Check::IsWritableFile => expect.is_writable_file(path),
      Check::IsPath => expect.is_path(path),
      Check::IsReadablePath => expect.is_readable_path(path),
      Check::IsWritablePath => expect.is_writable_path(path),
      other => Err(Error::Usage(format!(
         "{other} does not take a path; use `precheck value {other} <JSON>`"
      ))),
   }?;
   tracing::debug!(%check, path = %path.display(), "check passed");
   Ok(())
}
