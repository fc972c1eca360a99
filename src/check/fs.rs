//! Filesystem checks. Symlinks are followed.

use std::path::Path;

use super::{Check, Expect};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
   Read,
   Write,
}

impl Expect<'_> {
   pub fn is_file(&self, path: impl AsRef<Path>) -> Result<()> {
      self.ensure(Check::IsFile, path.as_ref().is_file(), "File must be valid")
   }

   pub fn is_readable_file(&self, path: impl AsRef<Path>) -> Result<()> {
      let path = path.as_ref();
      let passed = path.is_file() && accessible(path, Access::Read);
      self.ensure(Check::IsReadableFile, passed, "File must be readable")
   }

   pub fn is_writable_file(&self, path: impl AsRef<Path>) -> Result<()> {
      let path = path.as_ref();
      let passed = path.is_file() && accessible(path, Access::Write);
      self.ensure(Check::IsWritableFile, passed, "File must be writable")
   }

   /// The path exists and is a directory.
   pub fn is_path(&self, path: impl AsRef<Path>) -> Result<()> {
      self.ensure(Check::IsPath, path.as_ref().is_dir(), "Path must be valid")
   }

   pub fn is_readable_path(&self, path: impl AsRef<Path>) -> Result<()> {
      let path = path.as_ref();
      let passed = path.is_dir() && accessible(path, Access::Read);
      self.ensure(Check::IsReadablePath, passed, "Path must be readable")
   }

   pub fn is_writable_path(&self, path: impl AsRef<Path>) -> Result<()> {
      let path = path.as_ref();
      let passed = path.is_dir() && accessible(path, Access::Write);
      self.ensure(Check::IsWritablePath, passed, "Path must be writable")
   }
}

/// Asks the kernel whether the current process may read or write `path`.
#[cfg(unix)]
fn accessible(path: &Path, access: Access) -> bool {
   use std::{ffi::CString, os::unix::ffi::OsStrExt};

   let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
      return false;
   };
   let mode = match access {
      Access::Read => libc::R_OK,
      Access::Write => libc::W_OK,
   };
   // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
   let rc = unsafe { libc::access(c_path.as_ptr(), mode) };
   rc == 0
}

#[cfg(not(unix))]
fn accessible(path: &Path, access: Access) -> bool {
   use std::fs;

   match access {
      Access::Read if path.is_dir() => fs::read_dir(path).is_ok(),
      Access::Read => fs::File::open(path).is_ok(),
      Access::Write => fs::metadata(path).is_ok_and(|meta| !meta.permissions().readonly()),
   }
}
