use std::io::ErrorKind;
use std::path::Path;

use crate::Error;

mod scene;
mod state;

pub use self::scene::*;
pub use self::state::*;

/// Reads a whole document, treating a missing file as `None`.
pub fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, Error> {
    match std::fs::read(path) {
        Ok(data) => Ok(Some(data)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(Error::io(path, err)),
    }
}
