use std::fs;
use std::io;
use std::path::Path;

use log::trace;

mod macros;

pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read_to_string(path)
}
