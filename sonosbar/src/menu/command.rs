//! Re-invocation commands embedded in menu lines
//!
//! BitBar runs `bash=<program>` with `paramN=` values as its arguments. The
//! first two always select the player by address so a click acts on the
//! speaker the line was rendered for.

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: String,
    address: String,
    params: Vec<String>,
}

impl Command {
    pub fn new<I, S>(program: &Path, address: &str, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.display().to_string(),
            address: address.to_string(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bash={} param1=-i param2={}", self.program, self.address)?;
        for (i, param) in self.params.iter().enumerate() {
            write!(f, " param{}={}", i + 3, param)?;
        }
        f.write_str(" terminal=false refresh=true")
    }
}
