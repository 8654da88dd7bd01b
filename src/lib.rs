// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! A one-trick crate backing the `welcome` binary.
//!
//! The binary's entire contract is writing [GREETING] followed by a newline
//! to standard output and exiting with status 0. [write_greeting] is the
//! emit path, generic over the writer so it can be exercised against a
//! buffer.
//!
//! ```
//! use welcome::write_greeting;
//! # use anyhow::Result;
//! # fn main() -> Result<()> {
//! let mut out = Vec::new();
//! write_greeting(&mut out)?;
//! assert_eq!(b"Hello and welcome!\n", out.as_slice());
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use anyhow::Result;

/// The greeting, without its trailing newline.
pub const GREETING: &str = "Hello and welcome!";

/// Writes [GREETING] and a newline to `w`, then flushes so callers never
/// need to.
pub fn write_greeting<W: Write>(w: &mut W) -> Result<()> {
    writeln!(w, "{GREETING}")?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_greeting_text() {
        assert_eq!("Hello and welcome!", GREETING);
    }

    #[test]
    fn test_write_greeting() {
        let mut out = Vec::new();
        write_greeting(&mut out).expect("write");
        assert_eq!(b"Hello and welcome!\n", out.as_slice());
    }

    #[test]
    fn test_write_greeting_emits_once() {
        let mut out = Vec::new();
        write_greeting(&mut out).expect("write");
        assert_eq!(1, out.iter().filter(|&&b| b == b'\n').count());
    }
}
