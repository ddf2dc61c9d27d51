//! Printing the generated code.

use std::io::Write;

use crate::Result;
use crate::generator::Code;

/// Label written before the code value.
pub const LABEL: &str = "Code:";

/// Write `Code: <value>` and a newline to `output`, then hand the code back.
pub fn report<W: Write + ?Sized>(output: &mut W, code: Code) -> Result<Code> {
    writeln!(output, "{LABEL} {code}")?;
    output.flush()?;
    Ok(code)
}
