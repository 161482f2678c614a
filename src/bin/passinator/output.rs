use std::fmt::{self, Display};
use std::io::{self, Write};

use passinator::Secret;

const BANNER_RULE_WIDTH: usize = 53;
const DELIMITER_WIDTH: usize = 24;

pub fn display_banner(mut output: impl Write) -> io::Result<()> {
    writeln!(
        output,
        "Welcome to Pass-inator - Your Secure Password Generator"
    )?;
    writeln!(output, "{}", Divider(BANNER_RULE_WIDTH))?;
    Ok(())
}

/// Print the password between two delimiter lines.
pub fn display_password(password: &Secret, mut output: impl Write) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Your generated password is:")?;
    writeln!(output, "{}", Divider(DELIMITER_WIDTH))?;
    writeln!(output, "{}", console::style(password.as_str()).bold())?;
    writeln!(output, "{}", Divider(DELIMITER_WIDTH))?;
    output.flush()
}

struct Divider(usize);

impl Display for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            write!(f, "-")?;
        }
        Ok(())
    }
}
