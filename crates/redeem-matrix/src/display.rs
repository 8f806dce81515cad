//! Diagnostic text dump. Not a stable serialization format.
use std::fmt;
use std::io::{self, Write};

use crate::config::PrintOptions;
use crate::matrix::Matrix;

impl Matrix {
    fn render<W: fmt::Write>(&self, out: &mut W, opts: &PrintOptions) -> fmt::Result {
        for i in 0..self.nrows() {
            let row = self.row_slice(i);
            for (j, v) in row.iter().enumerate() {
                if v.is_nan() {
                    out.write_str("nan")?;
                } else {
                    write!(out, "{:.*}", opts.precision, v)?;
                }
                if opts.trailing_separator || j + 1 != row.len() {
                    out.write_str(&opts.separator)?;
                }
            }
            out.write_char('\n')?;
        }
        Ok(())
    }

    /// Render with custom options.
    pub fn format_with(&self, opts: &PrintOptions) -> String {
        let mut out = String::with_capacity(self.len() * (opts.precision + 4) + self.nrows());
        // writing into a String cannot fail
        let _ = self.render(&mut out, opts);
        out
    }

    pub fn write_to<W: Write>(&self, writer: &mut W, opts: &PrintOptions) -> io::Result<()> {
        writer.write_all(self.format_with(opts).as_bytes())
    }

    /// Dump the matrix to stdout, one tab-separated row per line.
    ///
    /// NaN prints as `nan` and infinities as `inf`/`-inf`.
    pub fn print(&self) {
        print!("{}", self);
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, &PrintOptions::default())
    }
}
