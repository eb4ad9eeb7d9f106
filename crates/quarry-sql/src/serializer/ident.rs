use super::{Context, ToSql};

use quarry_core::Result;
use std::fmt;

/// A quoted SQL identifier.
///
/// Dotted names are split and each part quoted on its own, so
/// `sales.orders` becomes `"sales"."orders"`.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> fmt::Display for Ident<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for part in self.0.as_ref().split('.') {
            f.write_str(s)?;
            if part == "*" {
                f.write_str(part)?;
            } else {
                write!(f, "\"{}\"", part.replace('"', "\"\""))?;
            }
            s = ".";
        }
        Ok(())
    }
}

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, _cx: &Context<'_>, dst: &mut String) -> Result<()> {
        dst.push_str(&self.to_string());
        Ok(())
    }
}
