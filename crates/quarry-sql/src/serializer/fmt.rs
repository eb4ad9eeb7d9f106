use super::Context;

use quarry_core::Result;

/// Writes each fragment in turn, propagating the first error.
macro_rules! fmt {
    ($cx:expr, $dst:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_sql($cx, $dst)?;
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()>;
}

impl ToSql for &str {
    fn to_sql(self, _cx: &Context<'_>, dst: &mut String) -> Result<()> {
        dst.push_str(self);
        Ok(())
    }
}

impl ToSql for &String {
    fn to_sql(self, _cx: &Context<'_>, dst: &mut String) -> Result<()> {
        dst.push_str(self);
        Ok(())
    }
}

impl ToSql for u64 {
    fn to_sql(self, _cx: &Context<'_>, dst: &mut String) -> Result<()> {
        dst.push_str(&self.to_string());
        Ok(())
    }
}

impl<T: ToSql> ToSql for Option<T> {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        match self {
            Some(inner) => inner.to_sql(cx, dst),
            None => Ok(()),
        }
    }
}
