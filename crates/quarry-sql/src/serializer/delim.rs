use super::{Context, ToSql};

use quarry_core::Result;

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// Delimited by an arbitrary separator
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        Delimited(self.0, ", ").to_sql(cx, dst)
    }
}

impl<L> ToSql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        let mut s = "";
        for i in self.0 {
            fmt!(cx, dst, s i);
            s = self.1;
        }
        Ok(())
    }
}
