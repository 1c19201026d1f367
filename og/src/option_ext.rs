pub trait OptionExt<T> {
    /// Treat `Some` as the failure case: `Some(e)` becomes `Err(e)`, `None`
    /// becomes `Ok(ok)`.
    fn err_or<T2>(self, ok: T2) -> Result<T2, T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn err_or<T2>(self, ok: T2) -> Result<T2, T> {
        match self {
            Some(v) => Err(v),
            None => Ok(ok),
        }
    }
}
