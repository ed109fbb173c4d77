/// Wrap the error of a result into a contract-level variant, boxing the cause
/// as its `source`. Any error with an `Into<Error>` conversion can be wrapped,
/// so raw OpenDAL and IO failures need no intermediate `?`.
///
/// ```ignore
/// wrap_err!(file.read().await, ReadFailed { path: path.to_string() })?
/// ```
#[macro_export]
macro_rules! wrap_err {
    ($expr:expr, $variant:ident { $($field:ident : $value:expr),* $(,)? }) => {{
        $expr.map_err(|e| {
            let src: $crate::error::Error = ::core::convert::Into::into(e);
            $crate::error::Error::$variant { $($field: $value),*, source: Box::new(src) }
        })
    }};
}
