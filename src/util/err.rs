//! Lifting of module errors into [`Error`](crate::Error).

/// Implements `From<$from>` for [`Error`](crate::Error), wrapping the module
/// error in the named variant. Several pairs may be given at once.
///
/// ```rust,ignore
/// use routers_frechet::graph::GraphError;
/// use routers_frechet::matcher::MatchError;
///
/// routers_frechet::impl_err! {
///     GraphError => Graph,
///     MatchError => Match,
/// }
/// ```
#[macro_export]
macro_rules! impl_err {
    ($($from:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$from> for $crate::Error {
                fn from(value: $from) -> Self {
                    $crate::Error::$variant(value)
                }
            }
        )+
    };
}
