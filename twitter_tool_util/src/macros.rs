#[macro_export]
macro_rules! opt {
    (, $default:ident) => {
        $default
    };
    ($optional:expr, $default:ident) => {
        $optional
    };
}

#[macro_export]
macro_rules! params_internal {
    ($vec:ident, required, $key:expr, $val:expr) => {
        $vec.push(($key, $val.to_string()));
    };
}

/// Build the query parameters of a REST endpoint as `(String, String)` pairs,
/// in declaration order. The same pairs feed both the URL and the OAuth signature.
/// ```
/// # use twitter_tool_util::build_params;
/// let slug = "rustaceans";
/// let params = build_params! {
///     required slug,
///     required cursor => -1,
/// };
/// assert_eq!(params, vec![("slug".to_string(), "rustaceans".to_string()), ("cursor".to_string(), "-1".to_string())]);
/// ```
#[macro_export]
macro_rules! build_params {
    (
        $(
            $kind:ident $name:ident $( => $val:expr )?
        ),+ $(,)?
    ) => {
        {
            let mut params: Vec<(String, String)> = Vec::new();
            $(
                $crate::params_internal!(
                    params,
                    $kind,
                    stringify!($name).to_string(),
                    $crate::opt!($( $val )?, $name)
                );
            )+
            params
        }
    };
}
