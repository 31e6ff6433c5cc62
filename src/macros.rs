/// Builds a [`Properties`](crate::Properties) document from `key => value`
/// pairs, each added with [`Properties::put`](crate::Properties::put).
///
/// ```rust
/// use properties_edit::properties;
///
/// let props = properties! {
///     "name" => "Alice",
///     "role" => "admin",
/// };
/// assert_eq!(props.to_string(), "name=Alice\nrole=admin");
/// ```
#[macro_export]
macro_rules! properties {
    () => {
        $crate::Properties::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::Properties::new();
        $(
            props.put($key, $value);
        )+
        props
    }};
}
