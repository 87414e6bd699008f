/// Builds a [`Value`](crate::Value) from JSON5-like literal syntax.
///
/// Object keys are string literals or, as in JSON5, bare identifiers.
/// Negative number literals may be written as they are in JSON5; other
/// multi-token expressions must be parenthesized inside arrays and objects.
/// Any leaf is converted with [`to_value`](crate::to_value), and a leaf that
/// cannot be converted becomes `null`.
///
/// ```rust
/// use serde_json5::{json5, Value};
///
/// let id = 7;
/// let value = json5!({
///     id: id,
///     "offset": -2,
///     scaled: (id * 10),
///     tags: ["a", -1.5],
///     meta: {ok: true, none: null},
/// });
///
/// assert_eq!(value["id"].as_i64(), Some(7));
/// assert_eq!(value["offset"].as_i64(), Some(-2));
/// assert_eq!(value["scaled"].as_i64(), Some(70));
/// assert_eq!(value["tags"][1].as_f64(), Some(-1.5));
/// assert_eq!(value["meta"]["none"], Value::Null);
/// ```
#[macro_export]
macro_rules! json5 {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([ $($tt:tt)* ]) => {
        $crate::Value::Array($crate::json5!(@array [] $($tt)*))
    };

    ({}) => {
        $crate::Value::Object($crate::Json5Map::new())
    };

    ({ $($tt:tt)+ }) => {{
        let mut object = $crate::Json5Map::new();
        $crate::json5!(@object object $($tt)+);
        $crate::Value::Object(object)
    }};

    // Elements are munched one at a time so that `-1` stays one element.
    (@array [$($elems:expr,)*]) => {
        vec![$($elems,)*]
    };

    (@array [$($elems:expr,)*] - $num:literal $(, $($rest:tt)*)?) => {
        $crate::json5!(@array [$($elems,)* $crate::json5!(-$num),] $($($rest)*)?)
    };

    (@array [$($elems:expr,)*] $next:tt $(, $($rest:tt)*)?) => {
        $crate::json5!(@array [$($elems,)* $crate::json5!($next),] $($($rest)*)?)
    };

    (@object $object:ident) => {};

    (@object $object:ident $key:literal : - $num:literal $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::json5!(-$num));
        $crate::json5!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:literal : $value:tt $(, $($rest:tt)*)?) => {
        $object.insert($key.to_string(), $crate::json5!($value));
        $crate::json5!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:ident : - $num:literal $(, $($rest:tt)*)?) => {
        $object.insert(stringify!($key).to_string(), $crate::json5!(-$num));
        $crate::json5!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:ident : $value:tt $(, $($rest:tt)*)?) => {
        $object.insert(stringify!($key).to_string(), $crate::json5!($value));
        $crate::json5!(@object $object $($($rest)*)?);
    };

    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}
