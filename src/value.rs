use crate::compat::{String, ToString, Vec, format};

/// Raw value handed to `add`, `remove` and `set`.
///
/// The shape of the input is decided once, when the caller's value is
/// converted with `From`/`Into`:
///
/// ```
/// use urlparams::Value;
///
/// assert_eq!(Value::from(3), Value::Scalar("3".into()));
/// assert_eq!(Value::from(None::<u8>), Value::Absent);
/// assert_eq!(
///     Value::from([4, 5]),
///     Value::List(vec![Value::Scalar("4".into()), Value::Scalar("5".into())])
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    /// No value given: the parameter is a flag
    #[default]
    Absent,
    /// A string or a number in its string form
    Scalar(String),
    /// A list of values, possibly nested
    List(Vec<Value>),
    /// A value shape the query mapping cannot hold (a keyed object)
    Unsupported,
}

/// A raw value after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedValue {
    Flag,
    Text(String),
    /// Flattened list of values
    List(Vec<ListItem>),
    Unsupported,
}

/// One element of a normalized list.
///
/// A flag element is not the same value as the text `"true"`: it never
/// matches a stored value when removing, and a list holding only a flag
/// adds nothing to an existing parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Flag,
    Text(String),
}

impl ListItem {
    /// The text written to the query string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Flag => "true",
            Self::Text(text) => text,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Flag => String::from("true"),
            Self::Text(text) => text,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

/// Normalize a raw value.
///
/// Lists are flattened recursively, absent elements inside a list become
/// [`ListItem::Flag`], and an unsupported element anywhere makes the whole
/// value unsupported.
pub fn parse_value(value: Value) -> ParsedValue {
    match value {
        Value::Absent => ParsedValue::Flag,
        Value::Scalar(text) => ParsedValue::Text(text),
        Value::Unsupported => ParsedValue::Unsupported,
        Value::List(items) => {
            let mut flat = Vec::with_capacity(items.len());
            if flatten_into(&mut flat, items) {
                ParsedValue::List(flat)
            } else {
                ParsedValue::Unsupported
            }
        }
    }
}

/// Returns false if an unsupported value was found.
fn flatten_into(out: &mut Vec<ListItem>, items: Vec<Value>) -> bool {
    for item in items {
        match item {
            Value::Absent => out.push(ListItem::Flag),
            Value::Scalar(text) => out.push(ListItem::Text(text)),
            Value::List(nested) => {
                if !flatten_into(out, nested) {
                    return false;
                }
            }
            Value::Unsupported => return false,
        }
    }
    true
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Absent
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Scalar(value.to_string())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Format a float the way a number prints in a query string:
/// integral values carry no fraction, infinities are spelled out, both
/// zeros print as `0`, and magnitudes below `1e-6` or from `1e21` up use
/// exponent notation with an explicit sign (`1e+21`, `1e-7`).
fn float_to_string(value: f64) -> String {
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return String::from("0");
    }

    let magnitude = value.abs();
    if magnitude.is_nan() || (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Scalar(float_to_string(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Scalar(float_to_string(f64::from(value)))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}
