//! Boolean coercion for predicate results.
//!
//! [`not`](super::not), [`and`](super::and) and [`or`](super::or) accept
//! predicates whose result is any [`Truthy`] value, not only `bool`.

/// A value that can be coerced to a boolean.
///
/// # Examples
///
/// ```
/// use fpkit::combinator::Truthy;
///
/// assert!(true.is_truthy());
/// assert!(!0_u8.is_truthy());
/// assert!(Some(0).is_truthy());
/// assert!(!"".is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> Truthy for Result<T, E> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_ok()
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! impl_truthy_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    };
}

impl_truthy_for_float!(f32, f64);

/// JSON truthiness: `null`, `false`, `0`, `NaN` and `""` are false.
#[cfg(feature = "select")]
impl Truthy for serde_json::Value {
    fn is_truthy(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|float| float.is_truthy()),
            Value::String(text) => text.is_truthy(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(-7, true)]
    fn test_integer_truthiness(#[case] value: i64, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(f64::NAN, false)]
    #[case(0.5, true)]
    fn test_float_truthiness(#[case] value: f64, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn test_wrappers() {
        assert!(Some(false).is_truthy());
        assert!(!None::<i32>.is_truthy());
        assert!(Ok::<i32, ()>(0).is_truthy());
        assert!(!Err::<i32, ()>(()).is_truthy());
        assert!(!().is_truthy());
        assert!((&&true).is_truthy());
    }

    #[cfg(feature = "select")]
    #[rstest]
    #[case(serde_json::json!(null), false)]
    #[case(serde_json::json!(false), false)]
    #[case(serde_json::json!(0), false)]
    #[case(serde_json::json!(""), false)]
    #[case(serde_json::json!("0"), true)]
    #[case(serde_json::json!(2.5), true)]
    #[case(serde_json::json!([]), true)]
    #[case(serde_json::json!({}), true)]
    fn test_json_truthiness(#[case] value: serde_json::Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }
}
