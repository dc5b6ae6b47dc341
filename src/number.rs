//! Canonical decimal rendering of numeric fields

/// A value that can be written as a numeric CSV field.
///
/// Numbers are never quoted. `None` stands for a null value and renders as
/// an empty field.
pub trait CsvNumber {
    fn to_field(&self) -> Option<String>;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl CsvNumber for $ty {
                fn to_field(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl CsvNumber for f32 {
    fn to_field(&self) -> Option<String> {
        Some(format_float(self.is_nan(), self.is_infinite(), *self < 0.0, self.to_string()))
    }
}

impl CsvNumber for f64 {
    fn to_field(&self) -> Option<String> {
        Some(format_float(self.is_nan(), self.is_infinite(), *self < 0.0, self.to_string()))
    }
}

impl CsvNumber for serde_json::Number {
    fn to_field(&self) -> Option<String> {
        if let Some(i) = self.as_i64() {
            i.to_field()
        } else if let Some(u) = self.as_u64() {
            u.to_field()
        } else if let Some(f) = self.as_f64() {
            f.to_field()
        } else {
            Some(self.to_string())
        }
    }
}

impl<T: CsvNumber> CsvNumber for Option<T> {
    fn to_field(&self) -> Option<String> {
        self.as_ref().and_then(T::to_field)
    }
}

impl<T: CsvNumber + ?Sized> CsvNumber for &T {
    fn to_field(&self) -> Option<String> {
        (**self).to_field()
    }
}

/// Floating values always carry a decimal point so they read back as floats
fn format_float(nan: bool, infinite: bool, negative: bool, mut text: String) -> String {
    if nan {
        return "NaN".to_string();
    }
    if infinite {
        return if negative { "-Infinity" } else { "Infinity" }.to_string();
    }
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}
