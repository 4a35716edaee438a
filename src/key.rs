use crate::error::Error;

/// A value that can be assigned to a container.
///
/// The distributor never inspects a key beyond its canonical textual form:
/// every hash strategy operates on the text returned by [`Key::canonical`],
/// so any type with a stable textual representation can participate.
///
/// String-like keys (`str`, `String`, `char`) render in single-quoted form,
/// so `"a"` canonicalizes to `'a'`. Numeric and boolean keys render as their
/// plain text form. A key without a stable textual form fails with
/// [`Error::UnsupportedKey`] before any hashing happens.
pub trait Key {
    /// The canonical textual form of this key.
    fn canonical(&self) -> Result<String, Error>;
}

impl Key for str {
    fn canonical(&self) -> Result<String, Error> {
        Ok(format!("'{}'", self))
    }
}

impl Key for String {
    fn canonical(&self) -> Result<String, Error> {
        self.as_str().canonical()
    }
}

impl Key for char {
    fn canonical(&self) -> Result<String, Error> {
        Ok(format!("'{}'", self))
    }
}

impl Key for bool {
    fn canonical(&self) -> Result<String, Error> {
        Ok(self.to_string())
    }
}

macro_rules! integer_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Key for $ty {
                fn canonical(&self) -> Result<String, Error> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

integer_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Key for $ty {
                fn canonical(&self) -> Result<String, Error> {
                    // NaN and infinities have no canonical textual form.
                    if self.is_finite() {
                        Ok(self.to_string())
                    } else {
                        Err(Error::UnsupportedKey)
                    }
                }
            }
        )*
    };
}

float_key!(f32, f64);

impl<T: Key + ?Sized> Key for &T {
    fn canonical(&self) -> Result<String, Error> {
        (**self).canonical()
    }
}
