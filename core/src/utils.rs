use std::collections::HashSet;
use std::fmt;
use num_enum::TryFromPrimitive;

/// Render a raw id as its enum variant name, or as hex when unknown.
pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Distinct characters of `text`, in first-occurrence order.
pub fn distinct_in_order(text: &str) -> Vec<char> {
    let mut seen = HashSet::new();
    text.chars().filter(|c| seen.insert(*c)).collect()
}

pub fn is_perfect_square(n: usize) -> bool {
    let root = integer_sqrt(n);
    root * root == n
}

pub fn integer_sqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }
    let mut x = (n as f64).sqrt() as usize;
    // float rounding can land one off either side
    while x * x > n {
        x -= 1;
    }
    while (x + 1) * (x + 1) <= n {
        x += 1;
    }
    x
}

/// Largest factor left after stripping twos and dividing out the small odd
/// factors; used to pick a grid width for alphabets that are not squares.
///
/// `max_factor(26) == 13`, `max_factor(95) == 19`, `max_factor(16) == 2`.
pub fn max_factor(n: usize) -> usize {
    let mut n = n as u64;
    while n > 3 && n & 1 == 0 {
        n >>= 1;
    }

    let mut k: u64 = 3;
    while k * k <= n {
        if n % k == 0 {
            n /= k;
        } else {
            k += 2;
        }
    }
    n as usize
}

/// Non-negative modulo for signed offsets.
#[inline]
pub fn wrap_index(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}
