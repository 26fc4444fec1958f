/// Sum of two signed 32-bit integers with two's-complement wraparound
/// on overflow.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
