/// Wrap-to-signed-32: keep the low 32 bits of `x` and reinterpret them as
/// two's-complement. `wrap_s32(0xFFFF_FFFF) == -1`, `wrap_s32(1 << 32) == 0`.
#[inline]
pub fn wrap_s32(x: i64) -> i32 {
    x as i32
}
