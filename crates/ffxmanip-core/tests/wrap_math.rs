use ffxmanip_core::seed::wrap::wrap_s32;

#[test]
fn sign_boundary_goes_negative() {
    assert_eq!(wrap_s32(0x8000_0000), i32::MIN);
}

#[test]
fn all_low_bits_set_is_minus_one() {
    assert_eq!(wrap_s32(0xFFFF_FFFF), -1);
}

#[test]
fn bit_33_wraps_to_zero() {
    assert_eq!(wrap_s32(1 << 32), 0);
}

#[test]
fn total_over_i64_extremes() {
    assert_eq!(wrap_s32(i64::MAX), -1);
    assert_eq!(wrap_s32(i64::MIN), 0);
    assert_eq!(wrap_s32(-1), -1);
}
