use ffxmanip_core::{seed_from_key, Catalogue};

#[test]
fn loads_256_rows() {
    let cat = Catalogue::load().unwrap();
    assert_eq!(cat.len(), 256);
    assert!(!cat.is_empty());
}

#[test]
fn row_i_is_the_seed_of_key_byte_i() {
    let cat = Catalogue::load().unwrap();
    for i in [0usize, 1, 17, 128, 200, 255] {
        assert_eq!(cat.seed_at(i), Some(seed_from_key(i as i64)));
    }
}

#[test]
fn first_and_last_rows() {
    let cat = Catalogue::load().unwrap();
    assert_eq!(cat.seed_at(0), Some(3556394350));
    assert_eq!(cat.seed_of([269, 133, 288]), Some(3556394350));
    assert_eq!(cat.seed_at(255), Some(2804382593));
    assert_eq!(cat.seed_at(256), None);
}

#[test]
fn lookups_are_inverse() {
    let cat = Catalogue::load().unwrap();
    for (i, seed, dvs) in cat.iter() {
        assert_eq!(cat.seed_of(dvs), Some(seed));
        assert_eq!(cat.index_of(seed), Some(i));
        assert!(cat.contains_seed(seed));
    }
}

#[test]
fn unknown_entries_miss() {
    let cat = Catalogue::load().unwrap();
    assert_eq!(cat.seed_of([1, 2, 3]), None);
    assert!(!cat.contains_seed(0));
    assert_eq!(cat.index_of(1), None);
}
