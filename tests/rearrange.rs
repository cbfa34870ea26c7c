use typeseq::prelude::*;
use typeseq::typenum::{U1, U2};
use typeseq::{min_index, min_size, min_size_index, min_v};

#[test]
fn filter_by_size_and_membership() {
    assert_same::<FilterT<tlist![u8, i32, i64], SizeAbove, U1>, tlist![i32, i64]>();
    assert_same::<
        FilterT<vseq![i32; 1, 2, 3, 5, 6, 7], IsNotOneOf, vseq![i32; 2, 3, 4]>,
        vseq![i32; 1, 5, 6, 7],
    >();
    assert_same::<FilterT<tlist![u8, i16, u8], IsOneOf, tlist![u8]>, tlist![u8, u8]>();
    assert_same::<FilterT<Nil, SizeAbove, U2>, Nil>();
}

#[test]
fn reverse_both_strategies() {
    assert_same::<ReverseT<tlist![i32, bool, String, f64]>, tlist![f64, String, bool, i32]>();
    assert_same::<Reverse2T<tlist![i32, bool, String, f64]>, tlist![f64, String, bool, i32]>();
    assert_same::<ReverseT<vseq![i32; 4, 1, 24, 8]>, vseq![i32; 8, 24, 1, 4]>();
    assert_same::<Reverse2T<vseq![i32; 4, 1, 24, 8]>, vseq![i32; 8, 24, 1, 4]>();
    assert_same::<Reverse2T<vseq![i32]>, vseq![i32]>();
}

#[test]
fn minimum_strategies() {
    assert_eq!(min_size_index::<tlist![bool, i32, i64, f64]>(), 0);
    assert_eq!(min_size_index::<tlist![i32, bool, i64, f64]>(), 1);
    assert_eq!(min_size_index::<tlist![i32, i64, bool, f64]>(), 2);
    assert_eq!(min_size_index::<tlist![i32, i64, f64, bool]>(), 3);
    assert_eq!(min_size::<tlist![i32, i64, f64, bool]>(), 1);
    assert_eq!(min_size::<tlist![f64, i64]>(), 8);

    assert_eq!(min_index::<vseq![i32; 4, 1, 2, 8]>(), 1);
    assert_eq!(min_v::<i32, vseq![i32; 4, 1, 2, 8]>(), 1);
    assert_eq!(min_v::<i16, vseq![i16; 4, -100, 2]>(), -100);
}

#[test]
fn sort_by_size() {
    assert_same::<SizeSortedT<tlist![i32, bool, i16, f64]>, tlist![bool, i16, i32, f64]>();
    assert_same::<
        SizeSortedT<tlist![i64, i32, i16, u8, bool, f64]>,
        tlist![u8, bool, i16, i32, i64, f64],
    >();
}

#[test]
fn sort_by_value() {
    assert_same::<SortedT<vseq![i32; 4, 1, 2, 8]>, vseq![i32; 1, 2, 4, 8]>();
    assert_same::<SortedT<vseq![i32; 8, 4, 2, 1, 1, 8]>, vseq![i32; 1, 1, 2, 4, 8, 8]>();
    assert_eq!(
        <SortedT<vseq![i64; 3, -7, 0, 12, -7]> as Values>::to_vec(),
        [-7, -7, 0, 3, 12]
    );
}

#[test]
fn size_sort_is_stable() {
    // Same-sized elements keep their relative order.
    assert_same::<
        SizeSortedT<tlist![u32, i8, f32, bool, i32, u8]>,
        tlist![i8, bool, u8, u32, f32, i32],
    >();
    assert_same::<
        typeseq::SortT<tlist![u32, i8, f32, bool, i32, u8], MinSize>,
        tlist![i8, bool, u8, u32, f32, i32],
    >();
}
