use typeseq::prelude::*;
use typeseq::{U0, U1, U2, U3, U4, select_v};

type Four = tlist![i32, bool, i64, f64];
type Nums = vseq![i32; 4, 1, 8, 8];

#[test]
fn concat_flattens_elements_and_sequences() {
    assert_same::<
        concat_t![i32, bool, tlist![String], tlist![], u8, tlist![f64]],
        tlist![i32, bool, String, u8, f64],
    >();
    assert_same::<concat_t![tlist![]], Nil>();
    assert_same::<concat_t![u8, u8], tlist![u8, u8]>();
}

#[test]
fn concat_value_sequences() {
    assert_same::<
        concat_t![vseq![i32; 1, 2, 3], vseq![i32; 4, 5, 6], vseq![i32; 7, 8, 9]],
        vseq![i32; 1, 2, 3, 4, 5, 6, 7, 8, 9],
    >();
    assert_same::<ConcatT<vseq![i8; -1], vseq![i8]>, vseq![i8; -1]>();
    assert_eq!(size::<ConcatT<Nums, Nums>>(), 8);
}

#[test]
fn head_tail_skip() {
    assert_same::<HeadT<U2, Four>, tlist![i32, bool]>();
    assert_same::<HeadT<U3, Four>, tlist![i32, bool, i64]>();
    assert_same::<TailT<U2, Four>, tlist![i64, f64]>();
    assert_same::<TailT<U3, Four>, tlist![bool, i64, f64]>();
    assert_same::<SkipT<U2, Four>, tlist![i64, f64]>();
    assert_same::<SkipT<U3, Four>, tlist![f64]>();

    assert_same::<HeadT<U2, Nums>, vseq![i32; 4, 1]>();
    assert_same::<TailT<U3, Nums>, vseq![i32; 1, 8, 8]>();
    assert_same::<SkipT<U3, Nums>, vseq![i32; 8]>();
}

#[test]
fn boundaries() {
    assert_same::<HeadT<U0, Four>, Nil>();
    assert_same::<HeadT<U4, Four>, Four>();
    assert_same::<TailT<U0, Four>, Nil>();
    assert_same::<TailT<U4, Four>, Four>();
    assert_same::<SkipT<U0, Four>, Four>();
    assert_same::<SkipT<U4, Four>, Nil>();
    assert_same::<HeadT<U0, Nil>, Nil>();
    assert_same::<SkipT<U0, vseq![u8]>, vseq![u8]>();
}

#[test]
fn erase_and_select() {
    assert_same::<EraseT<U0, Four>, tlist![bool, i64, f64]>();
    assert_same::<EraseT<U3, Four>, tlist![i32, bool, i64]>();
    assert_same::<EraseT<U0, tlist![u8]>, Nil>();
    assert_same::<EraseT<U2, Nums>, vseq![i32; 4, 1, 8]>();

    assert_same::<SelectT<U3, Four>, f64>();
    assert_same::<SelectT<U2, Four>, i64>();
    assert_same::<SelectT<U0, Nums>, vseq![i32; 4]>();
    assert_same::<SelectT<U3, Nums>, vseq![i32; 8]>();
    assert_eq!(select_v::<U2, Nums>(), 8);
}

#[test]
fn results_are_usable_in_const_context() {
    const LEN: usize = size::<SkipT<U1, Four>>();
    const _: () = assert_same::<SelectT<U1, Four>, bool>();
    let buffer = [0u8; LEN];
    assert_eq!(buffer.len(), 3);
}
