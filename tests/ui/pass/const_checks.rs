use typeseq::prelude::*;
use typeseq::{U2, find};

const _: () = assert_same::<HeadT<U2, tlist![u8, i32, i64]>, tlist![u8, i32]>();
const _: () = assert_same::<SortedT<vseq![i32; 3, 1, 2]>, vseq![i32; 1, 2, 3]>();
const _: () = assert_same::<SortedT<vseq![u8; 255, 0]>, vseq![u8; 0, 255]>();
const _: () = assert_same::<Reverse2T<tlist![u8, i32, i64]>, tlist![i64, i32, u8]>();
const FOUND: usize = find::<tlist![u8, i32, i64], i64>();

fn main() {
    assert_eq!(FOUND, 2);
}
