use typeseq::prelude::*;

const _: () = assert_same::<ReverseT<tlist![u8, i32]>, tlist![u8, i32]>();

fn main() {}
