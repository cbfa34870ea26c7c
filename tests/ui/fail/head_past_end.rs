use typeseq::prelude::*;
use typeseq::U3;

fn main() {
    let _ = size::<HeadT<U3, tlist![u8, i32]>>();
}
