use typeseq::prelude::*;
use typeseq::U2;

fn main() {
    let _: SelectT<U2, tlist![u8, i32]> = 0;
}
