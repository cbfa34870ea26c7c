use typeseq::prelude::*;

type Mixed = ConcatT<vseq![i32; 1, 2], vseq![i64; 3]>;

fn main() {
    let _ = size::<Mixed>();
}
