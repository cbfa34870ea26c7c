use typeseq::min_index;
use typeseq::prelude::*;

fn main() {
    let _ = min_index::<vseq![i32]>();
}
