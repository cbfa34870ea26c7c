//! The conformance table.
//!
//! Element spellings: `u8` stands in for a one-byte character type, `i32` for
//! `int`, `i64` for `long`, `i16` for `short` and `f64` for `double`.

use std::io::{self, Write};

use typeseq::{
    ConcatT, FilterT, HeadT, IsNotOneOf, IsSame, MinSize, MinSize2, Reverse2T, ReverseT, SelectMin,
    SelectT, SizeAbove, SizeSortedT, SkipT, SortT, SortedT, TailT, U0, U1, U2, U3, concat_t, end,
    find, find_if, find_not_one_of, find_one_of, is_not_one_of, is_one_of, min_size,
    min_size_index, tlist, typenum, vseq,
};

use crate::harness::Harness;
use crate::{expect_eq, expect_same};

type Abc = tlist![u8, i32, i64];
type Four = tlist![i32, bool, i64, f64];
type Nums = vseq![i32; 4, 1, 8, 8];

/// A named group of checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Suite {
    Search,
    Filter,
    Concat,
    Reverse,
    Slice,
    Sort,
}

impl Suite {
    pub const ALL: &'static [Suite] = &[
        Self::Search,
        Self::Filter,
        Self::Concat,
        Self::Reverse,
        Self::Slice,
        Self::Sort,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Filter => "filter",
            Self::Concat => "concat",
            Self::Reverse => "reverse",
            Self::Slice => "slice",
            Self::Sort => "sort",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Search => "find_if, find, find_one_of and membership",
            Self::Filter => "filter by element size and by membership",
            Self::Concat => "concatenation of elements, typed and value sequences",
            Self::Reverse => "linear and halving reversal",
            Self::Slice => "head, tail, skip, erase and select",
            Self::Sort => "minimum strategies and selection sort",
        }
    }

    /// Runs every check of the suite.
    pub fn run<W: Write>(self, h: &mut Harness<W>) -> io::Result<()> {
        tracing::debug!(suite = self.as_str(), "running suite");
        match self {
            Self::Search => search(h),
            Self::Filter => filter(h),
            Self::Concat => concat(h),
            Self::Reverse => reverse(h),
            Self::Slice => slice(h),
            Self::Sort => sort(h),
        }
    }
}

impl std::fmt::Display for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn search<W: Write>(h: &mut Harness<W>) -> io::Result<()> {
    expect_eq!(h, find_if::<Abc, IsSame, u8>(), 0)?;
    expect_eq!(h, find_if::<Abc, IsSame, i32>(), 1)?;
    expect_eq!(h, find_if::<Abc, IsSame, i64>(), 2)?;
    expect_eq!(h, find_if::<Abc, IsSame, i16>(), 3)?;

    expect_eq!(h, find::<Abc, u8>(), 0)?;
    expect_eq!(h, find::<Abc, i32>(), 1)?;
    expect_eq!(h, find::<Abc, i64>(), 2)?;
    expect_eq!(h, find::<Abc, i16>(), end::<Abc>())?;

    expect_eq!(h, find_one_of::<Abc, tlist![i16]>(), 3)?;
    expect_eq!(h, find_one_of::<Abc, tlist![i16, i32]>(), 1)?;
    expect_eq!(h, find_one_of::<Abc, tlist![i16, i64]>(), 2)?;
    expect_eq!(h, find_not_one_of::<Abc, tlist![u8, i32]>(), 2)?;

    expect_eq!(h, is_one_of::<i64, Abc>(), true)?;
    expect_eq!(h, is_not_one_of::<i16, Abc>(), true)?;
    Ok(())
}

fn filter<W: Write>(h: &mut Harness<W>) -> io::Result<()> {
    expect_same!(h, FilterT<Abc, SizeAbove, typenum::U1>, tlist![i32, i64])?;
    expect_same!(
        h,
        FilterT<vseq![i32; 1, 2, 3, 5, 6, 7], IsNotOneOf, vseq![i32; 2, 3, 4]>,
        vseq![i32; 1, 5, 6, 7]
    )?;
    Ok(())
}

fn concat<W: Write>(h: &mut Harness<W>) -> io::Result<()> {
    expect_same!(
        h,
        concat_t![i32, bool, tlist![String], tlist![], u8, tlist![f64]],
        tlist![i32, bool, String, u8, f64]
    )?;
    expect_same!(
        h,
        concat_t![vseq![i32; 1, 2, 3], vseq![i32; 4, 5, 6], vseq![i32; 7, 8, 9]],
        vseq![i32; 1, 2, 3, 4, 5, 6, 7, 8, 9]
    )?;
    expect_same!(h, ConcatT<tlist![u8], tlist![]>, tlist![u8])?;
    Ok(())
}

fn reverse<W: Write>(h: &mut Harness<W>) -> io::Result<()> {
    expect_same!(h, ReverseT<tlist![i32, bool, String, f64]>, tlist![f64, String, bool, i32])?;
    expect_same!(h, Reverse2T<tlist![i32, bool, String, f64]>, tlist![f64, String, bool, i32])?;
    expect_same!(h, ReverseT<vseq![i32; 4, 1, 24, 8]>, vseq![i32; 8, 24, 1, 4])?;
    expect_same!(h, Reverse2T<vseq![i32; 4, 1, 24, 8]>, vseq![i32; 8, 24, 1, 4])?;
    Ok(())
}

fn slice<W: Write>(h: &mut Harness<W>) -> io::Result<()> {
    expect_same!(h, HeadT<U2, Four>, tlist![i32, bool])?;
    expect_same!(h, HeadT<U3, Four>, tlist![i32, bool, i64])?;
    expect_same!(h, TailT<U2, Four>, tlist![i64, f64])?;
    expect_same!(h, TailT<U3, Four>, tlist![bool, i64, f64])?;
    expect_same!(h, SkipT<U2, Four>, tlist![i64, f64])?;
    expect_same!(h, SkipT<U3, Four>, tlist![f64])?;
    expect_same!(h, SelectT<U3, Four>, f64)?;
    expect_same!(h, SelectT<U2, Four>, i64)?;

    expect_same!(h, HeadT<U2, Nums>, vseq![i32; 4, 1])?;
    expect_same!(h, HeadT<U3, Nums>, vseq![i32; 4, 1, 8])?;
    expect_same!(h, TailT<U2, Nums>, vseq![i32; 8, 8])?;
    expect_same!(h, TailT<U3, Nums>, vseq![i32; 1, 8, 8])?;
    expect_same!(h, SkipT<U2, Nums>, vseq![i32; 8, 8])?;
    expect_same!(h, SkipT<U3, Nums>, vseq![i32; 8])?;
    expect_same!(h, SelectT<U0, Nums>, vseq![i32; 4])?;
    expect_same!(h, SelectT<U1, Nums>, vseq![i32; 1])?;
    expect_same!(h, SelectT<U2, Nums>, vseq![i32; 8])?;
    expect_same!(h, SelectT<U3, Nums>, vseq![i32; 8])?;

    expect_same!(h, typeseq::EraseT<U1, Four>, tlist![i32, i64, f64])?;
    Ok(())
}

fn sort<W: Write>(h: &mut Harness<W>) -> io::Result<()> {
    expect_eq!(h, min_size_index::<tlist![bool, i32, i64, f64]>(), 0)?;
    expect_eq!(h, min_size_index::<tlist![i32, bool, i64, f64]>(), 1)?;
    expect_eq!(h, min_size_index::<tlist![i32, i64, bool, f64]>(), 2)?;
    expect_eq!(h, min_size_index::<tlist![i32, i64, f64, bool]>(), 3)?;
    expect_eq!(h, min_size::<tlist![bool, i32, i64, f64]>(), 1)?;
    expect_eq!(h, min_size::<tlist![i32, bool, i64, f64]>(), 1)?;
    expect_eq!(h, min_size::<tlist![i32, i64, bool, f64]>(), 1)?;
    expect_eq!(h, min_size::<tlist![i32, i64, f64, bool]>(), 1)?;

    expect_same!(
        h,
        <MinSize as SelectMin<tlist![i32, i64, f64, bool]>>::Index,
        <MinSize2 as SelectMin<tlist![i32, i64, f64, bool]>>::Index
    )?;

    expect_same!(h, SizeSortedT<tlist![i32, bool, i16, f64]>, tlist![bool, i16, i32, f64])?;
    expect_same!(
        h,
        SizeSortedT<tlist![i64, i32, i16, u8, bool, f64]>,
        tlist![u8, bool, i16, i32, i64, f64]
    )?;
    expect_same!(
        h,
        SortT<tlist![i64, i32, i16, u8, bool, f64], MinSize>,
        tlist![u8, bool, i16, i32, i64, f64]
    )?;

    expect_same!(h, SortedT<vseq![i32; 4, 1, 2, 8]>, vseq![i32; 1, 2, 4, 8])?;
    expect_same!(h, SortedT<vseq![i32; 8, 4, 2, 1, 1, 8]>, vseq![i32; 1, 1, 2, 4, 8, 8])?;
    Ok(())
}
