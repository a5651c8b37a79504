#![allow(clippy::float_cmp)]

use core::mem::{align_of, size_of};
use core::ptr;
use image_transform_interop::align::is_aligned_to;
use image_transform_interop::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Coefficients {
    taps: [f32; 3],
}

#[test]
fn sse_aligned_is_sixteen_bytes_aligned() {
    assert_eq!(VECTOR_REGISTER_BYTES, 16);
    assert_eq!(align_of::<SseAligned<u8>>(), 16);
    assert_eq!(align_of::<SseAligned<Coefficients>>(), 16);
    assert_eq!(size_of::<SseAligned<Coefficients>>(), 16);
    assert_eq!(align_of::<SseAligned<[u8; 33]>>(), 16);
    assert_eq!(size_of::<SseAligned<[u8; 33]>>(), 48);
}

#[test]
fn aligned_macro_maps_byte_counts() {
    assert_eq!(align_of::<aligned!(1, u8)>(), 1);
    assert_eq!(align_of::<aligned!(2, u8)>(), 2);
    assert_eq!(align_of::<aligned!(4, u8)>(), 4);
    assert_eq!(align_of::<aligned!(8, u8)>(), 8);
    assert_eq!(align_of::<aligned!(16, u8)>(), 16);
    assert_eq!(align_of::<aligned!(32, u8)>(), 32);
    assert_eq!(align_of::<aligned!(64, u8)>(), 64);
}

#[test]
fn weaker_alignment_keeps_inner_alignment() {
    assert_eq!(align_of::<Aligned<A1, u64>>(), align_of::<u64>());
    assert_eq!(size_of::<Aligned<A1, u64>>(), 8);
}

#[test]
fn aligned_values_are_placed_on_boundaries() {
    let values: [SseAligned<u8>; 4] = [SseAligned::new(1); 4];
    for v in &values {
        assert!(is_aligned_to::<A16, _>(ptr::from_ref(v)));
        assert!(is_aligned_to::<A16, _>(ptr::from_ref(v.get())));
    }

    let big = Aligned::<A64, [u8; 3]>::default();
    assert!(is_aligned_to::<A64, _>(ptr::from_ref(&big)));

    let bytes = SseAligned::new([0u8; 32]);
    let odd = ptr::from_ref(&bytes.get()[1]);
    assert!(!is_aligned_to::<A2, _>(odd));
    assert!(is_aligned_to::<A1, _>(odd));
}

#[test]
fn wrapper_gives_access_to_the_value() {
    let mut c = SseAligned::new(Coefficients {
        taps: [0.25, 0.5, 0.25],
    });
    assert_eq!(c.taps.len(), 3);
    c.taps[1] = 1.0;
    c.get_mut().taps[0] = 0.0;
    assert_eq!(c.get().taps, [0.0, 1.0, 0.25]);

    let inner: Coefficients = c.into_inner();
    let back: SseAligned<Coefficients> = inner.into();
    assert_eq!(*back, inner);

    let dbg = format!("{back:?}");
    assert!(dbg.contains("align: 16"));
    assert!(dbg.ends_with(", .. }"), "{dbg}");
}

force_inline! {
    fn scale(v: i32, num: i32, den: i32) -> i32 {
        v * num / den
    }

    pub(crate) fn half(v: i32) -> i32 {
        scale(v, 1, 2)
    }
}

#[test]
fn force_inline_keeps_functions_callable() {
    assert_eq!(scale(10, 3, 2), 15);
    assert_eq!(half(9), 4);
}
