use image_transform_interop::prelude::*;

fn copy_row(
    dst: out_ecount!(&mut [Byte], count),
    src: in_ecount!(&[Byte], count),
    count: in_param!(usize),
) -> out_param!(usize) {
    dst[..count].copy_from_slice(&src[..count]);
    count
}

fn brighten(pixels: inout_bcount!(&mut [Byte], len), len: in_param!(usize), by: in_param!(Byte)) {
    for p in &mut pixels[..len] {
        *p = p.saturating_add(by);
    }
}

fn swap_rows(a: inout_ecount!(&mut [Byte], n), b: inout_param!(&mut [Byte]), n: usize) {
    a[..n].swap_with_slice(&mut b[..n]);
}

fn checksum(data: in_bcount!(&[Byte], size), size: usize) -> u32 {
    data[..size].iter().map(|&b| u32::from(b)).sum()
}

fn fill(dst: out_bcount!(&mut [Byte], size), size: usize, value: Byte) {
    dst[..size].fill(value);
}

#[test]
fn annotated_signatures_behave_like_plain_ones() {
    let src = [1, 2, 3, 4];
    let mut dst = [0; 4];
    assert_eq!(copy_row(&mut dst, &src, 3), 3);
    assert_eq!(dst, [1, 2, 3, 0]);

    brighten(&mut dst, 4, 250);
    assert_eq!(dst, [251, 252, 253, 250]);

    let mut other = [9, 9, 9, 9];
    swap_rows(&mut dst, &mut other, 2);
    assert_eq!(dst, [9, 9, 253, 250]);
    assert_eq!(other, [251, 252, 9, 9]);

    assert_eq!(checksum(&src, 4), 10);

    fill(&mut other, 4, 0);
    assert_eq!(other, [0; 4]);
}

#[test]
fn annotations_expand_to_the_bare_type() {
    let x: in_param!(u32) = 5;
    let y: u32 = x;
    let z: inout_bcount!(u32, 4) = y;
    assert_eq!(z, 5);
}
