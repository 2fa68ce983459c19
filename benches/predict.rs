use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use mpeg4_halfpel::{MotionVector, PlaneMut, PlaneRef, Rounding, predict_block8x8};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro128StarStar;
use std::{hint::black_box, num::NonZeroUsize};

/// Predicts every 8x8 block of a 256x256 plane, cycling through the four
/// half-pel phases.
pub fn bench_predict_plane_8bit(c: &mut Criterion) {
    c.bench_function("predict_block8x8 plane 8-bit", |b| {
        let mut rng = Xoshiro128StarStar::from_seed(*b"deadbeeflolcakes");
        let resolution = NonZeroUsize::new(256).unwrap();
        let padded = NonZeroUsize::new(resolution.get() + 16).unwrap();
        let reference: Vec<u8> = (0..padded.get() * padded.get()).map(|_| rng.random()).collect();
        let mut dest = vec![0u8; resolution.get() * resolution.get()];
        let vectors = [
            MotionVector::new(0, 0),
            MotionVector::new(1, 0),
            MotionVector::new(0, 1),
            MotionVector::new(3, 3),
        ];

        b.iter(|| {
            let ref_plane = PlaneRef::new(&reference, padded);
            let mut dst_plane = PlaneMut::new(&mut dest, resolution);
            for by in (0..resolution.get()).step_by(8) {
                for bx in (0..resolution.get()).step_by(8) {
                    let mv = vectors[(bx / 8 + by / 8) % vectors.len()];
                    predict_block8x8(
                        &mut dst_plane,
                        bx,
                        by,
                        black_box(&ref_plane),
                        bx + 4,
                        by + 4,
                        black_box(mv),
                        Rounding::Up,
                    )
                    .unwrap();
                }
            }
        })
    });
}

criterion_group!(bench_predict, bench_predict_plane_8bit);
criterion_main!(bench_predict);
