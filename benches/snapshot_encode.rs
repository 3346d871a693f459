use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use fractrap::{Extent, PixelBuffer, premultiply_alpha, write_png};

fn gradient(width: u32, height: u32) -> PixelBuffer {
    let extent = Extent::new(width, height).unwrap();
    let mut buffer = PixelBuffer::new(extent);

    for (i, pixel) in buffer.buffer_mut().chunks_exact_mut(4).enumerate() {
        let x = (i as u32 % width) as u8;
        let y = (i as u32 / width) as u8;
        pixel.copy_from_slice(&[x, y, x ^ y, x.wrapping_add(y)]);
    }

    buffer
}

fn bench_premultiply(c: &mut Criterion) {
    let source = gradient(1024, 768);

    c.bench_function("premultiply_alpha_1024x768", |b| {
        b.iter_batched(
            || source.clone().into_data(),
            |mut data| {
                premultiply_alpha(&mut data);
                black_box(data)
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_write_png(c: &mut Criterion) {
    let frame = gradient(1024, 768);
    let path = std::env::temp_dir().join(format!("fractrap-bench-{}.png", std::process::id()));

    c.bench_function("write_png_1024x768", |b| {
        b.iter(|| write_png(&path, black_box(&frame)).unwrap())
    });

    let _ = std::fs::remove_file(path);
}

criterion_group!(benches, bench_premultiply, bench_write_png);
criterion_main!(benches);
