use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use harris_image::{ImageSize, PixelBuffer};
use harris_imgproc::features::{FeatureDetector, HarrisDetector, HarrisParams};
use harris_imgproc::filter::gaussian_blur;

fn checkerboard(width: usize, height: usize, cell: usize) -> PixelBuffer {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let on = ((x / cell) + (y / cell)) % 2 == 0;
            data.push(if on { 255.0 } else { 0.0 });
        }
    }
    PixelBuffer::from_vec(ImageSize { width, height }, 1, data).unwrap()
}

fn bench_harris(c: &mut Criterion) {
    let mut group = c.benchmark_group("Harris");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{width}x{height}");
        let image = checkerboard(*width, *height, 16);
        let params = HarrisParams {
            sigma: 2.0,
            k: 0.04,
            threshold: 150.0,
        };

        group.bench_with_input(
            BenchmarkId::new("gaussian_blur", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(gaussian_blur(i, 2.0))),
        );

        group.bench_with_input(
            BenchmarkId::new("harris_detect", &parameter_string),
            &image,
            |b, i| {
                let detector = HarrisDetector::new();
                b.iter(|| black_box(detector.detect(i, &params)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_harris);
criterion_main!(benches);
