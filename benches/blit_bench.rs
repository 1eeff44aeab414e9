//! 纹理绘制基准测试
//!
//! 在软件 GDI 上比较不透明与透明纹理的绘制开销。
//! 运行: `cargo bench --bench blit_bench`

use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use zeyback::Texture;
use zeyback::gdi::{Color, DeviceContext};
use zeyback::platform::{MemoryGdi, SharedGdi};

/// 不同尺寸纹理的绘制
fn bench_texture_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("Texture Render");

    for size in [16, 64, 256] {
        for transparency in [false, true] {
            let gdi: SharedGdi = Rc::new(MemoryGdi::new(512, 512));
            let texture = Texture::from_color(&gdi, size, size, Color::new(200, 40, 40), transparency)
                .expect("texture");
            let screen = DeviceContext::acquire(&gdi).expect("screen dc");
            let name = if transparency { "transparent" } else { "opaque" };

            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    texture
                        .render(black_box(&screen), black_box(32), black_box(32))
                        .expect("render")
                });
            });
        }
    }

    group.finish();
}

/// 纹理创建（屏幕 DC、位图、内存 DC、画刷）
fn bench_texture_create(c: &mut Criterion) {
    let gdi: SharedGdi = Rc::new(MemoryGdi::new(512, 512));
    let mut texture = Texture::empty(&gdi);

    c.bench_function("Texture Create 100x100", |b| {
        b.iter(|| {
            texture
                .reinitialize_from_color(black_box(100), black_box(100), Color::WHITE, false)
                .expect("texture")
        });
    });
}

criterion_group!(benches, bench_texture_render, bench_texture_create);
criterion_main!(benches);
