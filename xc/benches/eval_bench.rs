//! Criterion benchmarks for batched kernel evaluation on the host and
//! through a device stream.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use xc::{Backend, DeviceBuffer, Functional, Spin, Stream, XCKernel};

const NPTS: usize = 100_000;

fn grid(len: usize, scale: f64) -> Vec<f64> {
    (0..len)
        .map(|i| scale * (0.01 + (i % 997) as f64 / 997.0))
        .collect()
}

// ── LDA ─────────────────────────────────────────────────────────────

fn bench_lda(c: &mut Criterion) {
    for backend in [Backend::Builtin, Backend::External] {
        let k = XCKernel::new(backend, Functional::PW91_LDA, Spin::Polarized).unwrap();
        let rho = grid(k.rho_buffer_len(NPTS), 0.5);
        let mut exc = vec![0.0; k.exc_buffer_len(NPTS)];
        let mut vrho = vec![0.0; k.vrho_buffer_len(NPTS)];

        c.bench_function(&format!("pw91_lda_exc_vxc_{}", backend), |b| {
            b.iter(|| {
                k.eval_exc_vxc(NPTS, black_box(&rho), &mut exc, &mut vrho)
                    .unwrap()
            })
        });
    }
}

// ── GGA hybrid ──────────────────────────────────────────────────────

fn bench_b3lyp(c: &mut Criterion) {
    for backend in [Backend::Builtin, Backend::External] {
        let k = XCKernel::new(backend, Functional::B3LYP, Spin::Polarized).unwrap();
        let rho = grid(k.rho_buffer_len(NPTS), 0.5);
        let sigma = grid(k.sigma_buffer_len(NPTS), 0.05);
        let mut exc = vec![0.0; k.exc_buffer_len(NPTS)];
        let mut vrho = vec![0.0; k.vrho_buffer_len(NPTS)];
        let mut vsigma = vec![0.0; k.vsigma_buffer_len(NPTS)];

        c.bench_function(&format!("b3lyp_exc_vxc_{}", backend), |b| {
            b.iter(|| {
                k.eval_exc_vxc_gga(
                    NPTS,
                    black_box(&rho),
                    black_box(&sigma),
                    &mut exc,
                    &mut vrho,
                    &mut vsigma,
                )
                .unwrap()
            })
        });
    }
}

// ── Device round trip ───────────────────────────────────────────────

fn bench_device(c: &mut Criterion) {
    let stream = Stream::new().unwrap();
    let k = XCKernel::new(Backend::Builtin, Functional::PBE0, Spin::Unpolarized).unwrap();

    let rho = DeviceBuffer::from_host(&grid(k.rho_buffer_len(NPTS), 0.5)).unwrap();
    let sigma = DeviceBuffer::from_host(&grid(k.sigma_buffer_len(NPTS), 0.05)).unwrap();
    let exc = DeviceBuffer::zeros(k.exc_buffer_len(NPTS)).unwrap();
    let vrho = DeviceBuffer::zeros(k.vrho_buffer_len(NPTS)).unwrap();
    let vsigma = DeviceBuffer::zeros(k.vsigma_buffer_len(NPTS)).unwrap();

    c.bench_function("pbe0_exc_vxc_device", |b| {
        b.iter(|| {
            k.eval_exc_vxc_gga_device(NPTS, &rho, &sigma, &exc, &vrho, &vsigma, &stream)
                .unwrap();
            stream.synchronize().unwrap();
        })
    });
}

criterion_group!(benches, bench_lda, bench_b3lyp, bench_device);
criterion_main!(benches);
