use criterion::{Criterion, black_box, criterion_group, criterion_main};
use depot_fs::{Dir, NativePath};
use tempfile::tempdir;

fn path_decomposition_benchmark(c: &mut Criterion) {
    let path = NativePath::from_utf8("/var/lib/depot/stores/main/segments/000042");

    c.bench_function("path::dirname", |b| {
        b.iter(|| black_box(&path).dirname())
    });

    c.bench_function("path::basename", |b| {
        b.iter(|| black_box(&path).basename())
    });
}

fn path_join_benchmark(c: &mut Criterion) {
    let base = NativePath::from_utf8("/var/lib/depot");

    c.bench_function("path::join (relative)", |b| {
        b.iter(|| black_box(&base).join("stores").join("main").join("segments"))
    });

    c.bench_function("path::join (absolute replaces)", |b| {
        b.iter(|| black_box(&base).join("/other/root"))
    });
}

fn recursive_create_benchmark(c: &mut Criterion) {
    c.bench_function("dir::recursively_create (3 levels)", |b| {
        let dir = tempdir().unwrap();
        let root = NativePath::from_os_str(dir.path().as_os_str());
        let mut n = 0u64;

        b.iter(|| {
            n += 1;
            let target = root.join(format!("{n}")).join("b").join("c");
            Dir::recursively_create(black_box(&target)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    path_decomposition_benchmark,
    path_join_benchmark,
    recursive_create_benchmark
);
criterion_main!(benches);
