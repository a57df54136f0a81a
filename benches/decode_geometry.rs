use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use ensight::mesh::{ElementKind, UnstructuredPart};
use ensight::{Mesh, Part, VariableKind};

/// an `n x n` sheet of quad4 cells over randomly placed points
fn quad_sheet(n: usize) -> Mesh {
    let coordinates: Array2<f64> = Array2::random((n * n, 3), Uniform::new(0., 10.));

    let mut mesh = Mesh::new();
    mesh.points = coordinates
        .rows()
        .into_iter()
        .map(|row| [row[0], row[1], row[2]])
        .collect();

    let mut part = UnstructuredPart::default();
    for j in 0..n - 1 {
        for i in 0..n - 1 {
            let corner = j * n + i;
            let quad = vec![corner, corner + 1, corner + n + 1, corner + n];
            part.push_cell(ElementKind::Quad4, quad);
        }
    }
    mesh.parts.insert(0, Part::Unstructured(part));

    mesh
}

fn geometry_file(mesh: &Mesh) -> Vec<u8> {
    let mut out = Vec::new();
    ensight::write_geometry(&mut out, mesh).unwrap();
    out
}

fn scalar_file(count: usize) -> Vec<u8> {
    let values: Array2<f64> = Array2::random((count, 1), Uniform::new(-1., 1.));
    let mut out = String::from("random scalars\npart 1\nquad4\n");

    for row in values.rows().into_iter().collect::<Vec<_>>().chunks(6) {
        let line: Vec<String> = row.iter().map(|value| value[0].to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }

    out.into_bytes()
}

fn decode_geometry_bench(c: &mut Criterion) {
    for n in [100, 300] {
        let file = geometry_file(&quad_sheet(n));

        c.bench_function(&format!("decode geometry {}", n), |b| {
            b.iter(|| ensight::parse::parse_geometry(black_box(file.as_slice()), "bench.geo").unwrap())
        });
    }
}

fn decode_scalars_bench(c: &mut Criterion) {
    let n = 300;
    let file = geometry_file(&quad_sheet(n));
    let mesh = ensight::parse::parse_geometry(file.as_slice(), "bench.geo").unwrap();
    let scalars = scalar_file(mesh.cell_count());

    c.bench_function("decode per element scalars 300", |b| {
        b.iter(|| {
            ensight::parse::parse_variable(
                black_box(scalars.as_slice()),
                "bench.scl",
                &mesh,
                VariableKind::ScalarPerElement,
                "random",
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, decode_geometry_bench, decode_scalars_bench);
criterion_main!(benches);
