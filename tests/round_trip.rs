mod common;

use ensight::mesh::{ElementKind, UnstructuredPart};
use ensight::parse::{parse_geometry, parse_variable};
use ensight::{write_geometry, Mesh, Part, VariableKind};

#[test]
fn written_geometry_reads_back_identically() {
    common::init_log();
    let mesh = parse_geometry(common::GEOMETRY.as_bytes(), "engine.geo").unwrap();

    let mut written = Vec::new();
    write_geometry(&mut written, &mesh).unwrap();
    let decoded = parse_geometry(written.as_slice(), "written.geo").unwrap();

    assert_eq!(decoded, mesh);
}

#[test]
fn written_file_is_read_by_read_case() {
    common::init_log();
    let dir = tempfile::tempdir().unwrap();
    common::write_dataset(dir.path());

    let original = ensight::read_case(dir.path().join("engine.case")).unwrap();

    let file = std::fs::File::create(dir.path().join("engine.geo")).unwrap();
    write_geometry(std::io::BufWriter::new(file), &original.mesh).unwrap();

    let reread = ensight::read_case(dir.path().join("engine.case")).unwrap();
    assert_eq!(reread, original);
}

#[test]
fn higher_order_kinds_come_back_linear() {
    common::init_log();
    let input = "\
quadratic
mesh
node id assign
element id assign
coordinates
6
0 0 0
1 0 0
0 1 0
0.5 0 0
0.5 0.5 0
0 0.5 0
part 1
tri
tria6
1
1 2 3 4 5 6
";
    let mesh = parse_geometry(input.as_bytes(), "quadratic.geo").unwrap();

    let mut written = Vec::new();
    write_geometry(&mut written, &mesh).unwrap();
    let text = String::from_utf8(written).unwrap();
    assert!(text.contains("tria3"));
    assert!(!text.contains("tria6"));

    let decoded = parse_geometry(text.as_bytes(), "written.geo").unwrap();
    let part = decoded.part(0).unwrap().as_unstructured().unwrap();
    assert_eq!(part.cells, mesh.part(0).unwrap().as_unstructured().unwrap().cells);
    assert_eq!(
        part.groups.kinds().collect::<Vec<_>>(),
        [ensight::ElementKind::Tria3]
    );
}

#[test]
fn built_mesh_decodes_per_element_values() {
    common::init_log();
    let mut mesh = Mesh::new();
    mesh.points = vec![[0., 0., 0.], [1., 0., 0.], [1., 1., 0.], [0., 1., 0.]];

    let mut part = UnstructuredPart::default();
    part.push_cell(ElementKind::Quad4, vec![0, 1, 2, 3]);
    part.push_cell(ElementKind::Tria3, vec![0, 2, 3]);
    mesh.parts.insert(0, Part::Unstructured(part));
    mesh.parts.insert(1, Part::Unstructured(UnstructuredPart::default()));

    let input = "built\npart 1\nquad4\n1.5\ntria3\n2.5\npart 2\npoint\n";
    let arrays = parse_variable(
        input.as_bytes(),
        "built.scl",
        &mesh,
        VariableKind::ScalarPerElement,
        "built",
    )
    .unwrap();
    assert_eq!(arrays[0].component(0).unwrap().to_vec(), vec![1.5, 2.5]);
    assert!(arrays[1].is_empty());

    let mut written = Vec::new();
    write_geometry(&mut written, &mesh).unwrap();
    assert_eq!(parse_geometry(written.as_slice(), "built.geo").unwrap(), mesh);
}
