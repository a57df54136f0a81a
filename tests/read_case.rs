mod common;

use ensight::prelude::*;
use std::path::PathBuf;

fn read() -> Dataset {
    common::init_log();
    let dir = tempfile::tempdir().unwrap();
    common::write_dataset(dir.path());
    ensight::read_case(dir.path().join("engine.case")).unwrap()
}

#[test]
fn descriptor() {
    let dataset = read();
    assert_eq!(dataset.case.geometry_file, "engine.geo");
    assert_eq!(dataset.case.variables.len(), 6);
    assert_eq!(dataset.case.variables[5].kind, VariableKind::ScalarPerMeasuredNode);
}

#[test]
fn geometry() {
    let dataset = read();
    let mesh = &dataset.mesh;

    assert_eq!(mesh.description[0], "engine geometry");
    assert_eq!(mesh.node_ids, IdMode::Given);
    assert_eq!(mesh.point_count(), 5);
    assert_eq!(mesh.points[4], [2.0, 0.5, 0.0]);

    let fluid = mesh.part(0).unwrap().as_unstructured().unwrap();
    assert_eq!(fluid.description, "fluid");
    assert_eq!(fluid.cells.len(), 3);
    assert_eq!(fluid.cells[1].point_indices, [1, 2, 4]);
    assert_eq!(fluid.cells[2].shape, CellShape::Quad);

    for cell in &fluid.cells {
        assert!(cell.point_indices.iter().all(|i| *i < mesh.point_count()));
    }

    let wall = mesh.part(1).unwrap().as_structured().unwrap();
    assert_eq!(wall.dimensions, [2, 2, 1]);
    assert!(wall.is_blanked(1));
    assert!(!wall.is_blanked(0));
    assert_eq!(wall.points[3], [1.0, 1.0, 3.0]);
}

#[test]
fn per_node_fields() {
    let dataset = read();

    let shared = dataset.field("Temperature", PartScope::SharedPoints).unwrap();
    assert_eq!(shared.attachment, Attachment::Point);
    assert_eq!(
        shared.component(0).unwrap().to_vec(),
        vec![300.0, 301.0, 302.0, 303.0, 304.0]
    );

    let wall = dataset.field("Temperature", PartScope::Part(1)).unwrap();
    assert_eq!(wall.component(0).unwrap().to_vec(), vec![1.0, 2.0, 3.0, 4.0]);

    let velocity = dataset.field("Velocity", PartScope::SharedPoints).unwrap();
    assert_eq!(velocity.components(), 3);
    assert_eq!(velocity.component(0).unwrap().to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    // Temperature, Velocity, Pressure_r and Pressure_i over the shared points
    assert_eq!(dataset.point_fields(0).count(), 4);
    assert_eq!(dataset.point_fields(1).count(), 1);
}

#[test]
fn per_element_fields_are_scattered() {
    let dataset = read();

    let quality = dataset.field("Quality", PartScope::Part(0)).unwrap();
    assert_eq!(quality.attachment, Attachment::Cell);
    assert_eq!(quality.component(0).unwrap().to_vec(), vec![0.25, 0.5, 0.75]);

    let wall = dataset.field("Quality", PartScope::Part(1)).unwrap();
    assert_eq!(wall.component(0).unwrap().to_vec(), vec![9.0]);

    let stress = dataset.field("Stress", PartScope::Part(0)).unwrap();
    assert_eq!(stress.components(), 6);
    assert_eq!(stress.get(0).unwrap().to_vec(), vec![11.0, 12.0, 13.0, 14.0, 15.0, 16.0]);
    assert_eq!(stress.get(1).unwrap().to_vec(), vec![21.0, 22.0, 23.0, 24.0, 25.0, 26.0]);
    assert_eq!(stress.get(2).unwrap().to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    assert_eq!(dataset.cell_fields(0).count(), 2);
}

#[test]
fn complex_variables_split_into_two_arrays() {
    let dataset = read();

    assert_eq!(dataset.fields_named("Pressure").count(), 0);

    let real = dataset.field("Pressure_r", PartScope::SharedPoints).unwrap();
    let imaginary = dataset.field("Pressure_i", PartScope::SharedPoints).unwrap();

    assert_eq!(real.components(), 1);
    assert_eq!(imaginary.components(), 1);
    assert_eq!(real.len(), imaginary.len());
    assert_eq!(real.attachment, imaginary.attachment);
    assert_eq!(imaginary.component(0).unwrap().to_vec(), vec![-1.0, -2.0, -3.0, -4.0, -5.0]);
}

#[test]
fn measured_variables_are_not_decoded() {
    let dataset = read();
    assert_eq!(dataset.fields_named("Probe").count(), 0);
}

#[test]
fn fields_keep_declaration_order() {
    let dataset = read();
    let labels: Vec<&str> = dataset.fields.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Temperature",
            "Temperature",
            "Velocity",
            "Quality",
            "Quality",
            "Stress",
            "Pressure_r",
            "Pressure_i"
        ]
    );
}

#[test]
fn sequential_and_parallel_agree() {
    common::init_log();
    let dir = tempfile::tempdir().unwrap();
    common::write_dataset(dir.path());

    let parallel = CaseReader::new()
        .with_base_dir(dir.path())
        .read("engine.case")
        .unwrap();
    let sequential = CaseReader::new()
        .with_base_dir(dir.path())
        .parallel(false)
        .read("engine.case")
        .unwrap();

    assert_eq!(parallel, sequential);
}

#[test]
fn custom_resolver() {
    common::init_log();
    let dir = tempfile::tempdir().unwrap();
    common::write_dataset(dir.path());

    let base = dir.path().to_path_buf();
    let resolver = move |name: &str| -> PathBuf { base.join(name) };

    let dataset = CaseReader::new()
        .with_resolver(resolver)
        .read("engine.case")
        .unwrap();

    assert_eq!(dataset.mesh.parts.len(), 2);
}
