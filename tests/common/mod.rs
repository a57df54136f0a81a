#![allow(dead_code)]

use std::path::Path;

pub fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

pub fn init_log() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(true)
        .format_timestamp(None)
        .try_init();
}

pub const CASE: &str = "\
FORMAT
type: ensight

GEOMETRY
model: engine.geo

VARIABLE
scalar per node: Temperature engine.tmp
vector per node: Velocity engine.vel
scalar per element: 1 Quality engine.qua
tensor symm per element: Stress engine.str
complex scalar per node: Pressure engine_r.prs engine_i.prs
scalar per measured node: Probe engine.prb
";

/// one unstructured part with 2 tria3 and 1 quad4 cells, one 2x2x1 structured part
pub const GEOMETRY: &str = "\
engine geometry
written by hand
node id given
element id off
coordinates
       5
      10 0.00000e+00 0.00000e+00 0.00000e+00
      20 1.00000e+00 0.00000e+00 0.00000e+00
      30 1.00000e+00 1.00000e+00 0.00000e+00
      40 0.00000e+00 1.00000e+00 0.00000e+00
      50 2.00000e+00 5.00000e-01 0.00000e+00
part 1
fluid
tria3
       2
      10      20      50
      20      30      50
quad4
       1
      10      20      30      40
part 2
wall
block iblanked
       2       2       1
 0.0 1.0 0.0 1.0
 0.0 0.0 1.0 1.0
 3.0 3.0 3.0 3.0
 1 0 1 1
";

pub const TEMPERATURE: &str = "\
temperature
 300.0 301.0 302.0 303.0 304.0
part 2
block
 1.0 2.0 3.0 4.0
";

pub const VELOCITY: &str = "\
velocity
 1.0 0.0 0.0 2.0 0.0 0.0
 3.0 0.0 0.0 4.0 0.0 0.0
 5.0 0.0 0.0
";

pub const QUALITY: &str = "\
quality per element
part 1
tria3
 0.25 0.5
quad4
 0.75
part 2
block
 9.0
";

pub const STRESS: &str = "\
stress per element
part 1
quad4
 1.0 2.0 3.0 4.0 5.0 6.0
tria3
 11.0 12.0 13.0 14.0 15.0 16.0
 21.0 22.0 23.0 24.0 25.0 26.0
";

pub const PRESSURE_REAL: &str = "real\n1 2 3 4 5\n";
pub const PRESSURE_IMAGINARY: &str = "imaginary\n-1 -2 -3 -4 -5\n";

/// write the full dataset into `dir`
pub fn write_dataset(dir: &Path) {
    write(dir, "engine.case", CASE);
    write(dir, "engine.geo", GEOMETRY);
    write(dir, "engine.tmp", TEMPERATURE);
    write(dir, "engine.vel", VELOCITY);
    write(dir, "engine.qua", QUALITY);
    write(dir, "engine.str", STRESS);
    write(dir, "engine_r.prs", PRESSURE_REAL);
    write(dir, "engine_i.prs", PRESSURE_IMAGINARY);
}
