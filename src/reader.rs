//! Reading a case file together with every file it refers to

use crate::prelude::*;
use crate::utils::has_wildcard;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Read a case file and every geometry and variable file it lists.
///
/// Companion files are looked up in the directory holding the case file. Use a
/// [`CaseReader`] to look them up somewhere else.
///
/// ```ignore
/// let dataset = ensight::read_case("./run/engine.case")?;
///
/// for field in dataset.fields_named("Pressure") {
///     println!("{:?}: {} values", field.scope, field.len());
/// }
/// ```
pub fn read_case<P: AsRef<Path>>(path: P) -> Result<Dataset, Error> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    CaseReader::new().with_base_dir(dir).read(&name)
}

/// Configures how a case file and its companion files are read
pub struct CaseReader {
    resolver: Box<dyn ResolvePath>,
    parallel: bool,
}

impl Default for CaseReader {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CaseReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseReader")
            .field("parallel", &self.parallel)
            .finish_non_exhaustive()
    }
}

impl CaseReader {
    /// File names are resolved against the working directory and variable files are decoded
    /// in parallel when the `parallel` feature is on.
    pub fn new() -> Self {
        Self {
            resolver: Box::new(BaseDirectory::new(".")),
            parallel: true,
        }
    }

    /// resolve every file name relative to `dir`
    pub fn with_base_dir<P: Into<PathBuf>>(self, dir: P) -> Self {
        self.with_resolver(BaseDirectory::new(dir))
    }

    pub fn with_resolver<T: ResolvePath + 'static>(mut self, resolver: T) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Decode variable files on the rayon thread pool. Has no effect without the
    /// `parallel` feature.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Read the case file `case_name` and everything it lists. Either every file decodes
    /// or an error is returned, there are no partial results.
    pub fn read(&self, case_name: &str) -> Result<Dataset, Error> {
        let case = parse::parse_case(self.open(case_name)?, case_name).map_err(ParseError::from)?;

        // time series are rejected before any companion file is opened
        if has_wildcard(&case.geometry_file) {
            return Err(Error::UnsupportedTimeSeries(case.geometry_file.clone()));
        }
        for declaration in &case.variables {
            if let Some(file) = declaration
                .sources
                .files()
                .into_iter()
                .find(|file| has_wildcard(file))
            {
                return Err(Error::UnsupportedTimeSeries(file.to_string()));
            }
        }

        let geometry = self.open(&case.geometry_file)?;
        let mesh =
            parse::parse_geometry(geometry, &case.geometry_file).map_err(ParseError::from)?;

        log::debug!(
            "`{}`: {} points, {} parts",
            case.geometry_file,
            mesh.point_count(),
            mesh.parts.len()
        );

        let fields = self.read_fields(&case, &mesh)?;

        Ok(Dataset::new(case, mesh, fields))
    }

    fn open(&self, name: &str) -> Result<BufReader<File>, Error> {
        let path = self.resolver.resolve(name);
        let file = File::open(&path).map_err(|source| Error::FileNotFound { path, source })?;
        Ok(BufReader::new(file))
    }

    /// decode every declared variable, keeping declaration order
    fn read_fields(&self, case: &CaseDescriptor, mesh: &Mesh) -> Result<Vec<FieldArray>, Error> {
        let jobs: Vec<Job> = case
            .variables
            .iter()
            .filter(|declaration| !declaration.kind.is_measured())
            .flat_map(|declaration| {
                declaration
                    .decodes()
                    .into_iter()
                    .map(move |(label, file)| Job {
                        label,
                        file,
                        kind: declaration.kind,
                    })
            })
            .collect();

        let decode = |job: &Job| -> Result<Vec<FieldArray>, Error> {
            let input = self.open(job.file)?;
            let arrays = parse::parse_variable(input, job.file, mesh, job.kind, &job.label)
                .map_err(ParseError::from)?;
            Ok(arrays)
        };

        #[cfg(feature = "parallel")]
        let decoded: Result<Vec<Vec<FieldArray>>, Error> = if self.parallel {
            log::debug!("decoding {} variable files on the rayon pool", jobs.len());
            jobs.par_iter().map(decode).collect()
        } else {
            jobs.iter().map(decode).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let decoded: Result<Vec<Vec<FieldArray>>, Error> = jobs.iter().map(decode).collect();

        Ok(decoded?.into_iter().flatten().collect())
    }
}

/// one variable file to decode
struct Job<'a> {
    label: String,
    file: &'a str,
    kind: VariableKind,
}
