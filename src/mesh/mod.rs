//! # Mesh Information
//!
//! A [`Mesh`] is everything the geometry file describes: the shared point list used by every
//! unstructured part, and the parts themselves keyed by their 0-based part number.
//!
//! Parts come in two flavours. A [`StructuredPart`] owns its points and arranges them in an
//! `i x j x k` block, its cells are implicit. An [`UnstructuredPart`] lists explicit cells
//! whose point indices point into [`Mesh::points`].
//!
//! ## Element kinds and cell shapes
//!
//! The geometry file can list 15 [`ElementKind`]s. Each kind is stored as the linear
//! [`CellShape`] it is built on: higher order kinds (`tria6`, `hexa20`, ...) keep only their
//! corner nodes. The kind a cell was read as is not lost though, every unstructured part
//! records which cells were read as which kind in its [`CellIndexTable`]. Per-element
//! variable files are laid out kind by kind, and need that table to put each value on the
//! right cell.
//!
//! ## Point ids
//!
//! When the geometry file declares `node id given`, each coordinate line carries an external
//! id and elements refer to points by that id. The mapping from external id to position in
//! [`Mesh::points`] is kept in [`Mesh::point_ids`].

mod element;
mod structured;
mod unstructured;

pub use element::{CellShape, ElementKind};
pub use structured::StructuredPart;
pub use unstructured::{Cell, CellIndexTable, UnstructuredPart};

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// How the geometry file treats node or element ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdMode {
    /// no ids are listed
    Off,
    /// ids are listed and elements refer to points by id
    Given,
    /// ids are not listed, they are assigned in order
    #[default]
    Assign,
    /// ids may be listed but carry no meaning
    Ignore,
}

impl IdMode {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "off" => Some(Self::Off),
            "given" => Some(Self::Given),
            "assign" => Some(Self::Assign),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Given => "given",
            Self::Assign => "assign",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for IdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// External point ids in coordinate block order, with a reverse lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointIdMap {
    ids: Vec<usize>,
    index: HashMap<usize, usize>,
}

impl PointIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the external id of the next point. If an id is repeated the first point
    /// carrying it is the one elements resolve to.
    pub fn push(&mut self, id: usize) {
        let position = self.ids.len();
        self.ids.push(id);
        self.index.entry(id).or_insert(position);
    }

    /// position in the coordinate block of the point with external id `id`
    pub fn resolve(&self, id: usize) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// external ids in coordinate block order
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<usize> for PointIdMap {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut map = Self::new();
        iter.into_iter().for_each(|id| map.push(id));
        map
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One independently numbered piece of the mesh
pub enum Part {
    Structured(StructuredPart),
    Unstructured(UnstructuredPart),
}

impl Part {
    pub fn description(&self) -> &str {
        match self {
            Self::Structured(part) => &part.description,
            Self::Unstructured(part) => &part.description,
        }
    }

    pub fn cell_count(&self) -> usize {
        match self {
            Self::Structured(part) => part.cell_count(),
            Self::Unstructured(part) => part.cell_count(),
        }
    }

    pub fn as_structured(&self) -> Option<&StructuredPart> {
        match self {
            Self::Structured(part) => Some(part),
            Self::Unstructured(_) => None,
        }
    }

    pub fn as_unstructured(&self) -> Option<&UnstructuredPart> {
        match self {
            Self::Structured(_) => None,
            Self::Unstructured(part) => Some(part),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Points and parts decoded from a geometry file
pub struct Mesh {
    /// the two free-form lines at the top of the geometry file
    pub description: [String; 2],
    pub node_ids: IdMode,
    pub element_ids: IdMode,
    /// points shared by every unstructured part
    pub points: Vec<[f64; 3]>,
    /// present only when node ids are `given`
    pub point_ids: Option<PointIdMap>,
    /// parts keyed by their 0-based number
    pub parts: BTreeMap<usize, Part>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn part(&self, id: usize) -> Option<&Part> {
        self.parts.get(&id)
    }

    /// numbers of every unstructured part, in ascending order
    pub fn unstructured_part_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.parts
            .iter()
            .filter(|(_, part)| matches!(part, Part::Unstructured(_)))
            .map(|(id, _)| *id)
    }

    /// Number of points a per-node array over part `id` covers. Unstructured parts all
    /// share the mesh's point list.
    pub fn part_point_count(&self, id: usize) -> Option<usize> {
        self.parts.get(&id).map(|part| match part {
            Part::Structured(part) => part.point_count(),
            Part::Unstructured(_) => self.point_count(),
        })
    }

    pub fn cell_count(&self) -> usize {
        self.parts.values().map(Part::cell_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_ids_resolve_to_positions() {
        let ids: PointIdMap = [5, 2, 9].into_iter().collect();
        assert_eq!(ids.resolve(9), Some(2));
        assert_eq!(ids.resolve(5), Some(0));
        assert_eq!(ids.resolve(1), None);
        assert_eq!(ids.ids(), &[5, 2, 9]);
    }

    #[test]
    fn ids_are_assigned_by_default() {
        assert_eq!(IdMode::default(), IdMode::Assign);
        assert_eq!(Mesh::new().node_ids, IdMode::Assign);
    }

    #[test]
    fn repeated_ids_resolve_to_first_point() {
        let ids: PointIdMap = [3, 3].into_iter().collect();
        assert_eq!(ids.resolve(3), Some(0));
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn per_node_counts() {
        let mut mesh = Mesh::new();
        mesh.points = vec![[0.; 3]; 4];
        mesh.parts
            .insert(0, Part::Unstructured(UnstructuredPart::default()));
        mesh.parts.insert(
            3,
            Part::Structured(StructuredPart {
                dimensions: [2, 3, 1],
                ..Default::default()
            }),
        );

        assert_eq!(mesh.part_point_count(0), Some(4));
        assert_eq!(mesh.part_point_count(3), Some(6));
        assert_eq!(mesh.part_point_count(1), None);
        assert_eq!(mesh.unstructured_part_ids().collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn id_mode_keywords() {
        for mode in [IdMode::Off, IdMode::Given, IdMode::Assign, IdMode::Ignore] {
            assert_eq!(IdMode::from_keyword(mode.keyword()), Some(mode));
        }
        assert_eq!(IdMode::from_keyword("maybe"), None);
    }
}
