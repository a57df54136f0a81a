use super::element::{CellShape, ElementKind};

/// A single cell of an unstructured part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub shape: CellShape,
    /// indices into [`Mesh::points`](`crate::mesh::Mesh::points`)
    pub point_indices: Vec<usize>,
}

impl Cell {
    pub fn new(shape: CellShape, point_indices: Vec<usize>) -> Self {
        Self {
            shape,
            point_indices,
        }
    }
}

/// Cells of a part grouped by the element kind they were read as
///
/// Kinds are kept in the order they first appeared in the geometry file and each kind lists
/// its cells in read order. Variable files list per-element values in exactly this order, so
/// the `i`th value of a kind section belongs to the `i`th cell index stored here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellIndexTable {
    groups: Vec<(ElementKind, Vec<usize>)>,
}

impl CellIndexTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// record that cell `cell` of the part was read as `kind`
    pub(crate) fn push(&mut self, kind: ElementKind, cell: usize) {
        match self.groups.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, cells)) => cells.push(cell),
            None => self.groups.push((kind, vec![cell])),
        }
    }

    /// cells read as `kind`, in read order
    pub fn get(&self, kind: ElementKind) -> Option<&[usize]> {
        self.groups
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, cells)| cells.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementKind, &[usize])> {
        self.groups
            .iter()
            .map(|(kind, cells)| (*kind, cells.as_slice()))
    }

    pub fn kinds(&self) -> impl Iterator<Item = ElementKind> + '_ {
        self.groups.iter().map(|(kind, _)| *kind)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// A part built from explicit cells over the mesh's shared point list
pub struct UnstructuredPart {
    pub description: String,
    pub cells: Vec<Cell>,
    pub groups: CellIndexTable,
}

impl UnstructuredPart {
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Append a cell read as `kind`, returning its index within the part. The cell is also
    /// recorded in [`groups`](Self::groups), so per-element files can be decoded against it.
    pub fn push_cell(&mut self, kind: ElementKind, point_indices: Vec<usize>) -> usize {
        let index = self.cells.len();
        self.cells.push(Cell::new(kind.shape(), point_indices));
        self.groups.push(kind, index);
        index
    }
}
