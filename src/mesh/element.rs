use std::fmt;

/// Linear cell topology every element kind is reduced to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellShape {
    Vertex,
    Line,
    Triangle,
    Quad,
    Tetrahedron,
    Pyramid,
    Hexahedron,
    Wedge,
}

impl CellShape {
    /// number of corner points of the shape
    pub fn point_count(&self) -> usize {
        match self {
            Self::Vertex => 1,
            Self::Line => 2,
            Self::Triangle => 3,
            Self::Quad => 4,
            Self::Tetrahedron => 4,
            Self::Pyramid => 5,
            Self::Hexahedron => 8,
            Self::Wedge => 6,
        }
    }

    /// the linear element kind with this topology
    pub fn linear_kind(&self) -> ElementKind {
        match self {
            Self::Vertex => ElementKind::Point,
            Self::Line => ElementKind::Bar2,
            Self::Triangle => ElementKind::Tria3,
            Self::Quad => ElementKind::Quad4,
            Self::Tetrahedron => ElementKind::Tetra4,
            Self::Pyramid => ElementKind::Pyramid5,
            Self::Hexahedron => ElementKind::Hexa8,
            Self::Wedge => ElementKind::Penta6,
        }
    }
}

/// The element kinds an unstructured part can list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Point,
    Bar2,
    Bar3,
    Tria3,
    Tria6,
    Quad4,
    Quad8,
    Tetra4,
    Tetra10,
    Pyramid5,
    Pyramid13,
    Hexa8,
    Hexa20,
    Penta6,
    Penta15,
}

impl ElementKind {
    pub const ALL: [ElementKind; 15] = [
        Self::Point,
        Self::Bar2,
        Self::Bar3,
        Self::Tria3,
        Self::Tria6,
        Self::Quad4,
        Self::Quad8,
        Self::Tetra4,
        Self::Tetra10,
        Self::Pyramid5,
        Self::Pyramid13,
        Self::Hexa8,
        Self::Hexa20,
        Self::Penta6,
        Self::Penta15,
    ];

    /// section keyword of this kind in geometry and variable files
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Bar2 => "bar2",
            Self::Bar3 => "bar3",
            Self::Tria3 => "tria3",
            Self::Tria6 => "tria6",
            Self::Quad4 => "quad4",
            Self::Quad8 => "quad8",
            Self::Tetra4 => "tetra4",
            Self::Tetra10 => "tetra10",
            Self::Pyramid5 => "pyramid5",
            Self::Pyramid13 => "pyramid13",
            Self::Hexa8 => "hexa8",
            Self::Hexa20 => "hexa20",
            Self::Penta6 => "penta6",
            Self::Penta15 => "penta15",
        }
    }

    /// Look up a section keyword. Matching is exact, `tria3x` is not `tria3`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.keyword() == keyword)
    }

    /// number of nodes listed for each element of this kind
    pub fn node_count(&self) -> usize {
        match self {
            Self::Point => 1,
            Self::Bar2 => 2,
            Self::Bar3 => 3,
            Self::Tria3 => 3,
            Self::Tria6 => 6,
            Self::Quad4 => 4,
            Self::Quad8 => 8,
            Self::Tetra4 => 4,
            Self::Tetra10 => 10,
            Self::Pyramid5 => 5,
            Self::Pyramid13 => 13,
            Self::Hexa8 => 8,
            Self::Hexa20 => 20,
            Self::Penta6 => 6,
            Self::Penta15 => 15,
        }
    }

    pub fn shape(&self) -> CellShape {
        match self {
            Self::Point => CellShape::Vertex,
            Self::Bar2 | Self::Bar3 => CellShape::Line,
            Self::Tria3 | Self::Tria6 => CellShape::Triangle,
            Self::Quad4 | Self::Quad8 => CellShape::Quad,
            Self::Tetra4 | Self::Tetra10 => CellShape::Tetrahedron,
            Self::Pyramid5 | Self::Pyramid13 => CellShape::Pyramid,
            Self::Hexa8 | Self::Hexa20 => CellShape::Hexahedron,
            Self::Penta6 | Self::Penta15 => CellShape::Wedge,
        }
    }

    /// higher order kinds lose their mid-side nodes when read
    pub fn is_higher_order(&self) -> bool {
        self.node_count() > self.shape().point_count()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
