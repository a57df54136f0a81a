//! Contents of a case file

use crate::array::Attachment;

/// Shape of the values a variable holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    Vector,
    /// symmetric tensor, stored as its 6 unique components
    TensorSymm,
}

impl Shape {
    pub fn components(&self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vector => 3,
            Self::TensorSymm => 6,
        }
    }
}

/// Every variable type a case file can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    ScalarPerNode,
    VectorPerNode,
    TensorSymmPerNode,
    ScalarPerElement,
    VectorPerElement,
    TensorSymmPerElement,
    ScalarPerMeasuredNode,
    VectorPerMeasuredNode,
    ComplexScalarPerNode,
    ComplexVectorPerNode,
    ComplexScalarPerElement,
    ComplexVectorPerElement,
}

impl VariableKind {
    pub fn shape(&self) -> Shape {
        match self {
            Self::ScalarPerNode
            | Self::ScalarPerElement
            | Self::ScalarPerMeasuredNode
            | Self::ComplexScalarPerNode
            | Self::ComplexScalarPerElement => Shape::Scalar,
            Self::VectorPerNode
            | Self::VectorPerElement
            | Self::VectorPerMeasuredNode
            | Self::ComplexVectorPerNode
            | Self::ComplexVectorPerElement => Shape::Vector,
            Self::TensorSymmPerNode | Self::TensorSymmPerElement => Shape::TensorSymm,
        }
    }

    pub fn components(&self) -> usize {
        self.shape().components()
    }

    pub fn attachment(&self) -> Attachment {
        match self {
            Self::ScalarPerElement
            | Self::VectorPerElement
            | Self::TensorSymmPerElement
            | Self::ComplexScalarPerElement
            | Self::ComplexVectorPerElement => Attachment::Cell,
            _ => Attachment::Point,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            Self::ComplexScalarPerNode
                | Self::ComplexVectorPerNode
                | Self::ComplexScalarPerElement
                | Self::ComplexVectorPerElement
        )
    }

    /// measured variables live on the measured geometry, which is not decoded
    pub fn is_measured(&self) -> bool {
        matches!(
            self,
            Self::ScalarPerMeasuredNode | Self::VectorPerMeasuredNode
        )
    }
}

/// The file (or pair of files) holding a variable's values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sources {
    Real(String),
    Complex { real: String, imaginary: String },
}

impl Sources {
    pub fn files(&self) -> Vec<&str> {
        match self {
            Self::Real(file) => vec![file.as_str()],
            Self::Complex { real, imaginary } => vec![real.as_str(), imaginary.as_str()],
        }
    }
}

/// A single line of the `VARIABLE` section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    /// the variable's description, used as the label of the decoded arrays
    pub label: String,
    pub sources: Sources,
}

impl VariableDeclaration {
    /// Label and file of every array this declaration decodes into. Complex variables
    /// decode into a real array suffixed `_r` and an imaginary array suffixed `_i`.
    pub fn decodes(&self) -> Vec<(String, &str)> {
        match &self.sources {
            Sources::Real(file) => vec![(self.label.clone(), file.as_str())],
            Sources::Complex { real, imaginary } => vec![
                (format!("{}_r", self.label), real.as_str()),
                (format!("{}_i", self.label), imaginary.as_str()),
            ],
        }
    }
}

/// Files and variables listed by a case file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaseDescriptor {
    pub geometry_file: String,
    pub measured_file: Option<String>,
    pub match_file: Option<String>,
    /// declarations in the order they appear, which is the order they are decoded in
    pub variables: Vec<VariableDeclaration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_declarations_decode_twice() {
        let declaration = VariableDeclaration {
            kind: VariableKind::ComplexScalarPerNode,
            label: "Pressure".into(),
            sources: Sources::Complex {
                real: "p_re.scl".into(),
                imaginary: "p_im.scl".into(),
            },
        };

        assert_eq!(
            declaration.decodes(),
            vec![
                ("Pressure_r".to_string(), "p_re.scl"),
                ("Pressure_i".to_string(), "p_im.scl")
            ]
        );
        assert_eq!(declaration.kind.components(), 1);
        assert_eq!(declaration.kind.attachment(), Attachment::Point);
    }

    #[test]
    fn kind_properties() {
        assert_eq!(VariableKind::TensorSymmPerElement.components(), 6);
        assert_eq!(VariableKind::TensorSymmPerElement.attachment(), Attachment::Cell);
        assert_eq!(VariableKind::VectorPerMeasuredNode.components(), 3);
        assert!(VariableKind::VectorPerMeasuredNode.is_measured());
        assert!(!VariableKind::VectorPerNode.is_complex());
    }
}
