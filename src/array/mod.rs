//! container types for field values read from variable files

use ndarray::{Array2, ArrayView1};

/// What a field's values are attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attachment {
    Point,
    Cell,
}

/// Which entities a field array covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartScope {
    /// the point list shared by every unstructured part
    SharedPoints,
    /// a single part, by its 0-based number
    Part(usize),
}

#[derive(Debug, Clone, PartialEq)]
/// Values of one variable over one scope
///
/// `values` holds one row per entity (point or cell) in the scope's natural order, and one
/// column per component: 1 for scalars, 3 for vectors, 6 for symmetric tensors
/// (`xx yy zz xy yz zx`).
pub struct FieldArray {
    pub label: String,
    pub attachment: Attachment,
    pub scope: PartScope,
    pub values: Array2<f64>,
}

impl FieldArray {
    pub fn new(label: String, attachment: Attachment, scope: PartScope, values: Array2<f64>) -> Self {
        Self {
            label,
            attachment,
            scope,
            values,
        }
    }

    pub fn components(&self) -> usize {
        self.values.ncols()
    }

    /// number of entities covered
    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.values.nrows() == 0
    }

    /// all components of entity `index`
    pub fn get(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        if index < self.len() {
            Some(self.values.row(index))
        } else {
            None
        }
    }

    /// values of a single component, one per entity
    pub fn component(&self, component: usize) -> Option<ArrayView1<'_, f64>> {
        if component < self.components() {
            Some(self.values.column(component))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_entities() {
        let values = Array2::from_shape_vec((2, 3), vec![1., 2., 3., 4., 5., 6.]).unwrap();
        let field = FieldArray::new("velocity".into(), Attachment::Point, PartScope::Part(0), values);

        assert_eq!(field.components(), 3);
        assert_eq!(field.len(), 2);
        assert_eq!(field.get(1).unwrap().to_vec(), vec![4., 5., 6.]);
        assert_eq!(field.component(2).unwrap().to_vec(), vec![3., 6.]);
        assert!(field.get(2).is_none());
        assert!(field.component(3).is_none());
    }
}
