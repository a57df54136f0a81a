use crate::array::{Attachment, FieldArray, PartScope};
use crate::case::CaseDescriptor;
use crate::mesh::Mesh;

#[derive(Debug, Clone, PartialEq)]
/// Everything decoded from a case file
///
/// `case` is the parsed case file, `mesh` the decoded geometry file, and `fields` every array
/// decoded from the variable files, in declaration order. A declaration may produce several
/// arrays: complex variables produce a real and an imaginary array, and a variable file holds
/// one array for each part (or the shared point list) it lists.
pub struct Dataset {
    pub case: CaseDescriptor,
    pub mesh: Mesh,
    pub fields: Vec<FieldArray>,
}

impl Dataset {
    pub fn new(case: CaseDescriptor, mesh: Mesh, fields: Vec<FieldArray>) -> Self {
        Self { case, mesh, fields }
    }

    /// every array decoded under `label`
    pub fn fields_named<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a FieldArray> {
        self.fields.iter().filter(move |field| field.label == label)
    }

    /// the array `label` holds over `scope`, if the variable file listed it
    pub fn field(&self, label: &str, scope: PartScope) -> Option<&FieldArray> {
        self.fields
            .iter()
            .find(|field| field.label == label && field.scope == scope)
    }

    /// Arrays attached to the points of part `id`. Unstructured parts see the arrays over the
    /// shared point list as well as their own.
    pub fn point_fields(&self, id: usize) -> impl Iterator<Item = &FieldArray> {
        let shared = self
            .mesh
            .part(id)
            .map(|part| part.as_unstructured().is_some())
            .unwrap_or(false);

        self.fields.iter().filter(move |field| {
            field.attachment == Attachment::Point
                && (field.scope == PartScope::Part(id)
                    || (shared && field.scope == PartScope::SharedPoints))
        })
    }

    /// arrays attached to the cells of part `id`
    pub fn cell_fields(&self, id: usize) -> impl Iterator<Item = &FieldArray> {
        self.fields.iter().filter(move |field| {
            field.attachment == Attachment::Cell && field.scope == PartScope::Part(id)
        })
    }
}
