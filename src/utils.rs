/// Time dependent case files stand in a wildcard for the step number, `flow***.scl`
pub(crate) fn has_wildcard(name: &str) -> bool {
    name.contains('*')
}
