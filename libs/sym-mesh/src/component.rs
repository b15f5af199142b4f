//! # Vertex Components
//!
//! Conversion between vertex indices and the host's component names
//! (`mesh.vtx[12]`, `mesh.vtx[3:7]`). Check results are handed back to the
//! host as names so it can replace its selection with them.

use config::constants::COMPONENT_PREFIX;

use crate::error::{SymmetryError, SymmetryResult};

/// Formats one component name per index.
///
/// # Examples
/// ```
/// use sym_mesh::component::component_names;
/// assert_eq!(component_names("|body", &[1, 4]), vec!["|body.vtx[1]", "|body.vtx[4]"]);
/// ```
pub fn component_names(mesh: &str, indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .map(|index| format!("{mesh}.{COMPONENT_PREFIX}[{index}]"))
        .collect()
}

/// A parsed vertex component reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexComponent {
    /// Mesh path before the component suffix.
    pub mesh: String,
    /// Referenced vertices, ranges expanded.
    pub indices: Vec<usize>,
}

/// Parses `mesh.vtx[i]` or the inclusive range form `mesh.vtx[a:b]`.
///
/// # Examples
/// ```
/// use sym_mesh::component::parse_component;
///
/// let single = parse_component("|grp|body.vtx[5]").unwrap();
/// assert_eq!(single.mesh, "|grp|body");
/// assert_eq!(single.indices, vec![5]);
///
/// let range = parse_component("body.vtx[2:4]").unwrap();
/// assert_eq!(range.indices, vec![2, 3, 4]);
///
/// assert!(parse_component("body.e[2]").is_err());
/// ```
pub fn parse_component(input: &str) -> SymmetryResult<VertexComponent> {
    let invalid = || SymmetryError::InvalidComponent {
        input: input.to_string(),
    };
    let marker = format!(".{COMPONENT_PREFIX}[");

    let start = input.rfind(&marker).ok_or_else(invalid)?;
    let mesh = &input[..start];
    let body = input[start + marker.len()..]
        .strip_suffix(']')
        .ok_or_else(invalid)?;
    if mesh.is_empty() {
        return Err(invalid());
    }

    let parse_index = |text: &str| text.trim().parse::<usize>().map_err(|_| invalid());
    let indices = match body.split_once(':') {
        Some((first, last)) => {
            let (first, last) = (parse_index(first)?, parse_index(last)?);
            if first > last {
                return Err(invalid());
            }
            (first..=last).collect()
        }
        None => vec![parse_index(body)?],
    };

    Ok(VertexComponent {
        mesh: mesh.to_string(),
        indices,
    })
}

/// Parses a list of component names that must all belong to one mesh.
///
/// Returns the mesh path and the referenced indices in input order.
pub fn parse_components<'a, I>(inputs: I) -> SymmetryResult<Option<VertexComponent>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut merged: Option<VertexComponent> = None;
    for input in inputs {
        let component = parse_component(input)?;
        match merged.as_mut() {
            None => merged = Some(component),
            Some(existing) if existing.mesh == component.mesh => {
                existing.indices.extend(component.indices);
            }
            Some(existing) => {
                return Err(SymmetryError::WrongMesh {
                    bound: existing.mesh.clone(),
                    selected: component.mesh,
                });
            }
        }
    }
    Ok(merged)
}
