// src/table.rs
use crate::document::Fcs;

/// Which parameter name to put in the header row of a projected table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Display names (`$PnS`), falling back to the short name when a
    /// channel has none
    Display,
    /// Short names (`$PnN`)
    Short,
}

/// Flatten a decoded document into a string matrix for export: one
/// header row of parameter names in channel order, then one row per
/// event taken verbatim from the decoder's rendered matrix.
///
/// Pure projection; it cannot fail on an already-built document.
pub fn project(document: &Fcs, kind: NameKind) -> Vec<Vec<String>> {
    let names: Vec<String> = document
        .text
        .parameters
        .iter()
        .map(|parameter| match kind {
            NameKind::Display if !parameter.display_name.is_empty() => {
                parameter.display_name.clone()
            }
            NameKind::Display => parameter.short_name.clone(),
            NameKind::Short => parameter.short_name.clone(),
        })
        .collect();

    let mut table = Vec::with_capacity(document.data.rendered.len() + 1);
    table.push(names);
    table.extend(document.data.rendered.iter().cloned());
    table
}
