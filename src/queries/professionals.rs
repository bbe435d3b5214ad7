//! Professional lookups over the loaded list.

use crate::models::Professional;

/// Query interface for the professionals of the current session.
pub struct ProfessionalQuery<'a> {
    professionals: &'a [Professional],
}

impl<'a> ProfessionalQuery<'a> {
    pub fn new(professionals: &'a [Professional]) -> Self {
        Self { professionals }
    }

    /// All professionals, in load order.
    pub fn list(&self) -> &'a [Professional] {
        self.professionals
    }

    pub fn get(&self, id: &str) -> Option<&'a Professional> {
        self.professionals.iter().find(|p| p.id == id)
    }

    /// Professionals whose name contains `name` (case-insensitive).
    pub fn search(&self, name: &str) -> Vec<&'a Professional> {
        let needle = name.to_lowercase();
        self.professionals
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.professionals.len()
    }
}
