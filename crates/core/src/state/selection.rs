//! # Selection State
//!
//! The ordered, duplicate-free set of pain points the user has picked.

use crate::catalog::PainPoint;

/// Pain points chosen by the user, in the order they were picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    points: Vec<PainPoint>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the point if a point with the same name is selected,
    /// otherwise append it. Returns whether the point is now selected.
    pub fn toggle(&mut self, point: &PainPoint) -> bool {
        match self.position(&point.name) {
            Some(i) => {
                self.points.remove(i);
                false
            }
            None => {
                self.points.push(point.clone());
                true
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[PainPoint] {
        &self.points
    }

    /// Selected names in pick order
    pub fn names(&self) -> Vec<String> {
        self.points.iter().map(|p| p.name.clone()).collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.points.iter().position(|p| p.name == name)
    }
}
