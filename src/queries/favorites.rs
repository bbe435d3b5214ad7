//! Favorite establishment lookups.

use crate::models::Favorite;

/// Query interface for the client's favorite establishments.
pub struct FavoriteQuery<'a> {
    favorites: &'a [Favorite],
}

impl<'a> FavoriteQuery<'a> {
    pub fn new(favorites: &'a [Favorite]) -> Self {
        Self { favorites }
    }

    pub fn list(&self) -> &'a [Favorite] {
        self.favorites
    }

    pub fn get(&self, id: &str) -> Option<&'a Favorite> {
        self.favorites.iter().find(|f| f.id == id)
    }

    /// Favorites rated at least `rating`, in load order.
    pub fn min_rating(&self, rating: f64) -> Vec<&'a Favorite> {
        self.favorites.iter().filter(|f| f.rating >= rating).collect()
    }
}
