//! Rating value shown by the `StarRating` widget

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rating {
    pub score: f32,
    pub out_of: u8,
}

impl Rating {
    /// The rating displayed across the storefront.
    pub const FEATURED: Rating = Rating { score: 4.95, out_of: 5 };

    /// Number of star icons in the row. Every star is drawn filled.
    pub fn stars(&self) -> usize {
        usize::from(self.out_of)
    }

    pub fn label(&self) -> String {
        format!("{} out of {}", self.score, self.out_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_rating() {
        assert_eq!(Rating::FEATURED.stars(), 5);
        assert_eq!(Rating::FEATURED.label(), "4.95 out of 5");
    }
}
