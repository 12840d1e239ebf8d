// SPDX-License-Identifier: GPL-3.0-only

//! Category grid card
//!
//! A stateless presentational unit: given an image reference and a label,
//! renders an image and a caption. No state, no lifecycle beyond render.

/// Rendered output of a category card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub image_src: String,
    pub image_alt: String,
    pub caption: String,
}

/// A reusable grid card for one material category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    image: String,
    name: String,
}

impl CategoryCard {
    pub fn new(image: &str, name: &str) -> Self {
        Self {
            image: image.to_string(),
            name: name.to_string(),
        }
    }

    /// Pure render: (image, name) → card view
    pub fn render(&self) -> CardView {
        CardView {
            image_src: self.image.clone(),
            image_alt: format!("{} category", self.name),
            caption: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_contains_image_and_name_exactly_once() {
        let card = CategoryCard::new("https://example.org/glass.png", "Glass");
        let view = card.render();

        assert_eq!(view.image_src, "https://example.org/glass.png");
        assert_eq!(view.caption, "Glass");
        assert_eq!(view.image_alt, "Glass category");
    }

    #[test]
    fn render_is_pure() {
        let card = CategoryCard::new("img", "Paper");
        assert_eq!(card.render(), card.render());
    }
}
