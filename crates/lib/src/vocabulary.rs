//! # Descriptor Vocabulary
//!
//! The fixed phrase tables the enhancer draws from. Every phrase is plain text
//! without line breaks or `=` characters, so enhanced prompts can be dropped
//! straight into the export document.

/// A named group of interchangeable descriptor phrases.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorCategory {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
}

pub const STYLE: DescriptorCategory = DescriptorCategory {
    name: "style",
    phrases: &[
        "1980s anime style",
        "retro 80s cel animation",
        "hand-painted animation cel",
        "classic Saturday morning cartoon look",
        "vintage OVA aesthetic",
        "80s mecha anime style",
        "analog era television animation",
        "bold ink outlines",
    ],
};

pub const PALETTE: DescriptorCategory = DescriptorCategory {
    name: "palette",
    phrases: &[
        "neon pink and electric blue palette",
        "sunset orange and magenta gradients",
        "saturated primary colors",
        "synthwave purple hues",
        "pastel sky with teal accents",
        "limited flat color palette",
        "chrome and cyan highlights",
    ],
};

pub const TEXTURE: DescriptorCategory = DescriptorCategory {
    name: "texture",
    phrases: &[
        "film grain",
        "VHS scan lines",
        "soft analog bloom",
        "slight chromatic aberration",
        "painted watercolor backgrounds",
        "airbrushed highlights",
        "faded print texture",
    ],
};

pub const LIGHTING: DescriptorCategory = DescriptorCategory {
    name: "lighting",
    phrases: &[
        "dramatic rim lighting",
        "glowing neon signage",
        "high contrast cel shading",
        "lens flare sparkles",
        "moody twilight glow",
        "hard drop shadows",
    ],
};

pub const COMPOSITION: DescriptorCategory = DescriptorCategory {
    name: "composition",
    phrases: &[
        "dynamic action pose",
        "wide cinematic establishing shot",
        "speed lines in the background",
        "close-up with expressive eyes",
        "low angle hero shot",
        "4:3 television framing",
    ],
};

/// All categories, in the order their phrases are appended.
pub const CATEGORIES: [DescriptorCategory; 5] = [STYLE, PALETTE, TEXTURE, LIGHTING, COMPOSITION];

/// Size of the smallest category; the upper bound for phrases per category.
pub fn smallest_category_len() -> usize {
    CATEGORIES
        .iter()
        .map(|category| category.phrases.len())
        .min()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_are_export_safe() {
        for category in CATEGORIES {
            assert!(!category.phrases.is_empty(), "{} is empty", category.name);
            for phrase in category.phrases {
                assert!(!phrase.contains('\n'));
                assert!(!phrase.contains('='));
                assert!(!phrase.contains(','), "'{phrase}' would blur the separator");
                assert_eq!(phrase.trim(), *phrase);
            }
        }
    }

    #[test]
    fn test_smallest_category() {
        assert_eq!(smallest_category_len(), 6);
    }
}
