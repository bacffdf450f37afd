//! # Templates
//!
//! Template strings made of literal segments and named noun slots.
//! Rendering fills the slots from a [`Noun`]; there is no search/replace.

/// One piece of a template string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Literal text.
    Lit(&'static str),
    /// The entity name, lower-cased.
    Lower,
    /// The entity name as given.
    Original,
}

/// A template string with noun slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text(pub &'static [Segment]);

impl Text {
    /// Fills every slot from `noun`.
    pub fn render(&self, noun: &Noun) -> String {
        let mut out = String::new();
        for segment in self.0 {
            match segment {
                Segment::Lit(s) => out.push_str(s),
                Segment::Lower => out.push_str(&noun.lower),
                Segment::Original => out.push_str(&noun.original),
            }
        }
        out
    }
}

/// The two spellings of an entity name used by templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Noun {
    /// Name as given, e.g. `OrderItem`.
    pub original: String,
    /// Lower-cased name, e.g. `orderitem`.
    pub lower: String,
}

impl Noun {
    /// Derives both spellings from an entity name.
    pub fn new(name: &str) -> Self {
        Self {
            original: name.to_string(),
            lower: name.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Segment::{Lit, Lower, Original};

    #[test]
    fn test_noun_slots() {
        let noun = Noun::new("OrderItem");
        let text = Text(&[Lower, Lit(" / "), Original]);
        assert_eq!(text.render(&noun), "orderitem / OrderItem");
    }

    #[test]
    fn test_slot_free_text_is_verbatim() {
        let noun = Noun::new("Resource");
        assert_eq!(Text(&[Lit("resource")]).render(&noun), "resource");
    }
}
