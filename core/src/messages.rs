//! Response description catalogue.
//!
//! Generic texts are plain constants. Resource-scoped texts are [`Text`]
//! templates filled with the lower-cased entity noun.

use crate::template::Segment::{Lit, Lower};
use crate::template::Text;

/// Request validation failed.
pub const INVALID_INPUT: &str = "Invalid input data";
/// Unhandled server-side failure.
pub const SERVER_ERROR: &str = "Internal server error";

/// `"{noun} not found"`
pub const NOT_FOUND: Text = Text(&[Lower, Lit(" not found")]);
/// `"{noun} created successfully"`
pub const CREATED: Text = Text(&[Lower, Lit(" created successfully")]);
/// `"{noun} updated successfully"`
pub const UPDATED: Text = Text(&[Lower, Lit(" updated successfully")]);
/// `"{noun} deleted successfully"`
pub const DELETED: Text = Text(&[Lower, Lit(" deleted successfully")]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Noun;

    #[test]
    fn test_scoped_messages() {
        let noun = Noun::new("Order");
        assert_eq!(NOT_FOUND.render(&noun), "order not found");
        assert_eq!(CREATED.render(&noun), "order created successfully");
        assert_eq!(UPDATED.render(&noun), "order updated successfully");
        assert_eq!(DELETED.render(&noun), "order deleted successfully");
    }
}
