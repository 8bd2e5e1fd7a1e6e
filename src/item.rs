//! Item stacks and the teleport item tag.
//!
//! Item creation and cosmetics live in the host; the engine only needs to
//! recognize its own tagged item and match stacks for consume-on-success.

/// Persistent tag value identifying the teleport item.
const ITEM_TAG: &str = "homebound:star";

/// A stack of items as seen across the host boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    /// Material/kind identifier.
    pub kind: String,
    /// Opaque persistent tag, if any.
    pub tag: Option<String>,
    /// Number of items in the stack.
    pub quantity: u32,
}

impl ItemStack {
    /// Create a stack of `quantity` plain items of the given kind.
    pub fn new(kind: impl Into<String>, quantity: u32) -> Self {
        Self {
            kind: kind.into(),
            tag: None,
            quantity,
        }
    }

    /// True when `other` is the same item, ignoring stack size.
    ///
    /// This is the match key used to find-and-remove one unit from a live
    /// inventory at completion time.
    pub fn is_similar(&self, other: &ItemStack) -> bool {
        self.kind == other.kind && self.tag == other.tag
    }
}

/// Create a tagged teleport item stack.
pub fn tagged_item(quantity: u32) -> ItemStack {
    ItemStack {
        kind: "nether_star".to_string(),
        tag: Some(ITEM_TAG.to_string()),
        quantity,
    }
}

/// True when the stack carries the teleport item tag.
pub fn is_tagged_item(stack: &ItemStack) -> bool {
    stack.tag.as_deref() == Some(ITEM_TAG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagged_item_round_trips_through_predicate() {
        assert!(is_tagged_item(&tagged_item(1)));
        assert!(!is_tagged_item(&ItemStack::new("nether_star", 1)));
    }

    #[test]
    fn similarity_ignores_quantity() {
        let one = tagged_item(1);
        let many = tagged_item(64);
        assert!(one.is_similar(&many));
    }

    #[test]
    fn similarity_requires_matching_tag() {
        let tagged = tagged_item(1);
        let plain = ItemStack::new("nether_star", 1);
        assert!(!tagged.is_similar(&plain));
    }
}
