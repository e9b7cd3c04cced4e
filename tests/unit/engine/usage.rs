//! Tests for per-frame tile usage flags

#[cfg(test)]
mod tests {
    use mosatile::engine::usage::UsageFlags;

    // Tests fresh flags start clear
    // Verified by initializing flags with every bit set
    #[test]
    fn test_new_flags_clear() {
        let flags = UsageFlags::new(8);

        assert_eq!(flags.len(), 8);
        assert!(!flags.is_empty());
        assert_eq!(flags.used_count(), 0);
        assert!(!flags.is_used(0));
        assert!(!flags.is_used(7));
    }

    // Tests marking records exactly the marked tile
    // Verified by marking the neighboring bit
    #[test]
    fn test_mark_and_query() {
        let mut flags = UsageFlags::new(8);
        flags.mark(3);

        assert!(flags.is_used(3));
        assert!(!flags.is_used(2));
        assert!(!flags.is_used(4));
        assert_eq!(flags.used_count(), 1);
    }

    // Tests marking twice stays a single use
    // Verified by counting marks instead of set bits
    #[test]
    fn test_double_mark_idempotent() {
        let mut flags = UsageFlags::new(4);
        flags.mark(1);
        flags.mark(1);

        assert_eq!(flags.used_count(), 1);
    }

    // Tests out-of-range marks and queries are harmless
    // Verified by indexing the bit storage unchecked
    #[test]
    fn test_out_of_range_ignored() {
        let mut flags = UsageFlags::new(4);
        flags.mark(100);

        assert_eq!(flags.len(), 4);
        assert_eq!(flags.used_count(), 0);
        assert!(!flags.is_used(100));
    }

    // Tests zero-size flags report empty
    // Verified by treating zero tiles as one
    #[test]
    fn test_zero_tiles() {
        let flags = UsageFlags::new(0);

        assert!(flags.is_empty());
        assert_eq!(flags.len(), 0);
        assert!(!flags.is_used(0));
    }
}
