//! Bit layout of a Snowflake identifier
//!
//! ```text
//!  63  62                                     22 21          12 11          0
//! +---+----------------------------------------+--------------+-------------+
//! | 0 |        timestamp delta (41 bits)       | node (10)    | seq (12)    |
//! +---+----------------------------------------+--------------+-------------+
//! ```

/// Width of the timestamp delta field
pub const TIMESTAMP_BITS: u8 = 41;
/// Width of the node id field
pub const NODE_BITS: u8 = 10;
/// Width of the sequence field
pub const SEQUENCE_BITS: u8 = 12;

pub const NODE_SHIFT: u8 = SEQUENCE_BITS;
pub const TIMESTAMP_SHIFT: u8 = NODE_BITS + SEQUENCE_BITS;

/// Largest timestamp delta, in milliseconds (~69.7 years)
pub const MAX_TIMESTAMP: u64 = (1u64 << TIMESTAMP_BITS) - 1;
pub const MAX_NODE_ID: u16 = ((1u32 << NODE_BITS) - 1) as u16;
pub const MAX_SEQUENCE: u16 = ((1u32 << SEQUENCE_BITS) - 1) as u16;

/// Pack the three fields into one identifier.
///
/// Each field is masked to its width first, so an out-of-range node id is
/// truncated instead of spilling into the timestamp.
#[inline(always)]
pub const fn compose(timestamp: u64, node_id: u16, sequence: u16) -> i64 {
    (((timestamp & MAX_TIMESTAMP) << TIMESTAMP_SHIFT)
        | (((node_id & MAX_NODE_ID) as u64) << NODE_SHIFT)
        | ((sequence & MAX_SEQUENCE) as u64)) as i64
}

/// Extract the timestamp delta
#[inline(always)]
pub const fn timestamp(id: i64) -> u64 {
    ((id as u64) >> TIMESTAMP_SHIFT) & MAX_TIMESTAMP
}

/// Extract the node id
#[inline(always)]
pub const fn node_id(id: i64) -> u16 {
    (((id as u64) >> NODE_SHIFT) & MAX_NODE_ID as u64) as u16
}

/// Extract the sequence
#[inline(always)]
pub const fn sequence(id: i64) -> u16 {
    ((id as u64) & MAX_SEQUENCE as u64) as u16
}

/// Split an identifier into timestamp delta, node id and sequence
#[inline]
pub const fn decompose(id: i64) -> (u64, u16, u16) {
    (timestamp(id), node_id(id), sequence(id))
}
