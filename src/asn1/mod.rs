//! DER building blocks: magnitude encoding, single TLV nodes, and the
//! composite node types the key structures are made of.

pub mod composite;
pub mod integer;
pub mod primitive;

pub use composite::{
    bit_string, context_tag, null, object_identifier, octet_string, oid_from_bytes, sequence,
};
pub use integer::encode_unsigned;
pub use primitive::{encode_length, integer, node};

/// Universal and context-specific tag octets used by this crate.
pub mod tag {
    pub const INTEGER: u8 = 0x02;
    pub const BIT_STRING: u8 = 0x03;
    pub const OCTET_STRING: u8 = 0x04;
    pub const NULL: u8 = 0x05;
    pub const OBJECT_IDENTIFIER: u8 = 0x06;
    pub const SEQUENCE: u8 = 0x30;
    /// Context-specific, constructed. OR the tag number into the low bits.
    pub const CONTEXT_CONSTRUCTED: u8 = 0xA0;
}
