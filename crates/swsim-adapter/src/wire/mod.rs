/*
[INPUT]:  Domain request types
[OUTPUT]: Ordered wire structures ready for envelope serialization
[POS]:    Wire layer - mapping engine
[UPDATE]: When mapping rules or wire value kinds change
*/

pub mod mapping;
pub mod value;

pub use mapping::ToWire;
pub use value::{WireStruct, WireValue};
