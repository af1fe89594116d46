pub mod prototype;

pub use prototype::{
    ItemEnvelope, ListEnvelope, Prototype, PrototypeRequest, PrototypeResponse, ResponseBody,
};
