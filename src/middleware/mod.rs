pub mod identity;
pub mod request_id;

pub use identity::Identity;
pub use request_id::{make_span, request_id_middleware, RequestId};
