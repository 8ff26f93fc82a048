pub mod form_kind;
pub mod payload;
pub mod session;

pub use form_kind::FormKind;
pub use payload::{FieldValue, FormPayload};
pub use session::FormSession;
