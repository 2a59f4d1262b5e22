//! paramlog-core
//!
//! Request parameter redaction and the host-agnostic logging middleware.
//! No HTTP framework dependency; hosts plug in through [`RequestContext`].

pub mod config;
pub mod context;
pub mod error;
pub mod exclusion;
pub mod logger;
pub mod mask;
pub mod params;

pub use config::ParamLogConfig;
pub use context::RequestContext;
pub use error::{FormError, ParamLogError};
pub use exclusion::ExclusionList;
pub use logger::{FORM_FIELD, PARAMS_FIELD, ParameterLogger};
pub use mask::{FILTERED, mask_secrets};
pub use params::{FormSubmission, MultipartForm, ParameterMap, Params};
