pub use crate::{
    coordinator::DutyCoordinator,
    error::{Error, ErrorKind},
};

mod coordinator;
mod error;
