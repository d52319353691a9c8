mod messages_consume;
mod messages_create;
mod status_get;

pub use self::{
    messages_consume::messages_consume, messages_create::messages_create, status_get::status_get,
};
