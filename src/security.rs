mod passwords;
mod tokens;

pub use self::{
    passwords::{hash_password, verify_password},
    tokens::{random_token, tokens_match},
};
