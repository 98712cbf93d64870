//! Entity <-> model mappers

mod cloth;
mod user;
