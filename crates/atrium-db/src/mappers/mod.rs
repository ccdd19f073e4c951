//! Entity <-> model mappers

mod user;
