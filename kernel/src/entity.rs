mod book;
mod common;
mod record;

pub use self::{book::*, common::*, record::*};
