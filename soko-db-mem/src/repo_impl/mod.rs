use soko_core::repositories::{Error as RepoError, *};

use crate::MemoryBackend;

mod favorite;
mod inventory;
mod place;
mod product;
mod question;
mod review;
mod vote;

type Result<T> = std::result::Result<T, RepoError>;
